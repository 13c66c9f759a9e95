//! Rendering defaults loaded from TOML
//!
//! This module provides access to tagtree-settings, which captures the
//! project-wide choices applied to every element a caller creates.
//!
//! ## Example
//!
//! ```rust
//! use tagtree::settings::MarkupSettings;
//!
//! let settings = MarkupSettings::default().with_xhtml(true);
//! assert_eq!(settings.element("hr").render(), "<hr />");
//! ```

pub use tagtree_settings::*;
