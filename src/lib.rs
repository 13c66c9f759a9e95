//! # tagtree
//!
//! A fluent builder for markup element trees.
//!
//! Build a tree of [`ElementNode`]s by setting tags, attributes, content
//! and children, then call [`ElementNode::render`] to get the markup as a
//! single string.
//!
//! ## Feature Flags
//!
//! - `settings` (default) - TOML-backed rendering defaults via [`settings`]
//!
//! ## Quick Example
//!
//! ```
//! use tagtree::prelude::*;
//!
//! let mut table = ElementNode::new("table");
//! table.add_class("grid");
//! let row = table.spawn_child("tr");
//! row.spawn_child("td").set_content("a");
//! row.spawn_child("td").set_content("b");
//!
//! assert_eq!(
//!     table.render(),
//!     r#"<table class="grid"><tr><td>a</td><td>b</td></tr></table>"#
//! );
//! ```
//!
//! Rendering performs no escaping. Attribute values and content are
//! emitted exactly as stored.

#[cfg(feature = "settings")]
pub mod settings;

// Re-export core types
pub use tagtree_core::{
	Attributes, ContentPlacement, DEFAULT_TAG, DataAccess, ElementNode, Render, VOID_ELEMENTS,
	is_void_element,
};

// Re-export settings
#[cfg(feature = "settings")]
pub use tagtree_settings::{MarkupSettings, SettingsError};

/// Commonly used items.
pub mod prelude {
	pub use crate::{Attributes, ContentPlacement, ElementNode, Render};

	#[cfg(feature = "settings")]
	pub use crate::MarkupSettings;
}
