//! # tagtree-core
//!
//! A fluent builder for markup element trees.
//!
//! ## Overview
//!
//! [`ElementNode`] is the single node type. A tree is assembled by
//! mutating nodes (tag, attributes, content, children) and serialized
//! with [`ElementNode::render`], which walks the tree depth-first and
//! returns one string.
//!
//! Rendering is a literal projection of the tree: attribute values and
//! content are written exactly as given, with no escaping.
//!
//! ## Example
//!
//! ```
//! use tagtree_core::ElementNode;
//!
//! let mut form = ElementNode::new("form");
//! form.set_is_xhtml(true).set_attribute("method", "post");
//! form.spawn_child_with("input", [("name", "q")]);
//! form.spawn_child("button").set_content("Search");
//!
//! assert_eq!(
//!     form.render(),
//!     r#"<form method="post"><input name="q" /><button>Search</button></form>"#
//! );
//! ```
//!
//! ## Features
//!
//! - `serde` - derives `Serialize`/`Deserialize` for [`ContentPlacement`]

pub mod attributes;
pub mod element;
pub mod render;
pub mod void;

pub use attributes::Attributes;
pub use element::{ContentPlacement, DEFAULT_TAG, DataAccess, ElementNode};
pub use render::Render;
pub use void::{VOID_ELEMENTS, is_void_element};
