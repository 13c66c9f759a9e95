//! The element node and its rendering algorithm.
//!
//! An [`ElementNode`] owns its tag, attributes, raw content and children.
//! Trees are built by mutating nodes in place and are serialized with
//! [`ElementNode::render`].
//!
//! ## Example
//!
//! ```
//! use tagtree_core::ElementNode;
//!
//! let mut list = ElementNode::new("ul");
//! list.add_class("menu");
//! list.spawn_child("li").set_content("Home");
//! list.spawn_child("li").set_content("About");
//!
//! assert_eq!(
//!     list.render(),
//!     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
//! );
//! ```

use std::fmt;

use tracing::trace;

use crate::attributes::Attributes;
use crate::render::Render;
use crate::void::is_void_element;

/// Tag used when a node is constructed without one.
pub const DEFAULT_TAG: &str = "div";

/// Prefix prepended to keys by the `data-*` helpers.
const DATA_PREFIX: &str = "data-";

/// Where a node's raw content goes relative to its rendered children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentPlacement {
	/// Content is emitted after the children.
	#[default]
	Append,
	/// Content is emitted before the children.
	Prepend,
}

/// Result of the dual-purpose [`ElementNode::data`] accessor.
#[derive(Debug)]
pub enum DataAccess<'a> {
	/// Returned on a get: the current value, if any.
	Value(Option<&'a str>),
	/// Returned on a set: the node itself, for further chaining.
	Node(&'a mut ElementNode),
}

impl<'a> DataAccess<'a> {
	/// Returns the value read by a get, or `None` after a set.
	pub fn value(self) -> Option<&'a str> {
		match self {
			DataAccess::Value(value) => value,
			DataAccess::Node(_) => None,
		}
	}

	/// Returns the node after a set, or `None` after a get.
	pub fn into_node(self) -> Option<&'a mut ElementNode> {
		match self {
			DataAccess::Node(node) => Some(node),
			DataAccess::Value(_) => None,
		}
	}
}

/// A single markup element in a tree.
///
/// Mutators take `&mut self` and return `&mut Self` so calls chain.
/// [`spawn_child`](Self::spawn_child) is the exception: it returns the
/// newly created child, which makes descending into a tree one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
	/// The tag name (e.g., "div", "span").
	tag: String,
	/// Attributes in render order.
	attributes: Attributes,
	/// Child nodes, exclusively owned.
	children: Vec<ElementNode>,
	/// Raw payload emitted next to the children, verbatim.
	content: String,
	content_placement: ContentPlacement,
	/// Whether this node renders as a lone tag with no body.
	is_void: bool,
	/// Whether void rendering uses the `" /"` self-closing form.
	is_xhtml: bool,
}

impl Default for ElementNode {
	fn default() -> Self {
		Self::new(DEFAULT_TAG)
	}
}

impl ElementNode {
	/// Creates a node with no attributes.
	///
	/// An empty tag falls back to [`DEFAULT_TAG`]. The void flag is taken
	/// from the static table; use [`set_is_void`](Self::set_is_void) to
	/// override it.
	pub fn new(tag: impl Into<String>) -> Self {
		Self::with_attributes(tag, Attributes::new())
	}

	/// Creates a node with an initial attribute set.
	pub fn with_attributes(tag: impl Into<String>, attributes: impl Into<Attributes>) -> Self {
		let mut tag = tag.into();
		if tag.is_empty() {
			tag.push_str(DEFAULT_TAG);
		}
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attributes: attributes.into(),
			children: Vec::new(),
			content: String::new(),
			content_placement: ContentPlacement::Append,
			is_void,
			is_xhtml: false,
		}
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	// Void and XHTML flags

	/// Overrides the void classification of this node.
	///
	/// Useful for custom elements that should render without a closing tag.
	pub fn set_is_void(&mut self, is_void: bool) -> &mut Self {
		if is_void != is_void_element(&self.tag) {
			trace!(tag = %self.tag, is_void, "void classification overridden");
		}
		self.is_void = is_void;
		self
	}

	/// Returns this node's current void flag.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns whether `tag` is in the static void table.
	///
	/// Unlike [`is_void`](Self::is_void) this ignores any node state.
	pub fn is_void_element(tag: &str) -> bool {
		is_void_element(tag)
	}

	/// Returns whether void rendering uses the XHTML self-closing form.
	pub fn is_xhtml(&self) -> bool {
		self.is_xhtml
	}

	/// Sets the XHTML flag.
	///
	/// Existing children are not touched; only children spawned afterwards
	/// inherit the new value.
	pub fn set_is_xhtml(&mut self, is_xhtml: bool) -> &mut Self {
		self.is_xhtml = is_xhtml;
		self
	}

	// Attributes

	/// Returns the attribute map.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the attribute map for direct modification.
	pub fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}

	/// Returns the value of `name`, or `None` when it is not set.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name)
	}

	/// Inserts or overwrites a single attribute.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.attributes.insert(name, value);
		self
	}

	/// Replaces the entire attribute map.
	pub fn set_attributes(&mut self, attributes: impl Into<Attributes>) -> &mut Self {
		self.attributes = attributes.into();
		self
	}

	/// Merges `attributes` into the current map.
	///
	/// Names not mentioned keep their values; mentioned names are
	/// overwritten as if by [`set_attribute`](Self::set_attribute).
	pub fn add_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (name, value) in attributes {
			self.set_attribute(name, value);
		}
		self
	}

	/// Removes an attribute. Does nothing if it is absent.
	pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
		self.attributes.remove(name);
		self
	}

	/// Appends a class name to the `class` attribute.
	pub fn add_class(&mut self, name: impl Into<String>) -> &mut Self {
		let name = name.into();
		// An empty class attribute counts as no classes at all.
		let classes = match self.attribute("class") {
			Some(existing) if !existing.is_empty() => format!("{existing} {name}"),
			_ => name,
		};
		self.set_attribute("class", classes)
	}

	/// Appends each class name in order.
	pub fn add_classes<I, S>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for name in names {
			self.add_class(name);
		}
		self
	}

	/// Removes the first occurrence of a class name.
	///
	/// Does nothing when there is no `class` attribute. Otherwise the
	/// attribute is written back even if it ends up empty.
	pub fn remove_class(&mut self, name: &str) -> &mut Self {
		let Some(existing) = self.attribute("class") else {
			return self;
		};
		let remaining = {
			let mut classes: Vec<&str> = existing.split(' ').collect();
			if let Some(index) = classes.iter().position(|class| *class == name) {
				classes.remove(index);
			}
			classes.join(" ")
		};
		self.set_attribute("class", remaining)
	}

	/// Sets `data-{key}`.
	pub fn set_data(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
		self.set_attribute(format!("{DATA_PREFIX}{key}"), value)
	}

	/// Returns the value of `data-{key}`.
	pub fn data_value(&self, key: &str) -> Option<&str> {
		self.attribute(&format!("{DATA_PREFIX}{key}"))
	}

	/// Removes `data-{key}`. Does nothing if it is absent.
	pub fn remove_data(&mut self, key: &str) -> &mut Self {
		self.remove_attribute(&format!("{DATA_PREFIX}{key}"))
	}

	/// Gets `data-{key}` when `value` is `None`, sets it otherwise.
	///
	/// ```
	/// use tagtree_core::ElementNode;
	///
	/// let mut node = ElementNode::new("div");
	/// node.data("role", Some("menu"));
	/// assert_eq!(node.data("role", None).value(), Some("menu"));
	/// ```
	pub fn data(&mut self, key: &str, value: Option<&str>) -> DataAccess<'_> {
		match value {
			Some(value) => DataAccess::Node(self.set_data(key, value)),
			None => DataAccess::Value(self.data_value(key)),
		}
	}

	// Content

	/// Returns the raw content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Replaces the content.
	pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
		self.content = content.into();
		self
	}

	/// Adds text after the existing content.
	pub fn append_content(&mut self, content: &str) -> &mut Self {
		self.content.push_str(content);
		self
	}

	/// Adds text before the existing content.
	pub fn prepend_content(&mut self, content: &str) -> &mut Self {
		self.content.insert_str(0, content);
		self
	}

	/// Empties the content.
	pub fn clear_content(&mut self) -> &mut Self {
		self.content.clear();
		self
	}

	/// Returns where content renders relative to children.
	pub fn content_placement(&self) -> ContentPlacement {
		self.content_placement
	}

	/// Sets where content renders relative to children.
	pub fn set_content_placement(&mut self, placement: ContentPlacement) -> &mut Self {
		self.content_placement = placement;
		self
	}

	/// Renders content after the children (the default).
	pub fn set_append_content(&mut self) -> &mut Self {
		self.set_content_placement(ContentPlacement::Append)
	}

	/// Renders content before the children.
	pub fn set_prepend_content(&mut self) -> &mut Self {
		self.set_content_placement(ContentPlacement::Prepend)
	}

	// Children

	/// Returns the child nodes.
	pub fn children(&self) -> &[ElementNode] {
		&self.children
	}

	/// Returns the child list for direct modification.
	pub fn children_mut(&mut self) -> &mut Vec<ElementNode> {
		&mut self.children
	}

	/// Appends an existing node as the last child.
	///
	/// The child keeps its own XHTML flag.
	pub fn add_child(&mut self, child: ElementNode) -> &mut Self {
		self.children.push(child);
		self
	}

	/// Creates a child, appends it, and returns it.
	///
	/// The child copies this node's XHTML flag at the moment of the call.
	pub fn spawn_child(&mut self, tag: impl Into<String>) -> &mut ElementNode {
		self.spawn_child_with(tag, Attributes::new())
	}

	/// Like [`spawn_child`](Self::spawn_child), with initial attributes.
	pub fn spawn_child_with(
		&mut self,
		tag: impl Into<String>,
		attributes: impl Into<Attributes>,
	) -> &mut ElementNode {
		let mut child = ElementNode::with_attributes(tag, attributes);
		child.set_is_xhtml(self.is_xhtml);
		trace!(
			parent = %self.tag,
			child = %child.tag,
			is_xhtml = child.is_xhtml,
			"spawned child element"
		);
		self.children.push(child);
		let index = self.children.len() - 1;
		&mut self.children[index]
	}

	// Consuming builders

	/// Adds an attribute, consuming and returning the node.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// Adds a class, consuming and returning the node.
	pub fn class(mut self, name: impl Into<String>) -> Self {
		self.add_class(name);
		self
	}

	/// Sets the content, consuming and returning the node.
	pub fn with_content(mut self, content: impl Into<String>) -> Self {
		self.set_content(content);
		self
	}

	/// Appends a child, consuming and returning the node.
	pub fn child(mut self, child: ElementNode) -> Self {
		self.children.push(child);
		self
	}

	/// Sets the XHTML flag, consuming and returning the node.
	pub fn xhtml(mut self, is_xhtml: bool) -> Self {
		self.set_is_xhtml(is_xhtml);
		self
	}

	/// Overrides the void flag, consuming and returning the node.
	pub fn void(mut self, is_void: bool) -> Self {
		self.set_is_void(is_void);
		self
	}

	// Rendering

	/// Renders this node and all descendants.
	pub fn render(&self) -> String {
		Render::render(self)
	}

	/// Renders the attribute list, each entry prefixed with a space.
	///
	/// Values are written verbatim without escaping.
	pub fn render_attributes(&self) -> String {
		let mut output = String::new();
		self.render_attributes_into(&mut output);
		output
	}

	/// Renders every child in order.
	pub fn render_children(&self) -> String {
		self.children.render()
	}

	fn render_attributes_into(&self, output: &mut String) {
		for (name, value) in self.attributes.iter() {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(value);
			output.push('"');
		}
	}
}

impl Render for ElementNode {
	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		self.render_attributes_into(output);

		if self.is_void {
			// Children and content are dropped, never emitted.
			if self.is_xhtml {
				output.push_str(" /");
			}
			output.push('>');
			return;
		}

		output.push('>');
		match self.content_placement {
			ContentPlacement::Prepend => {
				output.push_str(&self.content);
				self.children.render_into(output);
			}
			ContentPlacement::Append => {
				self.children.render_into(output);
				output.push_str(&self.content);
			}
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

impl fmt::Display for ElementNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
