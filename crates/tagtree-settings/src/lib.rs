//! # tagtree-settings
//!
//! Rendering defaults for element trees, loaded from TOML.
//!
//! A [`MarkupSettings`] value records the choices a project makes once and
//! applies to every element it builds: XHTML self-closing output, content
//! placement, and extra tags that should be treated as void.
//!
//! ## Example
//!
//! ```
//! use tagtree_settings::MarkupSettings;
//!
//! let settings = MarkupSettings::from_toml(r#"
//! xhtml = true
//! void_elements = ["x-icon"]
//! "#).unwrap();
//!
//! let mut nav = settings.element("nav");
//! nav.spawn_child("br");
//! nav.add_child(settings.element("x-icon"));
//!
//! assert_eq!(nav.render(), "<nav><br /><x-icon /></nav>");
//! ```
//!
//! ## File format
//!
//! ```toml
//! xhtml = false
//! content_placement = "prepend"   # or "append"
//! void_elements = ["x-icon", "x-spacer"]
//! ```

pub mod error;

pub use error::{Result, SettingsError};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tagtree_core::{Attributes, ContentPlacement, ElementNode, is_void_element};
use tracing::debug;

/// Defaults applied to elements created through [`MarkupSettings::element`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSettings {
	/// Render void elements in the `" /"` self-closing form.
	pub xhtml: bool,

	/// Where content goes relative to children.
	pub content_placement: ContentPlacement,

	/// Tags treated as void in addition to the static table.
	pub void_elements: Vec<String>,
}

impl MarkupSettings {
	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
			path: path.to_path_buf(),
			source: e,
		})?;

		debug!(path = %path.display(), "loading markup settings");
		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string. Missing keys take their defaults.
	pub fn from_toml(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content).map_err(|e| SettingsError::Parse {
			message: e.to_string(),
		})?;
		debug!(
			xhtml = settings.xhtml,
			placement = ?settings.content_placement,
			extra_void = settings.void_elements.len(),
			"parsed markup settings"
		);
		Ok(settings)
	}

	pub fn with_xhtml(mut self, xhtml: bool) -> Self {
		self.xhtml = xhtml;
		self
	}

	pub fn with_content_placement(mut self, placement: ContentPlacement) -> Self {
		self.content_placement = placement;
		self
	}

	/// Register an extra tag to be treated as void.
	pub fn with_void_element(mut self, tag: impl Into<String>) -> Self {
		let tag = tag.into();
		if !self.void_elements.contains(&tag) {
			self.void_elements.push(tag);
		}
		self
	}

	/// Whether `tag` is void under these settings.
	///
	/// Checks the static table first, then the configured extras.
	pub fn is_void(&self, tag: &str) -> bool {
		is_void_element(tag) || self.void_elements.iter().any(|extra| extra == tag)
	}

	/// Create an element with these settings applied.
	pub fn element(&self, tag: impl Into<String>) -> ElementNode {
		self.element_with(tag, Attributes::new())
	}

	/// Create an element with initial attributes and these settings applied.
	///
	/// Children spawned from the returned node inherit its XHTML flag as
	/// usual; they do not consult the extra void tags.
	pub fn element_with(
		&self,
		tag: impl Into<String>,
		attributes: impl Into<Attributes>,
	) -> ElementNode {
		let mut node = ElementNode::with_attributes(tag, attributes);
		let is_void = self.is_void(node.tag());
		node.set_is_xhtml(self.xhtml)
			.set_content_placement(self.content_placement)
			.set_is_void(is_void);
		debug!(tag = node.tag(), is_void, "created configured element");
		node
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = MarkupSettings::default();
		assert!(!settings.xhtml);
		assert_eq!(settings.content_placement, ContentPlacement::Append);
		assert!(settings.void_elements.is_empty());
	}

	#[rstest]
	fn test_from_toml_empty_uses_defaults() {
		let settings = MarkupSettings::from_toml("").unwrap();
		assert_eq!(settings, MarkupSettings::default());
	}

	#[rstest]
	#[case("append", ContentPlacement::Append)]
	#[case("prepend", ContentPlacement::Prepend)]
	fn test_parse_content_placement(#[case] raw: &str, #[case] expected: ContentPlacement) {
		let settings =
			MarkupSettings::from_toml(&format!("content_placement = \"{raw}\"")).unwrap();
		assert_eq!(settings.content_placement, expected);
	}

	#[rstest]
	fn test_parse_error() {
		let result = MarkupSettings::from_toml("content_placement = \"sideways\"");
		assert!(matches!(result, Err(SettingsError::Parse { .. })));

		let result = MarkupSettings::from_toml("xhtml = ");
		assert!(matches!(result, Err(SettingsError::Parse { .. })));
	}

	#[rstest]
	fn test_builder_setters() {
		let settings = MarkupSettings::default()
			.with_xhtml(true)
			.with_content_placement(ContentPlacement::Prepend)
			.with_void_element("x-icon")
			.with_void_element("x-icon");
		assert!(settings.xhtml);
		assert_eq!(settings.content_placement, ContentPlacement::Prepend);
		assert_eq!(settings.void_elements, vec!["x-icon".to_string()]);
	}

	#[rstest]
	#[case("br", true)]
	#[case("x-icon", true)]
	#[case("div", false)]
	fn test_is_void(#[case] tag: &str, #[case] expected: bool) {
		let settings = MarkupSettings::default().with_void_element("x-icon");
		assert_eq!(settings.is_void(tag), expected);
	}

	#[rstest]
	fn test_element_applies_settings() {
		let settings = MarkupSettings::default()
			.with_xhtml(true)
			.with_content_placement(ContentPlacement::Prepend);

		let mut p = settings.element("p");
		p.set_content("C");
		p.spawn_child("br");

		assert!(p.is_xhtml());
		assert_eq!(p.content_placement(), ContentPlacement::Prepend);
		assert_eq!(p.render(), "<p>C<br /></p>");
	}

	#[rstest]
	fn test_element_with_attributes() {
		let settings = MarkupSettings::default().with_void_element("x-icon");
		let icon = settings.element_with("x-icon", [("name", "home")]);
		assert!(icon.is_void());
		assert_eq!(icon.render(), r#"<x-icon name="home">"#);
	}
}
