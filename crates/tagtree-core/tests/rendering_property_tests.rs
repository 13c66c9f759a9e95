//! Property-based tests for the rendering algorithm.

use proptest::prelude::*;
use rstest::*;
use tagtree_core::{ElementNode, VOID_ELEMENTS, is_void_element};

fn non_void_tag() -> impl Strategy<Value = String> {
	"[a-z]{1,8}".prop_filter("tag must not be void", |tag| !is_void_element(tag))
}

fn void_tag() -> impl Strategy<Value = String> {
	prop::sample::select(VOID_ELEMENTS).prop_map(str::to_string)
}

// ============================================================================
// Property-Based Tests: ElementNode::render
// ============================================================================

proptest! {
	/// Test: non-void elements open and close with their tag
	///
	/// Category: Property
	#[rstest]
	fn prop_non_void_wraps_body(
		tag in non_void_tag(),
		content in "[a-z ]{0,20}",
		child_count in 0usize..4,
	) {
		let mut node = ElementNode::new(tag.clone());
		node.set_content(content);
		for _ in 0..child_count {
			node.spawn_child("span");
		}

		let out = node.render();
		let open = format!("<{tag}>");
		let close = format!("</{tag}>");
		prop_assert!(out.starts_with(&open));
		prop_assert!(out.ends_with(&close));
	}

	/// Test: void elements never render a body or closing tag
	///
	/// Category: Property
	#[rstest]
	fn prop_void_has_no_body(
		tag in void_tag(),
		content in "[a-z]{0,20}",
		xhtml in any::<bool>(),
	) {
		let mut node = ElementNode::new(tag.clone());
		node.set_is_xhtml(xhtml).set_content(content);
		node.spawn_child("span");

		let expected = if xhtml { format!("<{tag} />") } else { format!("<{tag}>") };
		prop_assert_eq!(node.render(), expected);
	}

	/// Test: rendering twice yields identical output
	///
	/// Category: Property
	#[rstest]
	fn prop_render_idempotent(
		attrs in prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,6}"), 0..6),
		classes in prop::collection::vec("[a-z]{1,6}", 0..4),
		prepend in any::<bool>(),
	) {
		let mut node = ElementNode::new("div");
		node.add_attributes(attrs).add_classes(classes).set_content("x");
		if prepend {
			node.set_prepend_content();
		}
		node.spawn_child("p").spawn_child("br");

		prop_assert_eq!(node.render(), node.render());
	}

	/// Test: attributes render in first-insertion order with last value
	///
	/// Category: Property
	#[rstest]
	fn prop_attribute_order_stable(
		names in prop::collection::vec("[a-z]{1,6}", 1..6),
	) {
		let mut node = ElementNode::new("span");
		for name in &names {
			node.set_attribute(name.clone(), "1");
		}
		for name in &names {
			node.set_attribute(name.clone(), "2");
		}

		let mut expected = String::new();
		let mut seen = Vec::new();
		for name in &names {
			if !seen.contains(name) {
				expected.push_str(&format!(" {name}=\"2\""));
				seen.push(name.clone());
			}
		}
		prop_assert_eq!(node.render_attributes(), expected);
	}
}
