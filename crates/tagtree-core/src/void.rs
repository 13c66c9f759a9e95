//! The static table of void elements.
//!
//! Void elements have no body and no closing tag. The table is shared by
//! every node and is never modified at runtime; per-node overrides go
//! through [`ElementNode::set_is_void`](crate::ElementNode::set_is_void).

/// Tag names that render without a body or closing tag.
///
/// Matching is exact and case-sensitive: `"br"` is void, `"BR"` is not.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
	"meta", "param", "source", "track", "wbr",
];

/// Returns whether `tag` is a member of [`VOID_ELEMENTS`].
///
/// This consults the static table only, never a node's own flag.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}
