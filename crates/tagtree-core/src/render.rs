//! Rendering capability shared by every node in a tree.

/// Types that serialize themselves to markup.
///
/// Implementors append their output to a caller-owned buffer, so a whole
/// tree renders into a single allocation. Rendering must not mutate the
/// node; calling [`render`](Render::render) twice on an unchanged tree
/// yields identical strings.
///
/// # Example
///
/// ```
/// use tagtree_core::{ElementNode, Render};
///
/// let mut out = String::from("<!DOCTYPE html>");
/// ElementNode::new("html").render_into(&mut out);
/// assert_eq!(out, "<!DOCTYPE html><html></html>");
/// ```
pub trait Render {
	/// Appends the rendered markup to `output`.
	fn render_into(&self, output: &mut String);

	/// Renders into a fresh string.
	fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}
}

impl<T: Render + ?Sized> Render for &T {
	fn render_into(&self, output: &mut String) {
		(**self).render_into(output);
	}
}

impl<T: Render + ?Sized> Render for Box<T> {
	fn render_into(&self, output: &mut String) {
		(**self).render_into(output);
	}
}

impl<T: Render> Render for [T] {
	fn render_into(&self, output: &mut String) {
		for item in self {
			item.render_into(output);
		}
	}
}

impl<T: Render> Render for Vec<T> {
	fn render_into(&self, output: &mut String) {
		self.as_slice().render_into(output);
	}
}
