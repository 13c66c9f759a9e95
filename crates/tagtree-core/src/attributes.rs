//! Ordered attribute storage for element nodes.
//!
//! Attributes render in the order their names were first inserted. Setting
//! an existing name replaces the value in place, so re-serializing a node
//! after an update keeps the attribute order stable.

use indexmap::IndexMap;

/// An insertion-ordered mapping from attribute name to attribute value.
///
/// Keys are unique; the last write for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, String>,
}

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Inserts or overwrites `name`.
	///
	/// Returns the previous value if the name was already present. An
	/// overwritten name keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(name.into(), value.into())
	}

	/// Removes `name`, preserving the order of the remaining attributes.
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.entries.shift_remove(name)
	}

	/// Returns whether `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no attributes are set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in render order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Iterates over attribute names in render order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		attributes.extend(iter);
		attributes
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl IntoIterator for Attributes {
	type Item = (String, String);
	type IntoIter = indexmap::map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a String);
	type IntoIter = indexmap::map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_preserves_order() {
		let mut attrs = Attributes::new();
		attrs.insert("id", "main");
		attrs.insert("class", "box");
		attrs.insert("title", "t");

		let names: Vec<_> = attrs.names().collect();
		assert_eq!(names, vec!["id", "class", "title"]);
	}

	#[rstest]
	fn test_overwrite_keeps_position() {
		let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
		let previous = attrs.insert("a", "3");

		assert_eq!(previous.as_deref(), Some("1"));
		assert_eq!(attrs.len(), 2);
		let pairs: Vec<_> = attrs.iter().collect();
		assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
	}

	#[rstest]
	fn test_remove_keeps_remaining_order() {
		let mut attrs = Attributes::from([("a", "1"), ("b", "2"), ("c", "3")]);
		assert_eq!(attrs.remove("a").as_deref(), Some("1"));

		let names: Vec<_> = attrs.names().collect();
		assert_eq!(names, vec!["b", "c"]);
	}

	#[rstest]
	fn test_remove_missing_is_none() {
		let mut attrs = Attributes::new();
		assert_eq!(attrs.remove("missing"), None);
		assert!(attrs.is_empty());
	}

	#[rstest]
	fn test_from_iter_last_write_wins() {
		let attrs: Attributes = vec![("k", "first"), ("other", "x"), ("k", "second")]
			.into_iter()
			.collect();

		assert_eq!(attrs.len(), 2);
		assert_eq!(attrs.get("k"), Some("second"));
		assert!(attrs.contains("other"));
	}
}
