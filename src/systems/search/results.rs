use std::collections::HashSet;

/// Ordered, deduplicated paths matched for the current query.
///
/// `ordered` and `seen` always hold the same paths: every insert goes through
/// [`ResultSet::insert`] and every removal through [`ResultSet::clear`].
#[derive(Debug, Default, Clone)]
pub struct ResultSet {
	ordered: Vec<String>,
	seen: HashSet<String>,
}

impl ResultSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `path` unless it was already accepted. Returns whether it was new.
	pub fn insert(&mut self, path: String) -> bool {
		if self.seen.contains(&path) {
			return false;
		}
		self.seen.insert(path.clone());
		self.ordered.push(path);
		true
	}

	pub fn clear(&mut self) {
		self.ordered.clear();
		self.seen.clear();
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ordered.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ordered.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&str> {
		self.ordered.get(index).map(String::as_str)
	}

	#[must_use]
	pub fn contains(&self, path: &str) -> bool {
		self.seen.contains(path)
	}

	/// Paths in arrival order.
	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.ordered
	}
}
