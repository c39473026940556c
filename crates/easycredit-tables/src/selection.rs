//! Row selection for bulk actions
//!
//! Rows are selected by key (conventionally `_id`). A selection must only name
//! rows that currently exist, so the owning state calls
//! [`Selection::retain_existing`] after every refetch.

use indexmap::IndexSet;
use std::collections::HashSet;

/// Ordered set of selected row keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	keys: IndexSet<String>,
}

impl Selection {
	/// Creates an empty selection
	pub fn new() -> Self {
		Self::default()
	}

	/// Selects `key` if unselected, unselects it otherwise
	///
	/// Returns whether the key is selected afterwards.
	pub fn toggle(&mut self, key: impl Into<String>) -> bool {
		let key = key.into();
		if self.keys.shift_remove(&key) {
			false
		} else {
			self.keys.insert(key);
			true
		}
	}

	/// Selects every given key
	pub fn select_all<I, S>(&mut self, keys: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.keys.extend(keys.into_iter().map(Into::into));
	}

	/// Clears the selection
	pub fn clear(&mut self) {
		self.keys.clear();
	}

	/// Returns whether `key` is selected
	pub fn contains(&self, key: &str) -> bool {
		self.keys.contains(key)
	}

	/// Number of selected keys
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns true if nothing is selected
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Selected keys in selection order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}

	/// Returns true if every visible key is selected and there is at least one
	pub fn is_all_selected<'a, I>(&self, visible: I) -> bool
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut any = false;
		for key in visible {
			if !self.keys.contains(key) {
				return false;
			}
			any = true;
		}
		any
	}

	/// Drops keys that are not in `existing` and returns them
	///
	/// # Examples
	///
	/// ```
	/// use easycredit_tables::Selection;
	///
	/// let mut selection = Selection::new();
	/// selection.select_all(["a", "b", "c"]);
	/// let dropped = selection.retain_existing(["a", "c"]);
	/// assert_eq!(dropped, vec!["b".to_string()]);
	/// assert_eq!(selection.keys().collect::<Vec<_>>(), ["a", "c"]);
	/// ```
	pub fn retain_existing<'a, I>(&mut self, existing: I) -> Vec<String>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let existing: HashSet<&str> = existing.into_iter().collect();
		let mut dropped = Vec::new();
		self.keys.retain(|key| {
			let keep = existing.contains(key.as_str());
			if !keep {
				dropped.push(key.clone());
			}
			keep
		});
		dropped
	}
}
