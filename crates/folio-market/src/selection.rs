//! User-curated selections.
//!
//! One [`SelectionSet`] per widget. Membership toggling is the only
//! mutation. Iteration follows insertion order so the "selected" strip
//! renders predictably; equality ignores order.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    keys: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` if absent, remove it if present. Returns whether `key` is
    /// selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.shift_remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Pure form of [`toggle`](Self::toggle).
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in the order they were selected.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
