//! Selection state for a file-list view.
//!
//! The selection is an ordered list of stringified [`FileKey`]s. Order is
//! selection history, not list position: the first key is the anchor of a
//! range and the last key is the most recently added one.

mod key;

pub use key::{FileKey, KeyError, KEY_SEPARATOR};

/// Selected file keys for one file-list session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    keys: Vec<String>,
}

impl SelectionManager {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append `key` to the selection.
    ///
    /// Returns `false` and leaves the selection untouched if the key is
    /// already selected.
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Remove `key` from the selection, returning whether it was selected
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Keep only the keys for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.keys.retain(|k| keep(k));
    }

    /// Whether `key` is selected
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Number of selected keys
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First-selected key (the range anchor)
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    /// Most recently selected key
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Selected keys in selection order
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The file/commit pair to show in a detail panel.
    ///
    /// Only present when exactly one file is selected and its key decodes.
    #[must_use]
    pub fn selected_file(&self) -> Option<FileKey> {
        match self.keys.as_slice() {
            [only] => only.parse().ok(),
            _ => None,
        }
    }
}
