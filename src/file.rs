//! File items and list-position lookups.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An entry in a file list, identified by a stable id.
///
/// Items carry no ordering of their own; their order is their position in
/// the slice they are displayed from.
pub trait FileItem {
    /// Stable identifier of this item
    fn id(&self) -> &str;
}

impl FileItem for String {
    fn id(&self) -> &str {
        self
    }
}

impl FileItem for &str {
    fn id(&self) -> &str {
        self
    }
}

/// How a file changed relative to its base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// File was added
    Added,
    /// File contents changed
    Modified,
    /// File was removed
    Deleted,
    /// File was moved to a new path
    Renamed,
}

impl ChangeStatus {
    /// Single-letter marker used in file lists (`A`, `M`, `D`, `R`)
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
        }
    }
}

/// A changed file in a commit or the working tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Stable id, the repository-relative path
    pub id: String,
    /// Repository-relative path
    pub path: PathBuf,
    /// Kind of change
    pub status: ChangeStatus,
}

impl ChangedFile {
    /// Create a changed file whose id is its path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, status: ChangeStatus) -> Self {
        let path = path.into();
        Self {
            id: path.to_string_lossy().into_owned(),
            path,
            status,
        }
    }

    /// Repository-relative path of this file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileItem for ChangedFile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// List position of the item with `id`, if it is displayed.
#[must_use]
pub fn position_of<F: FileItem>(files: &[F], id: &str) -> Option<usize> {
    files.iter().position(|file| file.id() == id)
}

/// The item displayed directly after `id`, or `None` at the end of the list.
#[must_use]
pub fn next_file<'a, F: FileItem>(files: &'a [F], id: &str) -> Option<&'a F> {
    let position = position_of(files, id)?;
    files.get(position + 1)
}

/// The item displayed directly before `id`, or `None` at the start of the list.
#[must_use]
pub fn previous_file<'a, F: FileItem>(files: &'a [F], id: &str) -> Option<&'a F> {
    let position = position_of(files, id)?;
    files.get(position.checked_sub(1)?)
}
