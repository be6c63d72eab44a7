//! Stringified selection keys

use std::fmt;
use std::str::FromStr;

/// Separator between the file id and the commit id in a stringified key
pub const KEY_SEPARATOR: char = '|';

/// Errors produced when decoding a stringified selection key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The file id part of the key is empty
    #[error("selection key {0:?} has an empty file id")]
    EmptyFileId(String),
    /// The key has a separator but nothing after it
    #[error("selection key {0:?} has an empty commit id")]
    EmptyCommitId(String),
}

/// A selected file, optionally scoped to the commit it is shown under.
///
/// Stored in the selection as `file_id` or `file_id|commit_id`. The commit
/// part is split off at the last separator, so file ids may contain `|`
/// as long as the key carries a commit id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey {
    /// Id of the selected file
    pub file_id: String,
    /// Commit the file is listed under, if any
    pub commit_id: Option<String>,
}

impl FileKey {
    /// Key for a file outside of any commit (e.g. the working tree)
    #[must_use]
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            commit_id: None,
        }
    }

    /// Key for a file listed under `commit_id`
    #[must_use]
    pub fn in_commit(file_id: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            commit_id: Some(commit_id.into()),
        }
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.commit_id {
            Some(commit_id) => write!(f, "{}{KEY_SEPARATOR}{commit_id}", self.file_id),
            None => f.write_str(&self.file_id),
        }
    }
}

impl FromStr for FileKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (file_id, commit_id) = match s.rsplit_once(KEY_SEPARATOR) {
            Some((file_id, commit_id)) => {
                if commit_id.is_empty() {
                    return Err(KeyError::EmptyCommitId(s.to_string()));
                }
                (file_id, Some(commit_id.to_string()))
            }
            None => (s, None),
        };

        if file_id.is_empty() {
            return Err(KeyError::EmptyFileId(s.to_string()));
        }

        Ok(Self {
            file_id: file_id.to_string(),
            commit_id,
        })
    }
}
