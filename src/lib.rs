//! filenav - keyboard multi-select for changed-file lists
//!
//! filenav implements the arrow-key selection behaviour of a Git client's
//! file list: plain Up/Down moves a single selection along with focus,
//! while Shift+Up/Down grows or shrinks a range anchored at the first
//! selected file.

pub mod config;
pub mod file;
pub mod logging;
pub mod navigator;
pub mod paths;
pub mod selection;
pub mod view;

pub use config::Config;
pub use file::{ChangeStatus, ChangedFile, FileItem};
pub use navigator::{
    Direction, FocusTarget, NavigationEvent, NavigationKey, NavigationOutcome, Navigator,
};
pub use selection::{FileKey, KeyError, SelectionManager};
pub use view::{FileListView, FocusCursor};
