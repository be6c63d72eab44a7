//! File-list view session.
//!
//! A [`FileListView`] lives for as long as one file list is on screen. It
//! owns the displayed files, the selection and the focused row, and routes
//! key presses through the configured keybindings to the [`Navigator`].
//! Dropping the view drops its selection.

use crate::config::{Action, Config, KeyBindings};
use crate::file::{FileItem, position_of};
use crate::navigator::{FocusTarget, NavigationEvent, NavigationOutcome, Navigator};
use crate::selection::{FileKey, SelectionManager};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

/// Focused row within a list of `len` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusCursor {
    index: usize,
    len: usize,
}

impl FocusCursor {
    /// Cursor on the first of `len` rows
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Focused row
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of rows
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no rows to focus
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Focus row `index`, returning `false` if it does not exist
    pub const fn focus_at(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Resize the list, keeping focus on the last row if it shrank past it
    pub const fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = if len == 0 {
            0
        } else if self.index >= len {
            len - 1
        } else {
            self.index
        };
    }
}

impl FocusTarget for FocusCursor {
    fn focus_previous(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(index) if index < self.len => {
                self.index = index;
                true
            }
            _ => false,
        }
    }

    fn focus_next(&mut self) -> bool {
        let index = self.index.saturating_add(1);
        self.focus_at(index)
    }
}

/// One on-screen file list and its selection
#[derive(Debug, Clone)]
pub struct FileListView<F> {
    files: Vec<F>,
    selection: SelectionManager,
    focus: FocusCursor,
    navigator: Navigator,
    keys: KeyBindings,
}

impl<F: FileItem> FileListView<F> {
    /// Open a view over `files` with nothing selected
    #[must_use]
    pub fn new(files: Vec<F>, config: &Config) -> Self {
        let focus = FocusCursor::new(files.len());
        Self {
            files,
            selection: SelectionManager::new(),
            focus,
            navigator: Navigator::new(config.allow_multiple),
            keys: config.keys.clone(),
        }
    }

    /// Scope selection keys to the commit whose files this view lists
    #[must_use]
    pub fn in_commit(mut self, commit_id: impl Into<String>) -> Self {
        self.navigator = self.navigator.in_commit(commit_id);
        self
    }

    /// Displayed files in list order
    #[must_use]
    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Focus cursor
    #[must_use]
    pub const fn focus(&self) -> &FocusCursor {
        &self.focus
    }

    /// File behind the focused row
    #[must_use]
    pub fn focused_file(&self) -> Option<&F> {
        self.files.get(self.focus.index())
    }

    /// File/commit pair for the detail panel, when exactly one file is selected
    #[must_use]
    pub fn selected_file(&self) -> Option<FileKey> {
        self.selection.selected_file()
    }

    /// Focus and select only the file at `index` (a click on a row).
    ///
    /// Returns `false` if there is no such row.
    pub fn select_only(&mut self, index: usize) -> bool {
        let Some(file) = self.files.get(index) else {
            return false;
        };
        let key = self.navigator.key_for(file);
        self.focus.focus_at(index);
        self.selection.clear();
        self.selection.add(key);
        true
    }

    /// Replace the displayed files.
    ///
    /// Selected files that are no longer listed are deselected and focus
    /// follows the previously focused file when it is still listed.
    pub fn set_files(&mut self, files: Vec<F>) {
        let focused_id = self.focused_file().map(|file| file.id().to_string());
        self.files = files;
        self.focus.set_len(self.files.len());
        if let Some(index) = focused_id.and_then(|id| position_of(&self.files, &id)) {
            self.focus.focus_at(index);
        }

        let files = &self.files;
        let before = self.selection.len();
        self.selection.retain(|key| {
            key.parse::<FileKey>()
                .is_ok_and(|key| position_of(files, &key.file_id).is_some())
        });
        let dropped = before - self.selection.len();
        if dropped > 0 {
            debug!(dropped, "deselected files no longer listed");
        }
    }

    /// Apply one navigation event to the selection and focus
    pub fn navigate(&mut self, event: NavigationEvent) -> NavigationOutcome {
        let Some(current) = self.files.get(self.focus.index()) else {
            return NavigationOutcome::default();
        };
        self.navigator.navigate(
            event,
            current,
            &self.files,
            &mut self.selection,
            &mut self.focus,
        )
    }

    /// Handle a key press through the configured keybindings.
    ///
    /// Returns `None` if the key is not bound.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<NavigationOutcome> {
        let action = self.keys.get_action(code, modifiers)?;
        let outcome = match action {
            Action::SelectNext => self.navigate(NavigationEvent::new(KeyCode::Down, false)),
            Action::SelectPrevious => self.navigate(NavigationEvent::new(KeyCode::Up, false)),
            Action::ExtendNext => self.navigate(NavigationEvent::new(KeyCode::Down, true)),
            Action::ExtendPrevious => self.navigate(NavigationEvent::new(KeyCode::Up, true)),
            Action::CloseDetail => NavigationOutcome {
                selection_changed: self.close_detail(),
                ..NavigationOutcome::default()
            },
        };
        Some(outcome)
    }

    /// Close the detail panel, clearing the selection.
    ///
    /// Returns whether anything was selected.
    pub fn close_detail(&mut self) -> bool {
        let had_selection = !self.selection.is_empty();
        self.selection.clear();
        had_selection
    }
}
