//! Arrow-key selection navigation.
//!
//! [`Navigator::navigate`] turns an Up/Down key press into selection and
//! focus changes. Without the extend modifier the selection collapses to the
//! neighbouring file and focus follows it. With the modifier (and
//! multi-select allowed) the range anchored at the first selected file grows
//! in the pressed direction, or shrinks when the key points back toward the
//! anchor.

use crate::file::{FileItem, next_file, position_of, previous_file};
use crate::selection::{FileKey, SelectionManager};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

/// Direction a multi-file selection extends in, by list position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Last-selected file sits above the anchor
    Up,
    /// Last-selected file sits below the anchor
    Down,
    /// Anchor and last-selected file coincide (or are not displayed)
    #[default]
    None,
}

impl Direction {
    /// Whether moving toward `other` reverses this direction
    #[must_use]
    pub const fn opposes(self, other: Self) -> bool {
        matches!((self, other), (Self::Up, Self::Down) | (Self::Down, Self::Up))
    }
}

/// The two keys the navigator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
}

impl NavigationKey {
    /// Map a terminal key code to a navigation key
    #[must_use]
    pub const fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            _ => None,
        }
    }

    /// Selection direction implied by this key
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Up => Direction::Up,
            Self::Down => Direction::Down,
        }
    }

    fn adjacent<'a, F: FileItem>(self, files: &'a [F], id: &str) -> Option<&'a F> {
        match self {
            Self::Up => previous_file(files, id),
            Self::Down => next_file(files, id),
        }
    }
}

/// A key press as seen by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Key that was pressed
    pub code: KeyCode,
    /// Whether the range-extend modifier (Shift) was held
    pub extend: bool,
}

impl NavigationEvent {
    /// Create an event from a key code and an explicit extend flag
    #[must_use]
    pub const fn new(code: KeyCode, extend: bool) -> Self {
        Self { code, extend }
    }

    /// Create an event from a key code and its modifiers
    #[must_use]
    pub const fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            extend: modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

impl From<KeyEvent> for NavigationEvent {
    fn from(event: KeyEvent) -> Self {
        Self::from_key(event.code, event.modifiers)
    }
}

/// Moves UI focus between sibling rows of a file list.
pub trait FocusTarget {
    /// Focus the previous sibling. Returns `false` if there is none.
    fn focus_previous(&mut self) -> bool;

    /// Focus the next sibling. Returns `false` if there is none.
    fn focus_next(&mut self) -> bool;
}

/// What a single navigation event did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationOutcome {
    /// Selection direction the event was resolved against
    pub direction: Direction,
    /// Whether the selected keys changed
    pub selection_changed: bool,
    /// Whether focus moved to a sibling
    pub focus_moved: bool,
}

/// Applies arrow-key navigation to a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    allow_multiple: bool,
    commit_id: Option<String>,
}

impl Navigator {
    /// Create a navigator; `allow_multiple` enables Shift range selection
    #[must_use]
    pub const fn new(allow_multiple: bool) -> Self {
        Self {
            allow_multiple,
            commit_id: None,
        }
    }

    /// Scope the keys this navigator selects to `commit_id`
    #[must_use]
    pub fn in_commit(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    /// Whether Shift range selection is enabled
    #[must_use]
    pub const fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Commit the selected keys are scoped to, if any
    #[must_use]
    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }

    /// Selection key for `file` in this navigator's commit scope
    #[must_use]
    pub fn key_for<F: FileItem>(&self, file: &F) -> String {
        FileKey {
            file_id: file.id().to_string(),
            commit_id: self.commit_id.clone(),
        }
        .to_string()
    }

    /// Handle one key press.
    ///
    /// `current` is the file behind the focused row. Keys other than Up and
    /// Down, an empty selection and keys that fail to decode are ignored.
    pub fn navigate<F: FileItem>(
        &self,
        event: NavigationEvent,
        current: &F,
        files: &[F],
        selection: &mut SelectionManager,
        focus: &mut impl FocusTarget,
    ) -> NavigationOutcome {
        let Some(key) = NavigationKey::from_key_code(event.code) else {
            return NavigationOutcome::default();
        };
        let (Some(first), Some(last)) = (
            decode_file_id(selection.first()),
            decode_file_id(selection.last()),
        ) else {
            return NavigationOutcome::default();
        };

        let mut direction = selection_direction(files, &first, &last);
        let before = selection.keys().to_vec();

        let focus_moved = if event.extend && self.allow_multiple {
            self.extend(key, &mut direction, files, selection);
            false
        } else {
            self.step(key, current, &last, files, selection, focus)
        };

        NavigationOutcome {
            direction,
            selection_changed: selection.keys() != before.as_slice(),
            focus_moved,
        }
    }

    fn extend<F: FileItem>(
        &self,
        key: NavigationKey,
        direction: &mut Direction,
        files: &[F],
        selection: &mut SelectionManager,
    ) {
        if selection.len() == 1 {
            *direction = key.direction();
        } else if direction.opposes(key.direction())
            && let Some(last) = selection.last().map(str::to_owned)
        {
            debug!(?key, removed = %last, "shrinking selection toward anchor");
            selection.remove(&last);
        }

        let Some(last) = decode_file_id(selection.last()) else {
            return;
        };
        if let Some(file) = key.adjacent(files, &last) {
            let added = self.key_for(file);
            if selection.add(added.clone()) {
                debug!(?key, %added, "extended selection");
            }
        }
    }

    fn step<F: FileItem>(
        &self,
        key: NavigationKey,
        current: &F,
        last: &str,
        files: &[F],
        selection: &mut SelectionManager,
        focus: &mut impl FocusTarget,
    ) -> bool {
        let focus_moved = match key {
            NavigationKey::Up => focus.focus_previous(),
            NavigationKey::Down => focus.focus_next(),
        };

        let origin = if selection.len() > 1 {
            last
        } else {
            current.id()
        };
        if let Some(file) = key.adjacent(files, origin) {
            let selected = self.key_for(file);
            debug!(?key, %selected, "moved selection");
            selection.clear();
            selection.add(selected);
        }

        focus_moved
    }
}

/// Direction from the anchor `first` to the last-selected `last`, by list position.
#[must_use]
pub fn selection_direction<F: FileItem>(files: &[F], first: &str, last: &str) -> Direction {
    match (position_of(files, first), position_of(files, last)) {
        (Some(first), Some(last)) if last > first => Direction::Down,
        (Some(first), Some(last)) if last < first => Direction::Up,
        _ => Direction::None,
    }
}

fn decode_file_id(key: Option<&str>) -> Option<String> {
    match key?.parse::<FileKey>() {
        Ok(key) => Some(key.file_id),
        Err(err) => {
            warn!(error = %err, "ignoring undecodable selection key");
            None
        }
    }
}
