//! Integration tests for keyboard selection in a file list
//!
//! These drive the public API the way a TUI event loop would: build a view
//! over changed files, feed it key events and inspect the selection.

use filenav::{
    ChangeStatus, ChangedFile, Config, Direction, FileKey, FileListView, FocusTarget,
    NavigationEvent, Navigator, SelectionManager,
};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

fn four_files() -> Vec<ChangedFile> {
    vec![
        ChangedFile::new("A", ChangeStatus::Added),
        ChangedFile::new("B", ChangeStatus::Modified),
        ChangedFile::new("C", ChangeStatus::Deleted),
        ChangedFile::new("D", ChangeStatus::Renamed),
    ]
}

/// Focus that never has siblings, for driving the navigator directly
#[derive(Debug, Default)]
struct NoSiblings;

impl FocusTarget for NoSiblings {
    fn focus_previous(&mut self) -> bool {
        false
    }

    fn focus_next(&mut self) -> bool {
        false
    }
}

#[test]
fn test_extend_then_reverse() {
    let files = four_files();
    let mut selection = SelectionManager::new();
    selection.add("B");
    let navigator = Navigator::new(true);

    let outcome = navigator.navigate(
        NavigationEvent::from(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT)),
        &files[1],
        &files,
        &mut selection,
        &mut NoSiblings,
    );
    assert_eq!(outcome.direction, Direction::Down);
    assert_eq!(selection.keys(), ["B", "C"]);

    let outcome = navigator.navigate(
        NavigationEvent::from(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)),
        &files[1],
        &files,
        &mut selection,
        &mut NoSiblings,
    );
    assert_eq!(outcome.direction, Direction::Down);
    assert_eq!(selection.keys(), ["B", "A"]);
}

#[test]
fn test_plain_up_collapses_range() {
    let mut view = FileListView::new(four_files(), &Config::default());
    view.select_only(2);
    view.handle_key(KeyCode::Down, KeyModifiers::SHIFT);
    assert_eq!(view.selection().keys(), ["C", "D"]);

    // Focus stays on C while the range grows, so Up focuses B
    let outcome = view.handle_key(KeyCode::Up, KeyModifiers::NONE);

    assert!(outcome.is_some_and(|o| o.focus_moved && o.selection_changed));
    assert_eq!(view.selection().keys(), ["C"]);
    assert_eq!(view.focus().index(), 1);
}

#[test]
fn test_plain_down_after_upward_range() {
    let mut view = FileListView::new(four_files(), &Config::default());
    view.select_only(2);
    view.handle_key(KeyCode::Up, KeyModifiers::SHIFT);
    view.handle_key(KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(view.selection().keys(), ["C", "B", "A"]);

    view.handle_key(KeyCode::Down, KeyModifiers::NONE);

    assert_eq!(view.selection().keys(), ["B"]);
    assert_eq!(view.focus().index(), 3);
}

#[test]
fn test_range_walk_never_duplicates() {
    let mut view = FileListView::new(four_files(), &Config::default());
    view.select_only(0);

    for _ in 0..10 {
        view.handle_key(KeyCode::Down, KeyModifiers::SHIFT);
    }
    assert_eq!(view.selection().keys(), ["A", "B", "C", "D"]);

    for _ in 0..10 {
        view.handle_key(KeyCode::Up, KeyModifiers::SHIFT);
    }
    assert_eq!(view.selection().keys(), ["A"]);
}

#[test]
fn test_detail_panel_follows_single_selection() {
    let mut view = FileListView::new(four_files(), &Config::default()).in_commit("c0ffee");
    view.select_only(1);
    assert_eq!(view.selected_file(), Some(FileKey::in_commit("B", "c0ffee")));

    view.handle_key(KeyCode::Down, KeyModifiers::SHIFT);
    assert_eq!(view.selected_file(), None);

    view.handle_key(KeyCode::Esc, KeyModifiers::NONE);
    assert!(view.selection().is_empty());
}

#[test]
fn test_config_file_drives_view() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"allow_multiple": false}"#)?;
    let config = Config::load_from(&path)?;

    let mut view = FileListView::new(four_files(), &config);
    view.select_only(0);
    view.handle_key(KeyCode::Char('J'), KeyModifiers::SHIFT);

    assert_eq!(view.selection().keys(), ["B"]);
    Ok(())
}
