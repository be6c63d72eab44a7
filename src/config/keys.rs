//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings in a file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select the next file
    SelectNext,
    /// Select the previous file
    SelectPrevious,
    /// Extend the selection downward
    ExtendNext,
    /// Extend the selection upward
    ExtendPrevious,
    /// Close the detail panel and clear the selection
    CloseDetail,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SelectNext => "Select next file",
            Self::SelectPrevious => "Select previous file",
            Self::ExtendNext => "Extend selection down",
            Self::ExtendPrevious => "Extend selection up",
            Self::CloseDetail => "Close details",
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        Self::SelectNext,
        Self::SelectPrevious,
        Self::ExtendNext,
        Self::ExtendPrevious,
        Self::CloseDetail,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Down".to_string(), Action::SelectNext);
        bindings.insert("j".to_string(), Action::SelectNext);
        bindings.insert("Up".to_string(), Action::SelectPrevious);
        bindings.insert("k".to_string(), Action::SelectPrevious);
        bindings.insert("Shift+Down".to_string(), Action::ExtendNext);
        bindings.insert("J".to_string(), Action::ExtendNext);
        bindings.insert("Shift+Up".to_string(), Action::ExtendPrevious);
        bindings.insert("K".to_string(), Action::ExtendPrevious);
        bindings.insert("Esc".to_string(), Action::CloseDetail);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Bindings the user already has are kept as they are.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g. "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Single characters first, then named keys
        keys.sort_by(|a, b| match (a.len() == 1, b.len() == 1) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.cmp(b),
        });
        keys.join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<14} {}", action.description())
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
