//! Global keyboard shortcuts.

use crate::input::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    RemoveSelection,
}

impl Shortcut {
    /// Map a key press to a shortcut. Keys are matched case-insensitively.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        if modifiers.command() {
            return match key.as_str() {
                "z" if modifiers.shift => Some(Self::Redo),
                "z" => Some(Self::Undo),
                "y" => Some(Self::Redo),
                _ => None,
            };
        }
        match key.as_str() {
            "delete" | "backspace" => Some(Self::RemoveSelection),
            _ => None,
        }
    }
}
