//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,

    // Reads
    /// Start a progress-tracked read of the selected file.
    StartRead,
    /// Cancel the in-flight read.
    CancelRead,
    /// Preset byte-range read (index into the preset table).
    RangePreset(usize),
    /// Render thumbnails for all image files.
    Thumbnails,

    // Application
    ToggleHelp,
    Quit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            // Cancel the in-flight read
            (KeyCode::Esc, _) => KeyAction::CancelRead,
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::CancelRead,

            // Navigation - vim style and arrows
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Reads
            (KeyCode::Enter, _) => KeyAction::StartRead,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::Thumbnails,
            (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
                KeyAction::RangePreset(c as usize - '1' as usize)
            }

            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,

            _ => KeyAction::None,
        }
    }
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings for the help display.
pub fn get_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
        KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
        KeyBinding { keys: "Enter", description: "Read selected file with progress" },
        KeyBinding { keys: "c/Esc", description: "Cancel the in-flight read" },
        KeyBinding { keys: "1-4", description: "Preset byte-range reads" },
        KeyBinding { keys: "t", description: "Render image thumbnails" },
        KeyBinding { keys: "?", description: "Toggle this help" },
        KeyBinding { keys: "q", description: "Quit" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_read_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Enter)), KeyAction::StartRead);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('c'))), KeyAction::CancelRead);
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('1'))),
            KeyAction::RangePreset(0)
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('4'))),
            KeyAction::RangePreset(3)
        );
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
