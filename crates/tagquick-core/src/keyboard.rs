//! Keyboard shortcuts of the gallery page.
//!
//! Space toggles the zoom overlay, Ctrl+1..Ctrl+9 toggle the Nth known tag
//! on the current selection. Shortcuts past the end of the tag list are
//! ignored.

use crate::catalog::Tag;

const WHICH_SPACE: u32 = 32;
const WHICH_DIGIT_1: u32 = 49;
const WHICH_DIGIT_9: u32 = 57;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    /// Digit keys 1..=9
    Digit(u8),
    Other(u32),
}

impl KeyCode {
    /// From a DOM `KeyboardEvent.which` value
    pub fn from_which(which: u32) -> Self {
        match which {
            WHICH_SPACE => Self::Space,
            WHICH_DIGIT_1..=WHICH_DIGIT_9 => {
                // 1..=9, always fits
                Self::Digit(u8::try_from(which - WHICH_DIGIT_1 + 1).unwrap_or(0))
            }
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyPress {
    pub const fn new(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true }
    }

    pub const fn space() -> Self {
        Self::new(KeyCode::Space)
    }

    pub const fn ctrl_digit(n: u8) -> Self {
        Self::ctrl(KeyCode::Digit(n))
    }
}

/// What a key press asks the page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleZoom,
    ToggleTag(Tag),
}

/// Resolve a key press against the currently known tags
pub fn dispatch(key: KeyPress, all_tags: &[Tag]) -> Option<Command> {
    match key.code {
        KeyCode::Space => Some(Command::ToggleZoom),
        KeyCode::Digit(n) if key.ctrl && (1..=9).contains(&n) => all_tags
            .get(usize::from(n - 1))
            .cloned()
            .map(Command::ToggleTag),
        _ => None,
    }
}
