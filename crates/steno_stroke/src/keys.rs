use crate::constants::HYPHEN;
use crate::error::{Result, StrokeError};
use std::fmt;

/// Which half of the keyboard a key letter belongs to.
///
/// `None` keys (`#`, `*`) are unambiguous on their own, `Left` keys are
/// written `S-` and `Right` keys `-S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySide {
    None,
    Left,
    Right,
}

/// One physical key of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub side: KeySide,
    /// Letter in normal mode.
    pub letter: char,
    /// Letter in digit mode (same as `letter` for keys without a digit).
    pub number: char,
}

impl Key {
    pub fn new(letter: char, side: KeySide) -> Self {
        Self {
            side,
            letter,
            number: letter,
        }
    }

    /// Label of the key in normal mode (`S-`, `-T`, `*`).
    pub fn label(&self) -> KeyLabel {
        KeyLabel {
            letter: self.letter,
            side: self.side,
        }
    }
}

/// A parsed key label: a letter plus the side its hyphen places it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyLabel {
    pub letter: char,
    pub side: KeySide,
}

impl KeyLabel {
    pub fn is_digit(&self) -> bool {
        self.letter.is_ascii_digit()
    }
}

impl fmt::Display for KeyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            KeySide::None => write!(f, "{}", self.letter),
            KeySide::Left => write!(f, "{}{HYPHEN}", self.letter),
            KeySide::Right => write!(f, "{HYPHEN}{}", self.letter),
        }
    }
}

/// Parse a 1 or 2 character key label.
///
/// - `X`  -> letter `X`, no side
/// - `X-` -> letter `X`, left side
/// - `-X` -> letter `X`, right side
///
/// A lone hyphen, `--`, and anything longer are rejected.
pub fn parse_key_label(label: &str) -> Result<KeyLabel> {
    let invalid = || StrokeError::InvalidKeyLabel(label.to_string());

    let mut chars = label.chars();
    let first = chars.next().ok_or_else(invalid)?;
    let second = chars.next();
    if chars.next().is_some() {
        return Err(invalid());
    }

    let (letter, side) = match (first, second) {
        (HYPHEN, None) | (HYPHEN, Some(HYPHEN)) => return Err(invalid()),
        (letter, None) => (letter, KeySide::None),
        (HYPHEN, Some(letter)) => (letter, KeySide::Right),
        (letter, Some(HYPHEN)) => (letter, KeySide::Left),
        _ => return Err(invalid()),
    };

    Ok(KeyLabel { letter, side })
}
