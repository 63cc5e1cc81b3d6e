//! Stenotype strokes for a configurable keyboard layout.
//!
//! A [`Layout`] converts strokes between raw key masks, key labels and steno
//! notation, and gives strokes a canonical text form and a total order.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod layout;
pub mod order;
pub mod query;
pub mod range;
pub mod steno;
pub mod stroke;

#[cfg(test)]
mod test_support;

pub use codec::StrokeInput;
pub use config::LayoutConfig;
pub use constants::{HYPHEN, MAX_KEYS, NUM_DIGITS, SORT_KEY_DELIMITER, STROKE_DELIMITER};
pub use error::{Result, StrokeError};
pub use keys::{Key, KeyLabel, KeySide, parse_key_label};
pub use layout::{Layout, LayoutBuilder};
pub use order::compare;
pub use range::{StrokeRange, Suffixes};
pub use stroke::{KeyIndices, Stroke};
