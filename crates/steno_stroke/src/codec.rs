//! Conversions between strokes and their external representations: raw
//! masks, key labels and steno notation.

mod decode;
mod encode;

pub use encode::StrokeInput;
