/// Layout limits
pub const MAX_KEYS: usize = 63;

/// Notation characters
pub const HYPHEN: char = '-';
pub const STROKE_DELIMITER: char = '/';

/// Number of digit keys a numbers layout must define (0..9)
pub const NUM_DIGITS: u32 = 10;

/// Sort key byte separating strokes; key bytes are always `1 + index`
pub const SORT_KEY_DELIMITER: u8 = 0;
