//! Keyboard layout model and its builder.
//!
//! A [`Layout`] is validated once by [`LayoutBuilder::build`] and is
//! immutable afterwards, so it can be shared freely between threads.

use crate::constants::{MAX_KEYS, NUM_DIGITS};
use crate::error::{Result, StrokeError};
use crate::keys::{Key, KeyLabel, KeySide, parse_key_label};
use crate::stroke::{lsb, msb};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub(crate) keys: Vec<Key>,
    pub(crate) implicit_hyphen_mask: u64,
    pub(crate) number_key_mask: u64,
    pub(crate) numbers_mask: u64,
    pub(crate) right_keys_index: usize,
}

impl Layout {
    pub fn builder<I, S>(keys: I) -> LayoutBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LayoutBuilder::new(keys)
    }

    pub fn num_keys(&self) -> usize {
        self.keys.len()
    }

    /// Mask with one bit per key of the layout.
    pub fn keys_mask(&self) -> u64 {
        (1u64 << self.keys.len()) - 1
    }

    /// Index of the first right-hand key, or `num_keys` if there is none.
    pub fn right_keys_index(&self) -> usize {
        self.right_keys_index
    }

    pub fn implicit_hyphen_mask(&self) -> u64 {
        self.implicit_hyphen_mask
    }

    pub fn number_key_mask(&self) -> u64 {
        self.number_key_mask
    }

    pub fn numbers_mask(&self) -> u64 {
        self.numbers_mask
    }

    pub fn key(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Key labels in layout order (`#`, `S-`, ..., `-Z`).
    pub fn keys(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.label().to_string()).collect()
    }

    /// Normal-mode letter of every key, in layout order.
    pub fn letters(&self) -> String {
        self.keys.iter().map(|k| k.letter).collect()
    }

    /// Digit-mode letter of every key, in layout order.
    pub fn numbers(&self) -> String {
        self.keys.iter().map(|k| k.number).collect()
    }

    /// Key index range a label with the given side may match.
    pub(crate) fn side_range(&self, side: KeySide) -> std::ops::Range<usize> {
        match side {
            KeySide::None => 0..self.keys.len(),
            KeySide::Left => 0..self.right_keys_index,
            KeySide::Right => self.right_keys_index..self.keys.len(),
        }
    }

    /// Find the key named by `label`, digit labels matching digit-mode letters.
    pub(crate) fn find_key(&self, label: KeyLabel) -> Option<usize> {
        let digit = label.is_digit();
        self.side_range(label.side).find(|&k| {
            let key = &self.keys[k];
            let letter = if digit { key.number } else { key.letter };
            letter == label.letter && key.side == label.side
        })
    }
}

/// Raw layout description, validated by [`LayoutBuilder::build`].
///
/// ```
/// use steno_stroke::Layout;
///
/// let layout = Layout::builder(["S-", "T-", "K-", "-R", "-E", "-D"])
///     .build()
///     .unwrap();
/// assert_eq!(layout.right_keys_index(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    keys: Vec<String>,
    implicit_hyphen_keys: Option<Vec<String>>,
    number_key: Option<String>,
    numbers: Vec<(String, String)>,
}

impl LayoutBuilder {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    /// Keys whose presence makes the hyphen unnecessary. When not given,
    /// they are derived from the unique letters around the left/right split.
    pub fn implicit_hyphen_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.implicit_hyphen_keys = Some(keys.into_iter().map(|k| k.as_ref().to_string()).collect());
        self
    }

    pub fn number_key(mut self, key: impl AsRef<str>) -> Self {
        self.number_key = Some(key.as_ref().to_string());
        self
    }

    /// Digit substitutions: `(key label, digit label)`, e.g. `("S-", "1-")`.
    pub fn numbers<I, K, D>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: AsRef<str>,
    {
        self.numbers = numbers
            .into_iter()
            .map(|(k, d)| (k.as_ref().to_string(), d.as_ref().to_string()))
            .collect();
        self
    }

    pub fn build(&self) -> Result<Layout> {
        let num_keys = self.keys.len();
        if num_keys == 0 || num_keys > MAX_KEYS {
            return Err(StrokeError::UnsupportedKeyCount(num_keys));
        }

        let mut keys = Vec::with_capacity(num_keys);
        let mut right_keys_index = num_keys;
        for (k, raw) in self.keys.iter().enumerate() {
            let label = parse_key_label(raw)?;
            match label.side {
                KeySide::None => {}
                KeySide::Left if right_keys_index != num_keys => {
                    return Err(StrokeError::InvalidSideOrder(raw.clone()));
                }
                KeySide::Left => {}
                KeySide::Right if right_keys_index == num_keys => right_keys_index = k,
                KeySide::Right => {}
            }
            keys.push(Key::new(label.letter, label.side));
        }

        let mut layout = Layout {
            keys,
            implicit_hyphen_mask: 0,
            number_key_mask: 0,
            numbers_mask: 0,
            right_keys_index,
        };

        self.apply_numbers(&mut layout)?;
        layout.implicit_hyphen_mask = match &self.implicit_hyphen_keys {
            Some(entries) => explicit_implicit_hyphen_mask(&layout, entries)?,
            None => derive_implicit_hyphen_mask(&layout),
        };

        debug!(
            "Layout built: {} keys, right keys at {}, implicit hyphen {:#x}, number key {:#x}, numbers {:#x}",
            layout.num_keys(),
            layout.right_keys_index,
            layout.implicit_hyphen_mask,
            layout.number_key_mask,
            layout.numbers_mask
        );

        Ok(layout)
    }

    fn apply_numbers(&self, layout: &mut Layout) -> Result<()> {
        let Some(raw_number_key) = &self.number_key else {
            if !self.numbers.is_empty() {
                return Err(StrokeError::InvalidDigitMap(
                    "digits given without a number key".to_string(),
                ));
            }
            return Ok(());
        };

        let number_key = parse_key_label(raw_number_key)
            .map_err(|_| StrokeError::InvalidNumberKey(raw_number_key.clone()))?;
        let mut matching = layout
            .keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.letter == number_key.letter);
        let number_key_index = match (matching.next(), matching.next()) {
            (Some((k, _)), None) => k,
            _ => return Err(StrokeError::InvalidNumberKey(raw_number_key.clone())),
        };
        layout.number_key_mask = 1 << number_key_index;

        for (raw_key, raw_digit) in &self.numbers {
            let key = parse_key_label(raw_key)
                .map_err(|_| StrokeError::InvalidDigitMap(format!("invalid key {raw_key:?}")))?;
            let digit = parse_key_label(raw_digit).map_err(|_| {
                StrokeError::InvalidDigitMap(format!("entry for {raw_key:?} is not valid: {raw_digit:?}"))
            })?;
            if !digit.is_digit() {
                return Err(StrokeError::InvalidDigitMap(format!(
                    "entry for {raw_key:?} is not a digit: {raw_digit:?}"
                )));
            }
            let k = layout
                .keys
                .iter()
                .position(|candidate| candidate.label() == key)
                .ok_or_else(|| StrokeError::InvalidDigitMap(format!("unknown key {raw_key:?}")))?;
            layout.keys[k].number = digit.letter;
            layout.numbers_mask |= 1 << k;
        }

        if layout.numbers_mask.count_ones() != NUM_DIGITS {
            return Err(StrokeError::InvalidDigitMap(format!(
                "expected {NUM_DIGITS} digit keys, got {}",
                layout.numbers_mask.count_ones()
            )));
        }

        Ok(())
    }
}

/// Mask of keys whose letter appears exactly once in the layout.
fn unique_letters_mask(layout: &Layout) -> u64 {
    let keys = &layout.keys;
    (0..keys.len())
        .filter(|&k| {
            keys.iter()
                .enumerate()
                .all(|(l, other)| l == k || other.letter != keys[k].letter)
        })
        .fold(0, |mask, k| mask | (1 << k))
}

/// Contiguous block of unique-letter keys straddling the left/right split.
fn derive_implicit_hyphen_mask(layout: &Layout) -> u64 {
    let unique = unique_letters_mask(layout);
    let is_unique = |k: usize| unique & (1 << k) != 0;

    let mut start = layout.right_keys_index;
    while start > 0 && is_unique(start - 1) {
        start -= 1;
    }
    let mut end = layout.right_keys_index;
    while end < layout.num_keys() && is_unique(end) {
        end += 1;
    }

    ((1u64 << end) - 1) & !((1u64 << start) - 1)
}

fn explicit_implicit_hyphen_mask(layout: &Layout, entries: &[String]) -> Result<u64> {
    let mut mask = 0u64;
    for raw in entries {
        let label = parse_key_label(raw)?;
        let k = layout
            .keys
            .iter()
            .position(|key| {
                key.side == label.side
                    && (key.letter == label.letter
                        || (label.is_digit() && key.number == label.letter))
            })
            .ok_or_else(|| StrokeError::InvalidImplicitHyphenKeys(format!("unknown key {raw:?}")))?;
        mask |= 1 << k;
    }

    if mask != 0 {
        let block = ((msb(mask) << 1).wrapping_sub(1)) & !(lsb(mask) - 1);
        if mask != block {
            return Err(StrokeError::InvalidImplicitHyphenKeys(
                "not a continuous block".to_string(),
            ));
        }
    }

    if mask & unique_letters_mask(layout) != mask {
        return Err(StrokeError::InvalidImplicitHyphenKeys(
            "some letters are not unique".to_string(),
        ));
    }

    Ok(mask)
}
