use crate::constants::HYPHEN;
use crate::error::{Result, StrokeError};
use crate::keys::parse_key_label;
use crate::layout::Layout;
use crate::stroke::Stroke;

/// Any of the three external stroke representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrokeInput<'a> {
    /// Raw keys mask.
    Mask(u64),
    /// Steno notation, e.g. `"ST-RD"`.
    Steno(&'a str),
    /// Key labels, e.g. `["S-", "-D"]`.
    Keys(Vec<&'a str>),
}

impl From<u64> for StrokeInput<'_> {
    fn from(mask: u64) -> Self {
        StrokeInput::Mask(mask)
    }
}

impl<'a> From<&'a str> for StrokeInput<'a> {
    fn from(steno: &'a str) -> Self {
        StrokeInput::Steno(steno)
    }
}

impl<'a> From<&[&'a str]> for StrokeInput<'a> {
    fn from(keys: &[&'a str]) -> Self {
        StrokeInput::Keys(keys.to_vec())
    }
}

/// Strokes written in layout files: an integer mask, a steno string, or an
/// array of key labels. Every other TOML value is unsupported.
impl<'a> TryFrom<&'a toml::Value> for StrokeInput<'a> {
    type Error = StrokeError;

    fn try_from(value: &'a toml::Value) -> Result<Self> {
        match value {
            toml::Value::Integer(n) => u64::try_from(*n)
                .map(StrokeInput::Mask)
                .map_err(|_| StrokeError::UnsupportedInput(format!("negative mask {n}"))),
            toml::Value::String(steno) => Ok(StrokeInput::Steno(steno)),
            toml::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        StrokeError::UnsupportedInput(format!("key is not a string: {item}"))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(StrokeInput::Keys),
            other => Err(StrokeError::UnsupportedInput(format!(
                "expected an integer (mask of keys), sequence of keys, or a string (steno), got {} {other}",
                other.type_str()
            ))),
        }
    }
}

// `from_*` names mirror the three external stroke representations.
#[allow(clippy::wrong_self_convention)]
impl Layout {
    /// Longest valid single-stroke steno: every key plus one hyphen.
    pub fn max_steno_len(&self) -> usize {
        self.num_keys() + 1
    }

    pub fn from_mask(&self, mask: u64) -> Result<Stroke> {
        if mask & !self.keys_mask() != 0 {
            return Err(StrokeError::InvalidMask(mask));
        }
        Ok(Stroke::from_mask_unchecked(mask))
    }

    /// Build a stroke from key labels. Order does not matter and repeated
    /// labels are harmless. Digit labels (`1-`) also press the number key.
    pub fn from_keys<I, S>(&self, keys: I) -> Result<Stroke>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = 0u64;
        for raw in keys {
            let raw = raw.as_ref();
            let label = parse_key_label(raw)?;
            if label.is_digit() {
                mask |= self.number_key_mask;
            }
            let k = self
                .find_key(label)
                .ok_or_else(|| StrokeError::InvalidKey(raw.to_string()))?;
            mask |= 1 << k;
        }
        Ok(Stroke::from_mask_unchecked(mask))
    }

    pub fn from_steno(&self, steno: &str) -> Result<Stroke> {
        if steno.chars().count() > self.max_steno_len() {
            return Err(StrokeError::InvalidSteno(steno.to_string()));
        }
        self.parse_steno(steno)
            .map(Stroke::from_mask_unchecked)
            .ok_or_else(|| StrokeError::InvalidSteno(steno.to_string()))
    }

    pub fn from_any(&self, input: StrokeInput<'_>) -> Result<Stroke> {
        match input {
            StrokeInput::Mask(mask) => self.from_mask(mask),
            StrokeInput::Steno(steno) => self.from_steno(steno),
            StrokeInput::Keys(keys) => self.from_keys(keys),
        }
    }

    /// Scan steno left to right. Every letter must name a key after the
    /// previous one; a single hyphen jumps to the right-hand block and is
    /// only allowed before any right-hand key has been matched.
    pub(crate) fn parse_steno(&self, steno: &str) -> Option<u64> {
        let mut mask = 0u64;
        let mut next = 0usize;
        let mut seen_hyphen = false;

        for letter in steno.chars() {
            if letter == HYPHEN {
                if seen_hyphen || next > self.right_keys_index {
                    return None;
                }
                seen_hyphen = true;
                next = self.right_keys_index;
                continue;
            }

            let digit = letter.is_ascii_digit();
            if digit {
                mask |= self.number_key_mask;
            }
            let k = (next..self.num_keys()).find(|&k| {
                let key = &self.keys[k];
                let candidate = if digit { key.number } else { key.letter };
                candidate == letter
            })?;
            mask |= 1 << k;
            next = k + 1;
        }

        Some(mask)
    }
}
