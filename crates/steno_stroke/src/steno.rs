//! Multi-stroke steno text: strokes joined by `/`, e.g. `"/PWAEUBG/-G"`.
//!
//! A leading `/` stands for an empty first stroke. Any other empty stroke,
//! including one left by a trailing `/`, is invalid.

use crate::constants::{SORT_KEY_DELIMITER, STROKE_DELIMITER};
use crate::error::{Result, StrokeError};
use crate::layout::Layout;
use crate::stroke::Stroke;

impl Layout {
    /// Split multi-stroke text into single-stroke segments.
    ///
    /// Only the grammar of the text is checked here: delimiter placement and
    /// segment length. Segments are parsed by the callers.
    pub fn split_steno<'a>(&self, steno: &'a str) -> Result<Vec<&'a str>> {
        if steno.is_empty() {
            return Ok(Vec::new());
        }

        let invalid = || StrokeError::InvalidSteno(steno.to_string());
        let max_len = self.max_steno_len();
        steno
            .split(STROKE_DELIMITER)
            .enumerate()
            .map(|(n, segment)| {
                if n > 0 && segment.is_empty() {
                    return Err(invalid());
                }
                if segment.chars().count() > max_len {
                    return Err(invalid());
                }
                Ok(segment)
            })
            .collect()
    }

    /// Canonical form of every stroke in `steno`.
    ///
    /// ```
    /// use steno_stroke::LayoutConfig;
    ///
    /// let layout = LayoutConfig::english().build().unwrap();
    /// assert_eq!(layout.normalize_steno("/AO-E/#STO-P").unwrap(), ["", "AOE", "1207"]);
    /// ```
    pub fn normalize_steno(&self, steno: &str) -> Result<Vec<String>> {
        self.split_steno(steno)?
            .into_iter()
            .map(|segment| -> Result<String> {
                let mask = self
                    .parse_steno(segment)
                    .ok_or_else(|| StrokeError::InvalidSteno(steno.to_string()))?;
                Ok(self.to_steno(Stroke::from_mask_unchecked(mask)))
            })
            .collect()
    }

    /// Canonical form of a single, non-empty stroke.
    pub fn normalize_stroke(&self, steno: &str) -> Result<String> {
        if steno.is_empty() {
            return Err(StrokeError::InvalidSteno(steno.to_string()));
        }
        let stroke = self.from_steno(steno)?;
        Ok(self.to_steno(stroke))
    }

    /// Sort key of multi-stroke text: the stroke sort keys joined by a 0
    /// byte. A leading `/` gives a leading 0 byte.
    pub fn steno_to_sort_key(&self, steno: &str) -> Result<Vec<u8>> {
        let mut sort_key = Vec::with_capacity(steno.len() * 2);
        for (n, segment) in self.split_steno(steno)?.into_iter().enumerate() {
            if n > 0 {
                sort_key.push(SORT_KEY_DELIMITER);
            }
            let mask = self
                .parse_steno(segment)
                .ok_or_else(|| StrokeError::InvalidSteno(steno.to_string()))?;
            sort_key.extend(self.stroke_to_sort_key(Stroke::from_mask_unchecked(mask)));
        }
        Ok(sort_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{english, small};

    #[test]
    fn test_normalize_steno_empty() {
        let layout = english();
        assert!(layout.normalize_steno("").unwrap().is_empty());
    }

    #[test]
    fn test_normalize_steno_leading_delimiter() {
        let layout = small();
        assert_eq!(layout.normalize_steno("/ST").unwrap(), vec!["", "ST"]);
    }

    #[test]
    fn test_normalize_steno_canonicalizes() {
        let layout = english();
        assert_eq!(
            layout.normalize_steno("AO-E/#STO-P/TS/S-").unwrap(),
            vec!["AOE", "1207", "T-S", "S"]
        );
        assert_eq!(layout.normalize_steno("R-R").unwrap(), vec!["R-R"]);
    }

    #[test]
    fn test_normalize_steno_rejects_bad_delimiters() {
        let layout = english();
        for steno in ["/", "ST/", "ST//KP", "//ST", "ST/KP/", "ST/ZS"] {
            assert!(
                matches!(layout.normalize_steno(steno), Err(StrokeError::InvalidSteno(ref s)) if s == steno),
                "steno {steno:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_steno_segment_length() {
        let layout = small();
        assert!(layout.normalize_steno("STK-RED/ST").is_ok());
        assert!(layout.normalize_steno("ST/STK-REDD").is_err());
    }

    #[test]
    fn test_normalize_stroke() {
        let layout = english();
        assert_eq!(layout.normalize_stroke("AO-E").unwrap(), "AOE");
        assert_eq!(layout.normalize_stroke("#STO-P").unwrap(), "1207");
        assert!(matches!(layout.normalize_stroke(""), Err(StrokeError::InvalidSteno(_))));
        assert!(matches!(layout.normalize_stroke("ZS"), Err(StrokeError::InvalidSteno(_))));
    }

    #[test]
    fn test_steno_to_sort_key() {
        let layout = english();
        assert_eq!(layout.steno_to_sort_key("#ST").unwrap(), vec![1, 2, 3]);
        assert_eq!(layout.steno_to_sort_key("#/-Z").unwrap(), vec![1, 0, 23]);
        assert_eq!(layout.steno_to_sort_key("/#").unwrap(), vec![0, 1]);
        assert!(layout.steno_to_sort_key("").unwrap().is_empty());
        assert!(layout.steno_to_sort_key("#/").is_err());
        assert!(layout.steno_to_sort_key("#//S").is_err());
    }

    #[test]
    fn test_multi_stroke_sort_order() {
        let layout = english();
        let mut entries = vec!["ST/KP", "ST", "STK", "#", "/ST", "-Z", "ST/-Z"];
        entries.sort_by_key(|steno| layout.steno_to_sort_key(steno).unwrap());
        assert_eq!(
            entries,
            vec!["/ST", "#", "ST", "ST/KP", "ST/-Z", "STK", "-Z"]
        );
    }
}
