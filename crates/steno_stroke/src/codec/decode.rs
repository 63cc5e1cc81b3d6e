use crate::constants::HYPHEN;
use crate::keys::KeyLabel;
use crate::layout::Layout;
use crate::stroke::Stroke;

impl Layout {
    /// Normal-mode label of key `index`.
    pub(crate) fn key_label(&self, index: usize) -> KeyLabel {
        self.keys[index].label()
    }

    /// Key labels of a stroke, in layout order.
    pub fn to_key_labels(&self, stroke: Stroke) -> Vec<String> {
        self.indices(stroke)
            .map(|k| self.key_label(k).to_string())
            .collect()
    }

    /// Canonical steno notation of a stroke.
    ///
    /// Digits replace letters when the number key is pressed together with
    /// at least one digit key. The hyphen is written once, before the first
    /// right-hand key, unless an implicit hyphen key is pressed.
    ///
    /// ```
    /// use steno_stroke::Layout;
    ///
    /// let layout = Layout::builder(["S-", "T-", "K-", "-R", "-E", "-D"])
    ///     .implicit_hyphen_keys(["-E"])
    ///     .build()
    ///     .unwrap();
    /// let stroke = layout.from_keys(["-D", "S-", "T-", "-R"]).unwrap();
    /// assert_eq!(layout.to_steno(stroke), "ST-RD");
    /// let stroke = layout.from_keys(["S-", "-E"]).unwrap();
    /// assert_eq!(layout.to_steno(stroke), "SE");
    /// ```
    pub fn to_steno(&self, stroke: Stroke) -> String {
        let mut mask = stroke.mask() & self.keys_mask();
        let digits = self.has_digit(stroke);
        if digits {
            mask &= !self.number_key_mask;
        }

        let mut hyphen_at = (mask & self.implicit_hyphen_mask == 0).then_some(self.right_keys_index);

        let mut steno = String::with_capacity(self.max_steno_len());
        for k in Stroke::from_mask_unchecked(mask).indices() {
            if hyphen_at.is_some_and(|at| k >= at) {
                steno.push(HYPHEN);
                hyphen_at = None;
            }
            let key = &self.keys[k];
            steno.push(if digits { key.number } else { key.letter });
        }
        steno
    }

    /// One byte per pressed key, `1 + index`, lowest key first.
    ///
    /// Comparing these bytes lexicographically gives the stroke order.
    pub fn stroke_to_sort_key(&self, stroke: Stroke) -> Vec<u8> {
        self.indices(stroke).map(|k| k as u8 + 1).collect()
    }

    /// Pressed key indices, ignoring bits beyond this layout.
    fn indices(&self, stroke: Stroke) -> impl Iterator<Item = usize> {
        Stroke::from_mask_unchecked(stroke.mask() & self.keys_mask()).indices()
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::Layout;
    use crate::test_support::{english, small};

    #[test]
    fn test_to_steno_small_layout() {
        // Every letter is unique, so every key is an implicit hyphen key.
        let layout = small();
        let stroke = layout.from_steno("ST-RD").unwrap();
        assert_eq!(layout.to_steno(stroke), "STRD");
        assert_eq!(layout.from_steno("STRD").unwrap(), stroke);
        assert_eq!(layout.to_steno(layout.from_steno("").unwrap()), "");
    }

    #[test]
    fn test_to_steno_explicit_hyphen_keys() {
        let layout = Layout::builder(["S-", "T-", "K-", "-R", "-E", "-D"])
            .implicit_hyphen_keys(["-E"])
            .build()
            .unwrap();
        let stroke = layout.from_steno("ST-RD").unwrap();
        assert_eq!(layout.to_steno(stroke), "ST-RD");
        assert_eq!(layout.to_steno(layout.from_steno("S-E").unwrap()), "SE");
        assert_eq!(layout.to_steno(layout.from_steno("-D").unwrap()), "-D");
        assert_eq!(layout.to_steno(layout.from_steno("ST").unwrap()), "ST");
    }

    #[test]
    fn test_canonical_english() {
        let layout = english();
        let cases = [
            ("#", "#"),
            ("#-Z", "#-Z"),
            ("ST-PB", "ST-PB"),
            ("AO-E", "AOE"),
            ("*-Z", "*Z"),
            ("R-R", "R-R"),
            ("#STO-P", "1207"),
            ("#12E7", "12E7"),
            ("-FL", "-FL"),
            ("TS", "T-S"),
            ("S-", "S"),
        ];
        for (input, canonical) in cases {
            let stroke = layout.from_steno(input).unwrap();
            assert_eq!(layout.to_steno(stroke), canonical, "input {input:?}");
        }
    }

    #[test]
    fn test_to_key_labels() {
        let layout = english();
        let stroke = layout.from_steno("#STO-P").unwrap();
        assert_eq!(layout.to_key_labels(stroke), vec!["#", "S-", "T-", "O-", "-P"]);
        let stroke = layout.from_steno("*Z").unwrap();
        assert_eq!(layout.to_key_labels(stroke), vec!["*", "-Z"]);
        assert!(layout.to_key_labels(layout.from_mask(0).unwrap()).is_empty());
    }

    #[test]
    fn test_stroke_to_sort_key() {
        let layout = english();
        let stroke = layout.from_steno("#ST").unwrap();
        assert_eq!(layout.stroke_to_sort_key(stroke), vec![1, 2, 3]);
        let stroke = layout.from_steno("-Z").unwrap();
        assert_eq!(layout.stroke_to_sort_key(stroke), vec![23]);
        assert!(layout.stroke_to_sort_key(layout.from_mask(0).unwrap()).is_empty());
    }
}
