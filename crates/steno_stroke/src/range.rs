//! Stroke enumeration helpers.

use crate::layout::Layout;
use crate::stroke::Stroke;

/// Strokes with mask values in `start..stop`, in numeric order.
#[derive(Debug, Clone)]
pub struct StrokeRange {
    next: u64,
    stop: u64,
}

impl Iterator for StrokeRange {
    type Item = Stroke;

    fn next(&mut self) -> Option<Stroke> {
        if self.next >= self.stop {
            return None;
        }
        let stroke = Stroke::from_mask_unchecked(self.next);
        self.next += 1;
        Some(stroke)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.stop.saturating_sub(self.next)).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Every extension of a prefix stroke with keys after its last key.
#[derive(Debug, Clone)]
pub struct Suffixes {
    prefix: u64,
    shift: u32,
    n: u64,
    end: u64,
    stop: Option<u64>,
}

impl Iterator for Suffixes {
    type Item = Stroke;

    fn next(&mut self) -> Option<Stroke> {
        if self.n >= self.end {
            return None;
        }
        let mask = (self.n << self.shift) | self.prefix;
        self.n += 1;
        if self.stop == Some(mask) {
            self.end = 0;
        }
        Some(Stroke::from_mask_unchecked(mask))
    }
}

impl Layout {
    /// Strokes whose raw masks lie in `start..stop`.
    pub fn stroke_range(&self, start: Stroke, stop: Stroke) -> StrokeRange {
        StrokeRange {
            next: start.mask(),
            stop: stop.mask(),
        }
    }

    /// Every stroke in the layout, empty stroke first.
    pub fn all_strokes(&self) -> StrokeRange {
        StrokeRange {
            next: 0,
            stop: self.keys_mask() + 1,
        }
    }

    /// Strokes made of `prefix` plus a non-empty set of keys after the last
    /// key of `prefix`, in increasing mask order. Iteration ends after
    /// `stop` when it is given.
    pub fn suffixes(&self, prefix: Stroke, stop: Option<Stroke>) -> Suffixes {
        let shift = prefix.last_index().map_or(0, |k| k as u32 + 1);
        let free_keys = self.num_keys() as u32 - shift.min(self.num_keys() as u32);
        Suffixes {
            prefix: prefix.mask(),
            shift,
            n: 1,
            end: 1u64 << free_keys,
            stop: stop.map(Stroke::mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{english, small};

    #[test]
    fn test_stroke_range() {
        let layout = english();
        let start = layout.from_steno("ST").unwrap();
        let stop = layout.from_steno("TP").unwrap();
        let expected: Vec<_> = "ST #ST K #K SK #SK TK #TK STK #STK P #P SP #SP"
            .split_whitespace()
            .map(|s| layout.from_steno(s).unwrap())
            .collect();
        assert_eq!(layout.stroke_range(start, stop).collect::<Vec<_>>(), expected);
        assert_eq!(layout.stroke_range(stop, start).count(), 0);
    }

    #[test]
    fn test_all_strokes() {
        let layout = small();
        let strokes: Vec<_> = layout.all_strokes().collect();
        assert_eq!(strokes.len(), 64);
        assert!(strokes[0].is_empty());
        assert_eq!(strokes[63].mask(), layout.keys_mask());
    }

    #[test]
    fn test_suffixes() {
        let layout = english();
        let expected: Vec<_> = "-TS -TD -TSD -TZ -TSZ -TDZ -TSDZ"
            .split_whitespace()
            .map(|s| layout.from_steno(s).unwrap())
            .collect();
        let prefix = layout.from_steno("-T").unwrap();
        assert_eq!(layout.suffixes(prefix, None).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_suffixes_with_stop() {
        let layout = english();
        let prefix = layout.from_steno("-T").unwrap();
        let stop = layout.from_steno("-TSD").unwrap();
        let suffixes: Vec<_> = layout
            .suffixes(prefix, Some(stop))
            .map(|s| layout.to_steno(s))
            .collect();
        assert_eq!(suffixes, vec!["-TS", "-TD", "-TSD"]);
    }

    #[test]
    fn test_suffixes_of_last_key_and_empty() {
        let layout = small();
        let last = layout.from_steno("D").unwrap();
        assert_eq!(layout.suffixes(last, None).count(), 0);
        let empty = layout.from_mask(0).unwrap();
        assert_eq!(layout.suffixes(empty, None).count(), 63);
    }
}
