//! Stroke ordering.
//!
//! Strokes are ordered as ascending sequences of key indices compared
//! lexicographically: keys shared at the front of both strokes are skipped,
//! then the stroke whose next key comes earlier in the layout sorts first.
//! A stroke that runs out of keys first sorts before the longer one.
//!
//! This is the same order as comparing the bytes of
//! [`Layout::stroke_to_sort_key`](crate::Layout::stroke_to_sort_key), and it
//! differs from comparing raw mask values: `{A, C}` sorts before `{B}`.

use crate::stroke::{Stroke, lsb};
use std::cmp::Ordering;

/// Three-way stroke comparison.
pub fn compare(a: Stroke, b: Stroke) -> Ordering {
    let (mut a, mut b) = (a.mask(), b.mask());
    while a != b {
        let first_a = lsb(a);
        let first_b = lsb(b);
        if first_a != first_b {
            // An exhausted side has no lowest bit (0) and sorts first.
            return first_a.cmp(&first_b);
        }
        a &= !first_a;
        b &= !first_a;
    }
    Ordering::Equal
}

impl Ord for Stroke {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(*self, *other)
    }
}

impl PartialOrd for Stroke {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(mask: u64) -> Stroke {
        Stroke::from_mask_unchecked(mask)
    }

    const A: u64 = 1 << 0;
    const B: u64 = 1 << 1;
    const C: u64 = 1 << 2;

    #[test]
    fn test_single_keys_follow_layout_order() {
        assert_eq!(compare(s(A), s(B)), Ordering::Less);
        assert_eq!(compare(s(C), s(B)), Ordering::Greater);
    }

    #[test]
    fn test_first_divergence_decides() {
        // Raw masks say 5 > 2, stroke order says {A, C} < {B}.
        assert_eq!(compare(s(A | C), s(B)), Ordering::Less);
        assert!(s(A | C) < s(B));
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(compare(s(A), s(A | B)), Ordering::Less);
        assert_eq!(compare(s(A | B), s(A)), Ordering::Greater);
        assert_eq!(compare(Stroke::EMPTY, s(A)), Ordering::Less);
    }

    #[test]
    fn test_equal() {
        assert_eq!(compare(s(A | C), s(A | C)), Ordering::Equal);
        assert_eq!(compare(Stroke::EMPTY, Stroke::EMPTY), Ordering::Equal);
    }

    #[test]
    fn test_high_bits() {
        let top = 1u64 << 62;
        assert_eq!(compare(s(top), s(A | top)), Ordering::Greater);
        assert_eq!(compare(s(A | top), s(A | (1 << 61))), Ordering::Greater);
    }

    #[test]
    fn test_sort_uses_stroke_order() {
        let mut strokes = vec![s(B), s(A | C), s(A), s(C), s(A | B)];
        strokes.sort();
        assert_eq!(strokes, vec![s(A), s(A | B), s(A | C), s(B), s(C)]);
    }
}
