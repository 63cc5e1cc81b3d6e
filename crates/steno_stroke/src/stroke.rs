use std::ops::{Add, BitAnd, BitOr, Sub};

/// A single stroke: bit `k` set means key `k` of the layout is pressed.
///
/// A stroke carries no reference to its layout. Values are created through
/// a [`Layout`](crate::Layout), which validates the mask, and through set
/// operations that can never leave the layout's key range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stroke(u64);

/// Lowest set bit as a mask (0 for 0).
pub(crate) fn lsb(x: u64) -> u64 {
    x & x.wrapping_neg()
}

/// Highest set bit as a mask (0 for 0).
pub(crate) fn msb(x: u64) -> u64 {
    match x {
        0 => 0,
        _ => 1 << (63 - x.leading_zeros()),
    }
}

impl Stroke {
    /// The empty stroke.
    pub const EMPTY: Stroke = Stroke(0);

    pub(crate) const fn from_mask_unchecked(mask: u64) -> Self {
        Self(mask)
    }

    pub fn mask(self) -> u64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of keys pressed.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Index of the lowest pressed key.
    pub fn first_index(self) -> Option<usize> {
        (!self.is_empty()).then(|| self.0.trailing_zeros() as usize)
    }

    /// Index of the highest pressed key.
    pub fn last_index(self) -> Option<usize> {
        (!self.is_empty()).then(|| 63 - self.0.leading_zeros() as usize)
    }

    /// Key indices in ascending order.
    pub fn indices(self) -> KeyIndices {
        KeyIndices(self.0)
    }

    /// True if every key of `self` is also in `other`.
    pub fn is_subset(self, other: Stroke) -> bool {
        self.0 & other.0 == self.0
    }

    /// True if every key of `other` is also in `self`.
    ///
    /// This is the superset test. The subset test (`a` is contained in `b`)
    /// is [`Stroke::is_subset`].
    pub fn contains(self, other: Stroke) -> bool {
        other.is_subset(self)
    }

    pub fn union(self, other: Stroke) -> Stroke {
        Stroke(self.0 | other.0)
    }

    pub fn intersection(self, other: Stroke) -> Stroke {
        Stroke(self.0 & other.0)
    }

    /// `self` with the keys of `other` released.
    pub fn difference(self, other: Stroke) -> Stroke {
        Stroke(self.0 & !other.0)
    }

    /// True if the last key of `self` comes before the first key of `other`.
    pub fn is_prefix(self, other: Stroke) -> bool {
        msb(self.0) < lsb(other.0)
    }

    /// True if the first key of `self` comes after the last key of `other`.
    pub fn is_suffix(self, other: Stroke) -> bool {
        lsb(self.0) > msb(other.0)
    }
}

impl BitOr for Stroke {
    type Output = Stroke;

    fn bitor(self, rhs: Stroke) -> Stroke {
        self.union(rhs)
    }
}

impl Add for Stroke {
    type Output = Stroke;

    fn add(self, rhs: Stroke) -> Stroke {
        self.union(rhs)
    }
}

impl BitAnd for Stroke {
    type Output = Stroke;

    fn bitand(self, rhs: Stroke) -> Stroke {
        self.intersection(rhs)
    }
}

impl Sub for Stroke {
    type Output = Stroke;

    fn sub(self, rhs: Stroke) -> Stroke {
        self.difference(rhs)
    }
}

impl From<Stroke> for u64 {
    fn from(stroke: Stroke) -> u64 {
        stroke.0
    }
}

/// Iterator over the key indices of a stroke, lowest first.
#[derive(Debug, Clone)]
pub struct KeyIndices(u64);

impl Iterator for KeyIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for KeyIndices {}
