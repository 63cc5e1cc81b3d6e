use crate::error::{Result, StrokeError};
use crate::layout::Layout;
use crate::stroke::Stroke;

impl Layout {
    /// Number key pressed together with at least one digit key.
    pub fn has_digit(&self, stroke: Stroke) -> bool {
        let mask = stroke.mask();
        mask & self.number_key_mask != 0 && mask & self.numbers_mask != 0
    }

    /// Number key plus digit keys only, e.g. `1207`.
    pub fn is_number(&self, stroke: Stroke) -> bool {
        let mask = stroke.mask();
        mask & self.number_key_mask != 0
            && mask != self.number_key_mask
            && mask & !(self.number_key_mask | self.numbers_mask) == 0
    }

    /// Every key of the layout not pressed in `stroke`.
    pub fn invert(&self, stroke: Stroke) -> Stroke {
        Stroke::from_mask_unchecked(!stroke.mask() & self.keys_mask())
    }

    /// Label of the lowest pressed key.
    pub fn first_key(&self, stroke: Stroke) -> Result<String> {
        stroke
            .first_index()
            .map(|k| self.key_label(k).to_string())
            .ok_or(StrokeError::EmptyStroke)
    }

    /// Label of the highest pressed key.
    pub fn last_key(&self, stroke: Stroke) -> Result<String> {
        stroke
            .last_index()
            .map(|k| self.key_label(k).to_string())
            .ok_or(StrokeError::EmptyStroke)
    }
}
