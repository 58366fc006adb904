//! Index arithmetic for the tripled sequence: pixel offsets, progress dots and
//! homologous positions.
//!
//! Everything here is computed from integers on every call, so repeated calls
//! with the same index return bit-identical offsets.

use std::ops::Range;

/// Horizontal translation of the card strip for `index`.
#[inline]
pub fn offset(index: usize, card_width: f64) -> f64 {
    -(index as f64) * card_width
}

/// Which of the `base_len` progress dots is lit for `index`.
#[inline]
pub fn progress_dot(index: usize, base_len: usize) -> usize {
    index % base_len
}

/// Looped index a click on dot `dot` lands on, clamped into the sequence.
#[inline]
pub fn dot_target(dot: usize, base_len: usize) -> usize {
    dot.saturating_add(base_len).min(last_index(base_len))
}

/// The same testimonial's position in the middle third.
#[inline]
pub fn homologous(index: usize, base_len: usize) -> usize {
    index % base_len + base_len
}

/// `[N, 2N)`, where the carousel rests between interactions.
#[inline]
pub fn middle_third(base_len: usize) -> Range<usize> {
    base_len..base_len * 2
}

/// Last valid looped index, `3N - 1`.
#[inline]
pub fn last_index(base_len: usize) -> usize {
    base_len * crate::repository::COPIES - 1
}

/// Leftmost strip offset (`-(3N - 1) * W`), the drag lower bound.
#[inline]
pub fn min_offset(base_len: usize, card_width: f64) -> f64 {
    offset(last_index(base_len), card_width)
}
