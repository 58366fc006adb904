//! Drag gestures: release decisions and the in-flight drag offset.

use serde::Serialize;

/// A drag has to travel more than `card_width / DRAG_THRESHOLD_DIVISOR`.
pub const DRAG_THRESHOLD_DIVISOR: f64 = 3.0;

/// What a drag release does to the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDecision {
    /// Dragged right past the threshold: previous card
    Retreat,
    /// Dragged left past the threshold: next card
    Advance,
    /// Not far enough; spring back to the current card
    SnapBack,
}

/// Turns a release displacement into a [`StepDecision`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureResolver {
    threshold: f64,
}

impl GestureResolver {
    pub fn new(card_width: f64) -> Self {
        Self {
            threshold: card_width / DRAG_THRESHOLD_DIVISOR,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strict on both sides: a release exactly at the threshold snaps back.
    pub fn resolve(&self, dx: f64) -> StepDecision {
        if dx > self.threshold {
            StepDecision::Retreat
        } else if dx < -self.threshold {
            StepDecision::Advance
        } else {
            StepDecision::SnapBack
        }
    }
}

/// Tracks the strip offset while the pointer is down.
///
/// The strip follows `anchor + dx` directly; past either end of the
/// sequence the overshoot is damped by `elastic`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    anchor: f64,
    dx: f64,
    min_offset: f64,
    max_offset: f64,
    elastic: f64,
}

impl DragSession {
    pub fn new(anchor: f64, min_offset: f64, elastic: f64) -> Self {
        Self {
            anchor,
            dx: 0.0,
            min_offset,
            max_offset: 0.0,
            elastic,
        }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn update(&mut self, dx: f64) {
        if dx.is_finite() {
            self.dx = dx;
        }
    }

    /// Move the anchor along with a silent rewind that happened mid-drag.
    pub fn shift(&mut self, delta: f64) {
        self.anchor += delta;
    }

    /// Strip offset to render right now.
    pub fn offset(&self) -> f64 {
        let raw = self.anchor + self.dx;
        if raw > self.max_offset {
            self.max_offset + (raw - self.max_offset) * self.elastic
        } else if raw < self.min_offset {
            self.min_offset + (raw - self.min_offset) * self.elastic
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_a_third_of_the_card() {
        let r = GestureResolver::new(360.0);
        assert_eq!(r.threshold(), 120.0);
        assert_eq!(r.resolve(119.0), StepDecision::SnapBack);
        assert_eq!(r.resolve(121.0), StepDecision::Retreat);
        assert_eq!(r.resolve(130.0), StepDecision::Retreat);
        assert_eq!(r.resolve(-119.0), StepDecision::SnapBack);
        assert_eq!(r.resolve(-121.0), StepDecision::Advance);
    }

    #[test]
    fn exactly_at_threshold_snaps_back() {
        let r = GestureResolver::new(360.0);
        assert_eq!(r.resolve(120.0), StepDecision::SnapBack);
        assert_eq!(r.resolve(-120.0), StepDecision::SnapBack);
        assert_eq!(r.resolve(0.0), StepDecision::SnapBack);
    }

    #[test]
    fn nan_release_snaps_back() {
        let r = GestureResolver::new(380.0);
        assert_eq!(r.resolve(f64::NAN), StepDecision::SnapBack);
    }

    #[test]
    fn drag_tracks_raw_displacement_inside_bounds() {
        let mut drag = DragSession::new(-1900.0, -5320.0, 0.1);
        drag.update(-150.0);
        assert_eq!(drag.offset(), -2050.0);
        drag.update(90.0);
        assert_eq!(drag.offset(), -1810.0);
    }

    #[test]
    fn drag_is_elastic_past_the_ends() {
        let mut drag = DragSession::new(0.0, -1000.0, 0.1);
        drag.update(200.0);
        assert!((drag.offset() - 20.0).abs() < 1e-9);

        let mut drag = DragSession::new(-1000.0, -1000.0, 0.1);
        drag.update(-300.0);
        assert!((drag.offset() + 1030.0).abs() < 1e-9);
    }

    #[test]
    fn shift_moves_the_anchor() {
        let mut drag = DragSession::new(-3800.0, -5320.0, 0.1);
        drag.update(-40.0);
        drag.shift(1900.0);
        assert_eq!(drag.offset(), -1940.0);
        assert_eq!(drag.dx(), -40.0);
    }

    #[test]
    fn non_finite_moves_are_ignored() {
        let mut drag = DragSession::new(0.0, -1000.0, 0.1);
        drag.update(-50.0);
        drag.update(f64::INFINITY);
        assert_eq!(drag.dx(), -50.0);
    }
}
