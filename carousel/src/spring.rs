//! Spring animator for the strip offset.
//!
//! Stiffness, damping and mass are rendering policy, not carousel state.
//! The defaults (200 / 30 / 0.8) are slightly over-damped, so the strip
//! glides into place without overshooting a card.

use serde::{Deserialize, Serialize};

/// Integration step ceiling; larger frame deltas are split.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
/// Frame deltas above this (backgrounded tab) are clamped.
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DISTANCE: f64 = 0.5;
const REST_VELOCITY: f64 = 2.0;

/// Physical parameters of the spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 200.0,
            damping: 30.0,
            mass: 0.8,
        }
    }
}

/// One-dimensional damped spring chasing a target offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// At rest at `position`.
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Move position and target together (silent rewind).
    pub fn shift(&mut self, delta: f64) {
        self.position += delta;
        self.target += delta;
    }

    /// Pin the spring to `position` (pointer is dragging the strip).
    pub fn snap_to(&mut self, position: f64) {
        self.position = position;
        self.velocity = 0.0;
    }

    /// Advance the simulation by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_settled() || !(dt > 0.0) {
            return self.position;
        }

        let mut remaining = dt.min(MAX_FRAME_SECS);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.position - self.target).abs() < REST_DISTANCE
            && self.velocity.abs() < REST_VELOCITY
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if spring.is_settled() {
                return frame;
            }
            spring.step(FRAME);
        }
        max_frames
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-380.0);
        let frames = run_until_settled(&mut spring, 180);
        assert!(frames < 180, "spring did not settle");
        assert_eq!(spring.position(), -380.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn default_spring_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-380.0);
        for _ in 0..120 {
            let p = spring.step(FRAME);
            assert!(p >= -380.0 - 1e-9, "overshot to {p}");
        }
    }

    #[test]
    fn shift_keeps_distance_to_target() {
        let mut spring = Spring::new(SpringConfig::default(), -3420.0);
        spring.set_target(-3800.0);
        spring.step(FRAME);
        let before = spring.target() - spring.position();
        let velocity = spring.velocity();
        spring.shift(1900.0);
        assert!((spring.target() - spring.position() - before).abs() < 1e-9);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.target(), -1900.0);
    }

    #[test]
    fn settled_spring_does_not_move() {
        let mut spring = Spring::new(SpringConfig::default(), -760.0);
        assert!(spring.is_settled());
        assert_eq!(spring.step(FRAME), -760.0);
        assert_eq!(spring.step(f64::NAN), -760.0);
    }

    #[test]
    fn long_frames_stay_stable() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-380.0);
        for _ in 0..30 {
            let p = spring.step(2.0);
            assert!(p.is_finite());
            assert!(p <= 0.0 && p >= -380.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn snap_to_zeroes_velocity() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-380.0);
        spring.step(FRAME);
        spring.snap_to(-100.0);
        assert_eq!(spring.position(), -100.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(!spring.is_settled());
    }
}
