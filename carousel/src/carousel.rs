//! The carousel facade: one value owning the index, the autoplay timer and
//! the in-flight drag.
//!
//! Presentation layers hold a single [`Carousel`], feed it input events and
//! the current time, and render from its accessors. Every mutator returns
//! the [`Update`] it applied so a renderer with its own animated position
//! can follow along exactly.

use serde::Serialize;

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::gesture::{DragSession, GestureResolver, StepDecision};
use crate::position::{min_offset, offset, progress_dot};
use crate::repository::ItemRepository;
use crate::role::{Role, role};
use crate::scheduler::{AutoplayScheduler, AutoplayState};
use crate::state::{CarouselState, Motion, Update};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub base_len: usize,
    pub is_paused: bool,
    pub is_dragging: bool,
    pub offset: f64,
    pub visual_offset: f64,
    pub progress_dot_index: usize,
    pub can_navigate_left: bool,
    pub can_navigate_right: bool,
    pub pending_rewind: Option<usize>,
    pub autoplay: AutoplayState,
    /// Role of every slot of the looped sequence
    pub roles: Vec<Role>,
}

/// Testimonial carousel over a tripled sequence.
///
/// Time is passed in as milliseconds from any monotonic origin; the
/// carousel never reads a clock.
#[derive(Clone, Debug)]
pub struct Carousel {
    repository: ItemRepository,
    state: CarouselState,
    autoplay: AutoplayScheduler,
    gesture: GestureResolver,
    drag: Option<DragSession>,
    card_width: f64,
    elastic: f64,
}

impl Carousel {
    /// Mount a carousel at index 0 with autoplay running from `now`.
    pub fn new(repository: ItemRepository, config: &CarouselConfig, now: u64) -> Result<Self> {
        config.validate()?;
        let state = CarouselState::new(repository.len())?;
        tracing::debug!(
            records = repository.len(),
            interval_ms = config.autoplay_interval_ms,
            card_width = config.card_width,
            "carousel mounted"
        );
        Ok(Self {
            state,
            autoplay: AutoplayScheduler::new(config.interval(), now),
            gesture: GestureResolver::new(config.card_width),
            drag: None,
            card_width: config.card_width,
            elastic: config.drag_elastic,
            repository,
        })
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repository
    }

    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn role(&self, index: usize) -> Role {
        role(index, self.state.current_index())
    }

    /// Resting offset for the current index.
    pub fn offset(&self) -> f64 {
        offset(self.state.current_index(), self.card_width)
    }

    /// Offset to draw right now: the drag position while dragging, otherwise
    /// [`Carousel::offset`].
    pub fn visual_offset(&self) -> f64 {
        match &self.drag {
            Some(drag) => drag.offset(),
            None => self.offset(),
        }
    }

    pub fn progress_dot_index(&self) -> usize {
        progress_dot(self.state.current_index(), self.state.base_len())
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn can_navigate_left(&self) -> bool {
        self.state.current_index() > 0
    }

    pub fn can_navigate_right(&self) -> bool {
        self.state.current_index() < self.state.last_index()
    }

    /// Index the next [`Carousel::settle`] will rewind to.
    pub fn pending_rewind(&self) -> Option<usize> {
        self.state.pending_rewind()
    }

    /// When autoplay wants to be polled next, if it is running.
    pub fn next_deadline(&self) -> Option<u64> {
        self.autoplay.next_deadline()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        if self.state.set_paused(true) {
            self.autoplay.pause();
            tracing::debug!(index = self.current_index(), "autoplay paused");
        }
    }

    /// Pointer left the carousel; autoplay waits a full interval from `now`.
    pub fn resume(&mut self, now: u64) {
        if self.state.set_paused(false) {
            self.autoplay.resume(now);
            tracing::debug!(index = self.current_index(), "autoplay resumed");
        }
    }

    /// Poll autoplay. Advances one card when an interval has elapsed.
    pub fn tick(&mut self, now: u64) -> Update {
        if !self.autoplay.poll(now) {
            return Update::default();
        }
        let update = self.state.advance();
        self.follow(update)
    }

    /// Pointer pressed; the drag starts from the resting offset.
    pub fn on_drag_start(&mut self) {
        let anchor = self.offset();
        self.on_drag_start_at(anchor);
    }

    /// Pointer pressed while the strip is drawn at `anchor`.
    pub fn on_drag_start_at(&mut self, anchor: f64) {
        let lower = min_offset(self.state.base_len(), self.card_width);
        self.drag = Some(DragSession::new(anchor, lower, self.elastic));
    }

    pub fn on_drag_move(&mut self, dx: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.update(dx);
        }
    }

    /// Pointer released after travelling `dx` pixels.
    pub fn on_drag_end(&mut self, dx: f64) -> Update {
        self.drag = None;
        let decision = self.gesture.resolve(dx);
        tracing::debug!(dx, ?decision, "drag released");
        match decision {
            StepDecision::Retreat => self.state.retreat(),
            StepDecision::Advance => self.state.advance_by_drag(),
            StepDecision::SnapBack => Update::default(),
        }
    }

    /// Progress dot `dot` clicked.
    pub fn go_to_slide(&mut self, dot: usize) -> Update {
        let update = self.state.go_to_slide(dot);
        self.follow(update)
    }

    pub fn navigate_left(&mut self) -> Update {
        let update = self.state.retreat();
        self.follow(update)
    }

    pub fn navigate_right(&mut self) -> Update {
        let update = self.state.advance_by_drag();
        self.follow(update)
    }

    /// The renderer's animation came to rest; apply any pending rewind.
    pub fn settle(&mut self) -> Update {
        let update = self.state.settle();
        self.follow(update)
    }

    /// Unmount: autoplay never fires again and any drag is dropped.
    pub fn teardown(&mut self) {
        self.autoplay.stop();
        self.drag = None;
        tracing::debug!(index = self.current_index(), "carousel torn down");
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let current = self.state.current_index();
        CarouselSnapshot {
            current_index: current,
            base_len: self.state.base_len(),
            is_paused: self.is_paused(),
            is_dragging: self.is_dragging(),
            offset: self.offset(),
            visual_offset: self.visual_offset(),
            progress_dot_index: self.progress_dot_index(),
            can_navigate_left: self.can_navigate_left(),
            can_navigate_right: self.can_navigate_right(),
            pending_rewind: self.pending_rewind(),
            autoplay: self.autoplay.state(),
            roles: (0..self.repository.looped_len())
                .map(|i| role(i, current))
                .collect(),
        }
    }

    /// Keep an in-flight drag in the same picture across a silent rewind.
    fn follow(&mut self, update: Update) -> Update {
        if let (Some(drag), Some(rewind)) = (self.drag.as_mut(), update.rewind) {
            debug_assert_eq!(rewind.motion, Motion::Instant);
            drag.shift(rewind.offset_delta(self.card_width));
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sample_records;
    use crate::state::Transition;
    use pretty_assertions::assert_eq;

    const INTERVAL: u64 = 4000;

    fn carousel(n: u32) -> Carousel {
        carousel_with(n, CarouselConfig::default())
    }

    fn carousel_with(n: u32, config: CarouselConfig) -> Carousel {
        let repo = ItemRepository::new(sample_records(n)).expect("repo");
        Carousel::new(repo, &config, 0).expect("carousel")
    }

    fn narrow() -> CarouselConfig {
        CarouselConfig {
            card_width: 360.0,
            ..CarouselConfig::default()
        }
    }

    #[test]
    fn mounts_at_zero() {
        let c = carousel(5);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_paused());
        assert!(!c.is_dragging());
        assert_eq!(c.offset(), 0.0);
        assert_eq!(c.next_deadline(), Some(INTERVAL));
        assert!(!c.can_navigate_left());
        assert!(c.can_navigate_right());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let repo = ItemRepository::new(sample_records(3)).expect("repo");
        let config = CarouselConfig {
            card_width: f64::NAN,
            ..CarouselConfig::default()
        };
        assert!(Carousel::new(repo, &config, 0).is_err());
    }

    #[test]
    fn roles_follow_current_index() {
        let mut c = carousel(5);
        c.go_to_slide(2);
        assert_eq!(c.current_index(), 7);
        assert_eq!(c.role(7), Role::Current);
        assert_eq!(c.role(6), Role::Neighbor);
        assert_eq!(c.role(8), Role::Neighbor);
        assert_eq!(c.role(5), Role::Far);
        assert_eq!(c.role(9), Role::Far);

        let roles = c.snapshot().roles;
        assert_eq!(roles.len(), 15);
        assert_eq!(roles.iter().filter(|r| **r == Role::Current).count(), 1);
        assert_eq!(roles.iter().filter(|r| **r == Role::Neighbor).count(), 2);
    }

    #[test]
    fn autoplay_ticks_walk_the_lead_in() {
        let n = 5;
        let mut c = carousel(n);
        for k in 1..n as u64 {
            let update = c.tick(k * INTERVAL);
            assert_eq!(update.step.map(|t| t.to), Some(k as usize));
            assert_eq!(c.current_index(), k as usize);
            assert_eq!(c.offset(), -(k as f64) * 380.0);
        }
    }

    #[test]
    fn tick_before_deadline_is_noop() {
        let mut c = carousel(5);
        assert!(c.tick(3999).is_noop());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn paused_carousel_does_not_advance() {
        let mut c = carousel(5);
        c.pause();
        assert!(c.is_paused());
        for now in (0..40_000).step_by(250) {
            assert!(c.tick(now).is_noop());
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn resume_waits_a_full_interval() {
        let mut c = carousel(5);
        c.tick(INTERVAL);
        c.pause();
        c.resume(10_000);
        assert!(!c.is_paused());
        assert!(c.tick(13_999).is_noop());
        assert_eq!(c.tick(14_000).step.map(|t| t.to), Some(2));
    }

    #[test]
    fn repeated_pause_and_resume_are_idempotent() {
        let mut c = carousel(3);
        c.pause();
        c.pause();
        c.resume(1000);
        c.resume(3000);
        assert_eq!(c.next_deadline(), Some(5000));
    }

    #[test]
    fn drag_threshold_with_360_cards() {
        for (dx, expected) in [(-119.0, 0), (-120.0, 0), (-121.0, 1), (-200.0, 1)] {
            let mut c = carousel_with(5, narrow());
            c.on_drag_start();
            c.on_drag_move(dx);
            c.on_drag_end(dx);
            assert_eq!(c.current_index(), expected, "dx = {dx}");
        }

        for (dx, expected) in [(119.0, 5), (120.0, 5), (121.0, 4), (130.0, 4)] {
            let mut c = carousel_with(5, narrow());
            c.go_to_slide(0);
            c.on_drag_start();
            c.on_drag_end(dx);
            assert_eq!(c.current_index(), expected, "dx = {dx}");
        }
    }

    #[test]
    fn retreat_at_zero_is_clamped() {
        let mut c = carousel_with(5, narrow());
        c.on_drag_start();
        assert!(c.on_drag_end(500.0).is_noop());
        assert_eq!(c.current_index(), 0);
        assert!(c.navigate_left().is_noop());
    }

    #[test]
    fn visual_offset_follows_the_pointer() {
        let mut c = carousel(5);
        c.go_to_slide(0);
        c.on_drag_start();
        assert!(c.is_dragging());
        c.on_drag_move(-100.0);
        assert_eq!(c.visual_offset(), -1900.0 - 100.0);
        assert_eq!(c.offset(), -1900.0);
        c.on_drag_end(-100.0);
        assert!(!c.is_dragging());
        assert_eq!(c.visual_offset(), c.offset());
    }

    #[test]
    fn drag_past_the_start_is_elastic() {
        let mut c = carousel(5);
        c.on_drag_start();
        c.on_drag_move(300.0);
        assert!((c.visual_offset() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn tick_during_drag_moves_the_index_but_not_the_picture() {
        let mut c = carousel(5);
        c.on_drag_start();
        c.on_drag_move(-50.0);
        c.tick(INTERVAL);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.visual_offset(), -50.0);
    }

    #[test]
    fn rewind_during_drag_shifts_the_anchor() {
        let n = 5;
        let mut c = carousel(n as u32);
        for k in 1..=2 * n as u64 {
            c.tick(k * INTERVAL);
        }
        assert_eq!(c.current_index(), 2 * n);

        c.on_drag_start();
        c.on_drag_move(-40.0);
        let before = c.visual_offset();
        let update = c.settle();
        assert_eq!(
            update.rewind,
            Some(Transition {
                from: 2 * n,
                to: n,
                motion: Motion::Instant,
            })
        );
        assert_eq!(c.current_index(), n);
        // same picture, one full copy of the list to the right
        assert_eq!(c.visual_offset() - before, n as f64 * 380.0);
        assert_eq!(c.visual_offset(), c.offset() - 40.0);
    }

    #[test]
    fn loop_continuity_through_the_facade() {
        let w = 380.0;
        for n in 1..=5usize {
            let mut c = carousel(n as u32);
            let mut picture = c.offset();
            let mut dot = c.progress_dot_index();
            for k in 1..=(4 * n as u64) {
                let update = c.tick(k * INTERVAL);
                let mut animated = 0.0;
                for t in update.transitions() {
                    match t.motion {
                        Motion::Animate => animated += t.offset_delta(w),
                        Motion::Instant => {
                            assert_eq!(t.offset_delta(w) % (n as f64 * w), 0.0)
                        }
                    }
                    picture += t.offset_delta(w);
                }
                assert_eq!(animated, -w);
                assert_eq!(picture, c.offset());
                assert_eq!(c.progress_dot_index(), (dot + 1) % n);
                dot = c.progress_dot_index();
                c.settle();
                picture = c.offset();
            }
        }
    }

    #[test]
    fn go_to_slide_two_of_five() {
        let mut c = carousel(5);
        c.go_to_slide(2);
        assert_eq!(c.current_index(), 7);
        assert_eq!(c.progress_dot_index(), 2);
        assert_eq!(c.offset(), -7.0 * 380.0);
    }

    #[test]
    fn navigation_buttons_respect_the_ends() {
        let mut c = carousel(2);
        for _ in 0..10 {
            c.navigate_right();
        }
        assert!(c.current_index() <= 5);
        assert!(c.navigate_left().step.is_some());
        assert!(c.can_navigate_left());
    }

    #[test]
    fn teardown_stops_autoplay_for_good() {
        let mut c = carousel(5);
        c.on_drag_start();
        c.teardown();
        assert!(!c.is_dragging());
        assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
        c.pause();
        c.resume(0);
        assert!(c.tick(u64::MAX).is_noop());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn snapshot_serializes() {
        let c = carousel(3);
        let json = serde_json::to_value(c.snapshot()).expect("json");
        assert_eq!(json["current_index"], 0);
        assert_eq!(json["autoplay"]["state"], "running");
        assert_eq!(json["roles"][1], "neighbor");
    }
}
