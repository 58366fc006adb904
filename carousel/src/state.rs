//! The single authoritative carousel index and its transitions.
//!
//! Index layout over the tripled sequence (N records):
//!
//! ```text
//!   0 ........ N-1 | N ........ 2N-1 | 2N ....... 3N-1
//!   lead-in third  |  middle third   |  overflow third
//! ```
//!
//! The carousel starts at 0 and walks into the middle third. From then on,
//! every step that leaves the middle third records a silent rewind to the
//! homologous middle-third slot. The rewind is applied on [`CarouselState::settle`]
//! or, at the latest, before the next step, and is reported as an
//! [`Motion::Instant`] transition so the renderer can shift its animated
//! position by the same amount without a visible jump.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};
use crate::position::{dot_target, homologous, last_index, middle_third, offset};

/// How the renderer should move from one index to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    /// Animate the strip one card over
    Animate,
    /// Shift position and target together; the picture does not change
    Instant,
}

/// One applied change of the current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub motion: Motion,
}

impl Transition {
    /// Offset change this transition implies for cards of `card_width`.
    pub fn offset_delta(&self, card_width: f64) -> f64 {
        offset(self.to, card_width) - offset(self.from, card_width)
    }
}

/// Result of a mutation: an optional silent rewind followed by an optional step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub rewind: Option<Transition>,
    pub step: Option<Transition>,
}

impl Update {
    pub fn is_noop(&self) -> bool {
        self.rewind.is_none() && self.step.is_none()
    }

    /// Applied transitions in order.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> {
        self.rewind.into_iter().chain(self.step)
    }
}

/// Direction of a single-card step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// `current_index` and `is_paused`, plus the bookkeeping for silent rewinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    base_len: usize,
    current_index: usize,
    is_paused: bool,
    pending_rewind: Option<usize>,
    entered_loop: bool,
}

impl CarouselState {
    /// Fresh state at index 0, not paused.
    pub fn new(base_len: usize) -> Result<Self> {
        if base_len == 0 {
            return Err(CarouselError::EmptyRepository);
        }
        Ok(Self {
            base_len,
            current_index: 0,
            is_paused: false,
            pending_rewind: None,
            entered_loop: false,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    pub fn last_index(&self) -> usize {
        last_index(self.base_len)
    }

    /// Index the next settle will rewrite `current_index` to, if any.
    pub fn pending_rewind(&self) -> Option<usize> {
        self.pending_rewind
    }

    /// Returns true when the flag actually changed.
    pub(crate) fn set_paused(&mut self, paused: bool) -> bool {
        let changed = self.is_paused != paused;
        self.is_paused = paused;
        changed
    }

    /// Autoplay step: one card forward.
    pub fn advance(&mut self) -> Update {
        self.step(Step::Forward)
    }

    /// Drag or button step forward, clamped at `3N - 1`.
    pub fn advance_by_drag(&mut self) -> Update {
        self.step(Step::Forward)
    }

    /// Drag or button step backward, clamped at 0.
    pub fn retreat(&mut self) -> Update {
        self.step(Step::Backward)
    }

    /// Jump to progress dot `dot` (lands on `dot + N`, clamped).
    pub fn go_to_slide(&mut self, dot: usize) -> Update {
        let rewind = self.apply_rewind();
        let target = dot_target(dot, self.base_len);
        Update {
            rewind,
            step: self.move_to(target),
        }
    }

    /// Apply a pending rewind, if any.
    pub fn settle(&mut self) -> Update {
        Update {
            rewind: self.apply_rewind(),
            step: None,
        }
    }

    fn step(&mut self, step: Step) -> Update {
        let rewind = self.apply_rewind();
        let target = match step {
            Step::Forward => self.current_index.saturating_add(1),
            Step::Backward => self.current_index.saturating_sub(1),
        };
        Update {
            rewind,
            step: self.move_to(target),
        }
    }

    fn apply_rewind(&mut self) -> Option<Transition> {
        let to = self.pending_rewind.take()?;
        let from = self.current_index;
        if from == to {
            return None;
        }
        self.current_index = to;
        tracing::debug!(from, to, "silent rewind into middle third");
        Some(Transition {
            from,
            to,
            motion: Motion::Instant,
        })
    }

    fn move_to(&mut self, target: usize) -> Option<Transition> {
        let target = target.min(self.last_index());
        let from = self.current_index;
        if target == from {
            return None;
        }
        self.current_index = target;

        let n = self.base_len;
        if middle_third(n).contains(&target) {
            self.entered_loop = true;
            self.pending_rewind = None;
        } else if target >= 2 * n || self.entered_loop {
            self.pending_rewind = Some(homologous(target, n));
        } else {
            self.pending_rewind = None;
        }

        tracing::debug!(from, to = target, pending = ?self.pending_rewind, "carousel step");
        Some(Transition {
            from,
            to: target,
            motion: Motion::Animate,
        })
    }
}
