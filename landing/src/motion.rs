//! Presentation math: card emphasis, scroll effects and keeping the spring
//! in step with carousel updates. Nothing here touches the DOM.

use std::time::Duration;

use omw_carousel::{Role, Spring, Update};

/// How long the splash screen stays up.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2200);

/// How often the reviews section polls the autoplay deadline.
pub const AUTOPLAY_POLL: Duration = Duration::from_millis(250);

/// Header turns solid past this many pixels of scroll.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll distance over which hero parallax runs.
pub const PARALLAX_RANGE: f64 = 500.0;

/// Scale and opacity of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
    pub scale: f64,
    pub opacity: f64,
}

impl Emphasis {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Current => Self { scale: 1.03, opacity: 1.0 },
            Role::Neighbor => Self { scale: 0.98, opacity: 0.9 },
            Role::Far => Self { scale: 0.96, opacity: 0.7 },
        }
    }

    pub fn style(&self) -> String {
        format!("transform: scale({}); opacity: {};", self.scale, self.opacity)
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Map `scroll_y` in `[0, PARALLAX_RANGE]` linearly onto `[0, travel]`, clamped.
pub fn parallax(scroll_y: f64, travel: f64) -> f64 {
    if !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / PARALLAX_RANGE).clamp(0.0, 1.0) * travel
}

/// Bring the spring in line with a carousel update.
///
/// A silent rewind moves position and target together; afterwards the spring
/// chases `offset` unless a drag is holding it.
pub fn follow(spring: &mut Spring, update: &Update, offset: f64, dragging: bool, card_width: f64) {
    if let Some(rewind) = update.rewind {
        spring.shift(rewind.offset_delta(card_width));
    }
    if !dragging {
        spring.set_target(offset);
    }
}

pub fn strip_style(position: f64) -> String {
    format!("transform: translate3d({position}px, 0, 0);")
}
