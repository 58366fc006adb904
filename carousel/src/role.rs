//! Visual role of a card relative to the current index.

use serde::{Deserialize, Serialize};

/// Emphasis category of a rendered card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The card at the current index
    Current,
    /// Directly left or right of the current card
    Neighbor,
    /// Everything else
    Far,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Current => "current",
            Role::Neighbor => "neighbor",
            Role::Far => "far",
        }
    }
}

/// Role of the card at `index` when `current` is the active index.
pub fn role(index: usize, current: usize) -> Role {
    match index.abs_diff(current) {
        0 => Role::Current,
        1 => Role::Neighbor,
        _ => Role::Far,
    }
}
