//! Mood classification
//!
//! Discrete mood labels derived from the two drives by threshold rules,
//! checked in priority order: starvation trumps loneliness trumps joy.

use crate::state::PetState;

/// Discrete mood bucket, each with its own kaomoji and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// hunger > 80 — the pet needs food before anything else.
    Starving,
    /// happiness < 20 — neglected for too long.
    Lonely,
    /// happiness > 80 — recently fed and played with.
    Joyful,
    /// Everything in between.
    Content,
}

impl Mood {
    /// Classify the current state.
    pub fn from_state(state: &PetState) -> Self {
        if state.hunger > 80.0 {
            Mood::Starving
        } else if state.happiness < 20.0 {
            Mood::Lonely
        } else if state.happiness > 80.0 {
            Mood::Joyful
        } else {
            Mood::Content
        }
    }

    /// Kaomoji face for this mood.
    pub fn art(&self) -> &'static str {
        match self {
            Mood::Starving => "( =ＴωＴ= )",
            Mood::Lonely => "(  - ω - )",
            Mood::Joyful => "(=^･ω･^=)ノ",
            Mood::Content => "(=^･ω･^=)",
        }
    }

    /// Caption line shown under the art. `name` is the pet's name.
    pub fn caption(&self, name: &str) -> String {
        match self {
            Mood::Starving => format!("{} is starving...", name),
            Mood::Lonely => format!("{} feels lonely.", name),
            Mood::Joyful => format!("{} is vibrating with joy!", name),
            Mood::Content => format!("{} is chilling.", name),
        }
    }
}
