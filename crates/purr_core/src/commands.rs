//! Command transitions
//!
//! Each interaction is a plain function over `&mut PetState` that returns
//! an outcome for the CLI to render. No hidden globals: the caller owns
//! the state and decides when it gets persisted.

use crate::state::PetState;

/// What to feed the pet when the user doesn't say.
pub const DEFAULT_FOOD: &str = "kibble";

/// Result of a `feed` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The pet ate: hunger -25, happiness +5.
    Ate { item: String },
    /// Hunger was below 10 — the pet sniffs the food and walks away.
    NotHungry,
}

/// Feed the pet. Below hunger 10 the pet refuses and the state is
/// untouched; otherwise hunger drops by 25 (floor 0) and happiness rises
/// by 5 (cap 100).
pub fn feed(state: &mut PetState, item: &str) -> FeedOutcome {
    if state.hunger < 10.0 {
        return FeedOutcome::NotHungry;
    }

    state.hunger -= 25.0;
    state.happiness += 5.0;
    state.normalize();

    FeedOutcome::Ate {
        item: item.to_string(),
    }
}

/// Play with the pet: happiness +30, hunger +15, both capped at 100.
/// Exercise works up an appetite.
pub fn play(state: &mut PetState) {
    state.happiness += 30.0;
    state.hunger += 15.0;
    state.normalize();
}

/// Rename the pet. Touches only the name field; returns the old name so
/// the CLI can announce the change.
pub fn rename(state: &mut PetState, new_name: &str) -> String {
    std::mem::replace(&mut state.name, new_name.to_string())
}
