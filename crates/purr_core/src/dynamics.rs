//! Time-based decay
//!
//! Between process runs the pet gets hungrier and less happy in proportion
//! to the hours elapsed since the last save. Decay is applied exactly once
//! per invocation, at load time, before any command logic runs.

use crate::state::PetState;

const SECS_PER_HOUR: f32 = 3600.0;

/// Decay rates in points per elapsed hour.
#[derive(Debug, Clone, Copy)]
pub struct DecayModel {
    /// Hunger gained per hour away.
    pub hunger_per_hour: f32,

    /// Happiness lost per hour away.
    pub happiness_per_hour: f32,
}

impl Default for DecayModel {
    fn default() -> Self {
        Self {
            hunger_per_hour: 5.0,
            happiness_per_hour: 3.0,
        }
    }
}

impl DecayModel {
    /// Drift the state forward to `now` (unix seconds).
    ///
    /// A `last_update` in the future (clock skew, restored backup) decays
    /// nothing: elapsed time is clamped to zero rather than running the
    /// model backwards. `last_update` itself is left alone — it is only
    /// refreshed when the record is saved.
    pub fn apply(&self, state: &mut PetState, now: i64) {
        let elapsed_hours = (now - state.last_update).max(0) as f32 / SECS_PER_HOUR;
        if elapsed_hours > 0.0 {
            tracing::debug!(
                elapsed_hours,
                "applying decay: hunger +{:.2}, happiness -{:.2}",
                elapsed_hours * self.hunger_per_hour,
                elapsed_hours * self.happiness_per_hour,
            );
        }

        state.hunger += elapsed_hours * self.hunger_per_hour;
        state.happiness -= elapsed_hours * self.happiness_per_hour;
        state.normalize();
    }
}
