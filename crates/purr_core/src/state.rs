//! The pet state record
//!
//! A single flat struct: two drives (hunger, happiness) on a 0–100 scale
//! plus a name and the timestamp of the last save. Everything else in the
//! crate is a function over this record.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Guard against NaN and Infinity in state values.
/// If the value is NaN or Inf, replace with the provided fallback.
#[inline]
fn sanitize_f32(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        tracing::warn!("NaN/Inf detected in state, resetting to fallback {}", fallback);
        fallback
    }
}

/// Persisted pet record.
///
/// `#[serde(default)]` gives merge-onto-defaults load semantics: a record
/// on disk that predates a field keeps that field's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetState {
    /// The pet's name. Changed only by `rename`.
    pub name: String,

    /// Hunger (0.0 - 100.0): 0 = completely full, 100 = starving.
    /// Rises over time and with play, drops when fed.
    pub hunger: f32,

    /// Happiness (0.0 - 100.0): drops over time, rises with care.
    pub happiness: f32,

    /// Unix timestamp (seconds) of the last save. Decay is computed
    /// against this on the next load.
    pub last_update: i64,
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            name: "Purr".to_string(),
            hunger: 50.0,
            happiness: 50.0,
            last_update: Utc::now().timestamp(),
        }
    }
}

impl PetState {
    /// A fresh pet with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sanitize and clamp both drives to [0, 100].
    ///
    /// Called after load and after every mutation, so a corrupted record
    /// or an arithmetic surprise can never escape the documented ranges.
    pub fn normalize(&mut self) {
        self.hunger = sanitize_f32(self.hunger, 50.0).clamp(0.0, 100.0);
        self.happiness = sanitize_f32(self.happiness, 50.0).clamp(0.0, 100.0);
    }

    /// Refresh `last_update` to the current wall clock.
    pub fn touch(&mut self) {
        self.last_update = Utc::now().timestamp();
    }
}
