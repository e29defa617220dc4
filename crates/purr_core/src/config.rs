//! Configuration
//!
//! TOML file with defaults for every field, env var overrides applied on
//! top. The file lives at `~/.config/purr/purr.toml` and is entirely
//! optional — a missing or invalid file just means defaults.

use crate::dynamics::DecayModel;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurrConfig {
    pub pet: PetDefaults,
    pub decay: DecayConfig,
    pub store: StoreConfig,
}

impl PurrConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. Env var overrides are applied after parsing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: PurrConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist or won't parse,
    /// return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("PURR_NAME") {
            if !v.is_empty() {
                self.pet.name = v;
            }
        }
        if let Ok(v) = std::env::var("PURR_STATE_FILE") {
            if !v.is_empty() {
                self.store.state_path = Some(PathBuf::from(v));
            }
        }
    }

    /// Decay model built from the configured rates.
    pub fn decay_model(&self) -> DecayModel {
        DecayModel {
            hunger_per_hour: self.decay.hunger_per_hour,
            happiness_per_hour: self.decay.happiness_per_hour,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PetDefaults {
    /// Name used for a pet created on first run.
    pub name: String,
}

impl Default for PetDefaults {
    fn default() -> Self {
        Self {
            name: "Purr".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub hunger_per_hour: f32,
    pub happiness_per_hour: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        let model = DecayModel::default();
        Self {
            hunger_per_hour: model.hunger_per_hour,
            happiness_per_hour: model.happiness_per_hour,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Override for the state file location. When unset the store uses
    /// `~/.purr_state.json`.
    pub state_path: Option<PathBuf>,
}
