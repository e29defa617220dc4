//! Persistence
//!
//! An explicit repository seam: the CLI talks to a `StateStore`, the
//! default implementation keeps one pretty-printed JSON record at a fixed
//! per-user path. Saving refreshes `last_update`, so decay on the next
//! load is measured from the end of this run.

use crate::state::PetState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filename of the state record under the user's home directory.
pub const STATE_FILE_NAME: &str = ".purr_state.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save contract for the pet record.
pub trait StateStore {
    /// Read the persisted record, or defaults if none exists yet.
    fn load(&self) -> Result<PetState, StoreError>;

    /// Persist the record, refreshing its `last_update` timestamp.
    fn save(&self, state: &mut PetState) -> Result<(), StoreError>;
}

/// JSON file store at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<PetState, StoreError> {
        if !self.path.exists() {
            info!("no state file at {}, starting fresh", self.path.display());
            return Ok(PetState::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        let mut state: PetState =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        state.normalize();

        debug!(
            hunger = state.hunger,
            happiness = state.happiness,
            "loaded state from {}",
            self.path.display()
        );
        Ok(state)
    }

    fn save(&self, state: &mut PetState) -> Result<(), StoreError> {
        state.touch();
        state.normalize();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        // PetState serialization cannot fail; any error here is I/O.
        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_err(e))?;

        debug!("saved state to {}", self.path.display());
        Ok(())
    }
}
