//! Core of the `purr` terminal pet: the state record, its time-based
//! decay, mood classification, command transitions and the persistence
//! seam. The CLI crate owns argument parsing and rendering; everything
//! that changes state lives here.

pub mod commands;
pub mod config;
pub mod dynamics;
pub mod mood;
pub mod state;
pub mod store;

pub use commands::{feed, play, rename, FeedOutcome, DEFAULT_FOOD};
pub use config::PurrConfig;
pub use dynamics::DecayModel;
pub use mood::Mood;
pub use state::PetState;
pub use store::{JsonFileStore, StateStore, StoreError, STATE_FILE_NAME};
