//! CLI command handlers.
//!
//! Kept separate from main.rs so they can be unit tested.

mod config;
mod track;

pub use config::handle_init_config;
pub use track::{TrackOutcome, handle_track, run_track};
