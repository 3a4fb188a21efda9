//! Matching domain - donor/seeker pairing records and automatic matching

pub mod actions;
pub mod data;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use actions::{create_automatic_matches, AutoMatchResult};
pub use data::MatchData;
pub use models::match_record::{Match, MatchUpdate, NewMatch};
