//! Matching domain actions - business logic functions

mod auto_match;

pub use auto_match::{create_automatic_matches, AutoMatchResult};
