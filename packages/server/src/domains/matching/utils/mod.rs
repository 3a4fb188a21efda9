pub mod compatibility;

pub use compatibility::{compatibility_score, locations_overlap, AUTO_MATCH_THRESHOLD};
