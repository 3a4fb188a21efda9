//! Users domain - donor and seeker profiles

pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::UserData;
pub use models::user::{NewUser, User, UserUpdate};
