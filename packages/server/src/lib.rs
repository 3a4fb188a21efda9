// Hemolink - blood donation coordination API
//
// This crate provides the backend API for coordinating blood donors and
// seekers over a relational schema (users, donations, matches).

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
