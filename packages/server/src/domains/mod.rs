// Business domains
pub mod auth;
pub mod donations;
pub mod matching;
pub mod users;
