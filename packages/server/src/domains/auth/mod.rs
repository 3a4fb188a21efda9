//! Auth domain - login, registration and session tokens
//!
//! Responsibilities:
//! - Email-based login and registration
//! - JWT token management

pub mod actions;
pub mod jwt;

pub use actions::{login, register, LoginCredentials, LoginResult, RegisterResult};
pub use jwt::{Claims, JwtService};
