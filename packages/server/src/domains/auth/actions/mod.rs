//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the REST handlers.

mod login;
mod register;

pub use login::{login, LoginCredentials, LoginResult};
pub use register::{register, RegisterResult};
