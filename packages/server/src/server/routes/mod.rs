// HTTP routes
pub mod auth;
pub mod donations;
pub mod health;
pub mod matches;
pub mod users;

pub use auth::*;
pub use donations::*;
pub use health::*;
pub use matches::*;
pub use users::*;
