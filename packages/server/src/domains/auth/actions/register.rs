//! Register action

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::domains::auth::jwt::JwtService;
use crate::domains::users::models::user::{NewUser, User};

/// Result of a registration attempt
pub enum RegisterResult {
    Registered { user: User, token: String },
    EmailTaken,
}

/// Register a new user and issue a session token.
///
/// Emails are unique; a duplicate registration is rejected before the
/// insert is attempted.
pub async fn register(
    input: NewUser,
    jwt_service: &JwtService,
    pool: &PgPool,
) -> Result<RegisterResult> {
    if User::email_exists(&input.email, pool).await? {
        info!(email = %input.email, "Registration rejected: email already registered");
        return Ok(RegisterResult::EmailTaken);
    }

    let user = User::create(input, pool).await?;

    let token = jwt_service.create_token(user.id, user.email.clone(), user.user_type.clone())?;

    info!(user_id = user.id, "User registered");

    Ok(RegisterResult::Registered { user, token })
}
