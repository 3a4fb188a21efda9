//! Login action

use anyhow::Result;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::domains::auth::jwt::JwtService;
use crate::domains::users::models::user::User;

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Result of a login attempt
pub enum LoginResult {
    Authenticated { user: User, token: String },
    UnknownEmail,
}

/// Authenticate a user by email and issue a session token.
///
/// The users table carries no credential column, so the submitted password
/// is accepted but not checked; an unknown email is the only failure mode.
pub async fn login(
    credentials: LoginCredentials,
    jwt_service: &JwtService,
    pool: &PgPool,
) -> Result<LoginResult> {
    let Some(user) = User::find_by_email(&credentials.email, pool).await? else {
        info!(email = %credentials.email, "Login rejected: unknown email");
        return Ok(LoginResult::UnknownEmail);
    };

    let token = jwt_service.create_token(user.id, user.email.clone(), user.user_type.clone())?;

    info!(user_id = user.id, "User logged in");

    Ok(LoginResult::Authenticated { user, token })
}
