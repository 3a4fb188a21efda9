//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    auto_match, create_donation, create_match, create_user, delete_donation, delete_match,
    delete_user, find_potential_matches, get_available_donors, get_available_seekers,
    get_critical_pending_donations, get_donation, get_donations_by_blood_group,
    get_donations_by_seeker, get_donations_by_status, get_donations_by_urgency,
    get_donations_by_user, get_high_compatibility_matches, get_match, get_matches_by_seeker,
    get_matches_by_status, get_matches_by_user, get_user, get_users_by_blood_group,
    get_users_by_location, health_handler, list_donations, list_matches, list_users,
    login_handler, logout_handler, register_handler, update_donation, update_match, update_user,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, jwt_secret: &str, jwt_issuer: String) -> Router {
    let jwt_service = Arc::new(JwtService::new(jwt_secret, jwt_issuer));

    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting configuration
    // API: 10 requests per second per IP with burst of 20
    // Prevents API abuse and resource exhaustion
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10) // Base rate: 10 requests per second
            .burst_size(20) // Allow bursts up to 20
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = jwt_service;

    let api = Router::new()
        // Users
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/users/blood-group/:blood_group/:user_type",
            get(get_users_by_blood_group),
        )
        .route(
            "/users/location/:location/:user_type",
            get(get_users_by_location),
        )
        .route("/users/donors/:blood_group", get(get_available_donors))
        .route("/users/seekers/:blood_group", get(get_available_seekers))
        // Donations
        .route("/donations", get(list_donations).post(create_donation))
        .route(
            "/donations/:id",
            get(get_donation).put(update_donation).delete(delete_donation),
        )
        .route("/donations/user/:user_id", get(get_donations_by_user))
        .route("/donations/seeker/:seeker_id", get(get_donations_by_seeker))
        .route(
            "/donations/blood-group/:blood_group",
            get(get_donations_by_blood_group),
        )
        .route("/donations/status/:status", get(get_donations_by_status))
        .route("/donations/urgency/:urgency", get(get_donations_by_urgency))
        .route("/donations/critical", get(get_critical_pending_donations))
        // Matches
        .route("/matches", get(list_matches).post(create_match))
        .route(
            "/matches/:id",
            get(get_match).put(update_match).delete(delete_match),
        )
        .route("/matches/user/:user_id", get(get_matches_by_user))
        .route("/matches/seeker/:seeker_id", get(get_matches_by_seeker))
        .route("/matches/status/:status", get(get_matches_by_status))
        .route(
            "/matches/find/:blood_group/:location",
            get(find_potential_matches),
        )
        .route(
            "/matches/high-compatibility",
            get(get_high_compatibility_matches),
        )
        .route("/matches/auto-match/:blood_group", post(auto_match))
        // Auth
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/logout", post(logout_handler));

    Router::new()
        .nest("/api", api)
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        })) // JWT authentication
        .layer(rate_limit_layer) // Rate limit per IP
        .layer(Extension(app_state)) // Shared state
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
