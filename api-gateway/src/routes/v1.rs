use axum::{routing::post, Router};

use crate::handlers::auth;

/// Create all routes for API v1
pub fn create_routes() -> Router {
    Router::new()
        // User account routes
        .nest("/users", user_routes())
}

/// User routes
fn user_routes() -> Router {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}
