//! User account endpoints
//!
//! Signup, login and logout belong to the user service; the gateway only
//! owns the paths and answers 501 until requests are forwarded.

use axum::Json;
use serde_json::Value;
use tracing::warn;

use super::{ApiError, ApiResult};

fn not_implemented(operation: &'static str) -> ApiResult<Json<Value>> {
    warn!(operation, "User endpoint called but not implemented");
    Err(ApiError::NotImplemented(operation))
}

/// POST /api/v1/users/signup
pub async fn signup() -> ApiResult<Json<Value>> {
    not_implemented("signup")
}

/// POST /api/v1/users/login
pub async fn login() -> ApiResult<Json<Value>> {
    not_implemented("login")
}

/// POST /api/v1/users/logout
pub async fn logout() -> ApiResult<Json<Value>> {
    not_implemented("logout")
}
