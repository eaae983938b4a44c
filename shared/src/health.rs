//! Liveness and readiness endpoints shared by every service

use axum::{
    routing::{get, MethodRouter},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const LIVENESS_PATH: &str = "/health/live";
pub const READINESS_PATH: &str = "/health/ready";

/// Which probe a handler answers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProbeKind {
    #[serde(rename = "UP")]
    Liveness,
    #[serde(rename = "READY")]
    Readiness,
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: ProbeKind,
    pub service: String,
    pub timestamp: String,
}

impl HealthStatus {
    /// Stamped with the current time, RFC 3339 at second precision.
    pub fn new(kind: ProbeKind, service: &str) -> Self {
        Self {
            status: kind,
            service: service.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

fn probe_handler<S>(kind: ProbeKind, service_name: impl Into<Arc<str>>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let service: Arc<str> = service_name.into();
    get(move || {
        let service = Arc::clone(&service);
        async move { Json(HealthStatus::new(kind, &service)) }
    })
}

/// GET handler reporting `UP` for `service_name`
pub fn liveness_handler<S>(service_name: impl Into<Arc<str>>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    probe_handler(ProbeKind::Liveness, service_name)
}

/// GET handler reporting `READY` for `service_name`
pub fn readiness_handler<S>(service_name: impl Into<Arc<str>>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    probe_handler(ProbeKind::Readiness, service_name)
}

/// Health check routes
pub fn health_routes<S>(service_name: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(LIVENESS_PATH, liveness_handler(service_name))
        .route(READINESS_PATH, readiness_handler(service_name))
}
