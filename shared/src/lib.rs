//! Shared configuration, health checks and server bootstrap for the worker services

// Re-export common dependencies
pub use anyhow;
pub use axum;
pub use chrono;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;

pub mod config;
pub mod health;
pub mod observability;
pub mod server;

pub use config::ServiceConfig;
pub use health::{health_routes, liveness_handler, readiness_handler, HealthStatus, ProbeKind};

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
