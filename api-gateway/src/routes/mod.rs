pub mod v1;

use axum::Router;
use shared::{health_routes, ServiceConfig};
use tower_http::trace::TraceLayer;

/// The gateway's route registry, owned by `main` and handed to the listener.
pub struct Api {
    router: Router,
}

impl Api {
    /// Starts with the health routes for `config`'s service.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            router: health_routes(&config.service_name),
        }
    }

    /// Register the versioned API tree under `/api`.
    pub fn bind_routes(mut self) -> Self {
        self.router = self
            .router
            .nest("/api", Router::new().nest("/v1", v1::create_routes()));
        self
    }

    pub fn into_router(self) -> Router {
        self.router.layer(TraceLayer::new_for_http())
    }
}

/// Create the main router with all API versions
pub fn create_router(config: &ServiceConfig) -> Router {
    Api::new(config).bind_routes().into_router()
}
