//! Listener bootstrap shared by every service binary

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{config::ServiceConfig, health::health_routes, Result, ServiceError};

/// Health routes for `config`, with request tracing.
pub fn service_router(config: &ServiceConfig) -> Router {
    health_routes(&config.service_name).layer(TraceLayer::new_for_http())
}

/// Bind on every interface at the configured port.
pub async fn bind(config: &ServiceConfig) -> Result<TcpListener> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until the process is killed.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }

    axum::serve(listener, app).await.map_err(ServiceError::Serve)
}

/// Log the startup line, bind and serve. Bind failures are logged here and
/// returned; callers exit on them.
pub async fn run(config: &ServiceConfig, app: Router) -> Result<()> {
    config.log_startup();

    let listener = match bind(config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(service = %config.service_name, "Server failed to start: {}", e);
            return Err(e);
        }
    };

    serve(listener, app).await
}
