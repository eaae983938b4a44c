use anyhow::Result;
use shared::{observability, server, ServiceConfig};
use tracing::info;

mod handlers;
mod routes;

const SERVICE_NAME: &str = "api_gateway";
const DEFAULT_PORT: &str = "8000";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    observability::init_from_env(SERVICE_NAME)?;

    // API_GATEWAY_PORT overrides the default
    let config = ServiceConfig::load(SERVICE_NAME, DEFAULT_PORT);
    let app = routes::create_router(&config);
    info!("User routes mounted under /api/v1/users");

    server::run(&config, app).await?;

    Ok(())
}
