use anyhow::Result;
use shared::{observability, server, ServiceConfig};

const SERVICE_NAME: &str = "worker_flow";
const DEFAULT_PORT: &str = "8080";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    observability::init_from_env(SERVICE_NAME)?;

    // WORKER_FLOW_PORT overrides the default
    let config = ServiceConfig::load(SERVICE_NAME, DEFAULT_PORT);
    let app = server::service_router(&config);

    server::run(&config, app).await?;

    Ok(())
}
