//! Car Orders service entry point
//!
//! Loads `config/{env}.yaml`, initialises logging, connects to
//! PostgreSQL and starts the HTTP gateway.

use std::sync::Arc;

use car_orders::config::AppConfig;
use car_orders::db::Database;
use car_orders::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _log_guard = logging::init_logging(&config);
    tracing::info!("Starting Car Orders service in {} mode", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);

    gateway::run_server(&config, db).await;
    Ok(())
}
