use dotenvy::dotenv;

mod config;
mod console;
mod setup;

use config::app_config::AppConfig;
use console::Console;
use setup::dependency_injection::DependencyContainer;

/// Catalog Admin Console Entry Point
///
/// Initializes logging and configuration, wires dependencies, and runs the
/// interactive console against the catalog REST API.
///
/// Layout:
/// - config/: Application configuration (catalog API endpoint)
/// - setup/: Dependency injection
/// - console/: Command parsing, rendering and error messages
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, away from the console output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run console
    Console::stdio(container.controller).run().await?;

    Ok(())
}
