//! # Voyage Quoter Entry Point
//!
//! Opens a session, prints the catalog and the restored cart as JSON, and
//! closes it again. Useful to check a config file or inspect a store.
//!
//! ```text
//! VOYAGE_DB_PATH=/tmp/voyage.db RUST_LOG=debug voyage-quoter [config.toml]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;
use voyage_quoter::state::AppConfig;
use voyage_quoter::{commands, init_tracing, App};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = match App::bootstrap(config).await {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to start session");
            return ExitCode::FAILURE;
        }
    };

    let summary = serde_json::json!({
        "destinations": commands::list_destinations(&app).await,
        "customer": commands::get_customer(&app).await,
        "cart": commands::get_cart(&app).await,
    });

    match serde_json::to_string_pretty(&summary) {
        Ok(text) => println!("{}", text),
        Err(e) => error!(error = %e, "Failed to render summary"),
    }

    app.shutdown().await;
    ExitCode::SUCCESS
}
