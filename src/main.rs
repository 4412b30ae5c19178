//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `location_finder` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Output formatting (one JSON result per line)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use std::sync::Arc;

use location_finder::initialization::init_logger_with;
use location_finder::{start_server, Config, LocationFinder};

#[tokio::main]
async fn main() -> Result<()> {
    // Load GOOGLE_API_KEY / SEARCH_ENGINE_ID from a .env file if present,
    // first in the current directory, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let finder = match LocationFinder::from_config(&config) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("location_finder error: {:#}", e);
            process::exit(1);
        }
    };

    if let Some(port) = config.serve {
        if let Err(e) = start_server(port, Arc::new(finder)).await {
            eprintln!("location_finder error: {:#}", e);
            process::exit(1);
        }
        return Ok(());
    }

    if config.domains.is_empty() {
        eprintln!("location_finder error: no domains given (pass DOMAIN... or --serve PORT)");
        process::exit(2);
    }

    let mut failed = 0usize;
    for domain in &config.domains {
        let result = finder.analyze(domain).await;
        if !result.is_success() {
            failed += 1;
        }
        let line = serde_json::to_string(&result).context("Failed to serialize result")?;
        println!("{}", line);
    }

    log::info!(
        "Analyzed {} domain{} ({} without results)",
        config.domains.len(),
        if config.domains.len() == 1 { "" } else { "s" },
        failed
    );

    Ok(())
}
