use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sysinfo::System;

use restaurant_onboarding::error::AppResult;
use restaurant_onboarding::messaging::{CommandExecutor, EventBus};
use restaurant_onboarding::terminal::TerminalSession;
use restaurant_onboarding::{Config, HttpRestaurantApi, RegistrationWizard};

const LOG_TARGET_STARTUP: &str = "restaurant_onboarding::startup";

#[derive(Parser)]
#[command(name = "restaurant-onboarding")]
#[command(version)]
#[command(about = "Register a restaurant on the delivery platform, step by step")]
struct Cli {
    /// Base URL of the platform API (overrides config and environment)
    #[arg(long)]
    api_url: Option<String>,

    /// Alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Initialize tracing with file rotation
///
/// Logs are written to `<config_dir>/RestaurantOnboarding/logs/`, one file per
/// day (`restaurant-onboarding.YYYY-MM-DD.log`). Debug builds also log to
/// stderr so the prompts on stdout stay readable.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("RestaurantOnboarding").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "restaurant-onboarding.log");

    // info by default, RUST_LOG wins
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string());

    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting restaurant-onboarding v{} on ({})",
        version,
        std::env::consts::ARCH
    );
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {} (kernel {})", os_name, kernel);
}

fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    config.apply_env_overrides();
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    config.validate()?;

    Ok(config)
}

fn main() -> AppResult<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    initialize_tracing();
    log_runtime_environment();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!("Submitting to {}", config.create_restaurant_url());

    let api = HttpRestaurantApi::new(config.api_base_url.trim());
    let mut executor = CommandExecutor::new(RegistrationWizard::new(api), EventBus::new());

    println!("Restaurant Registration");
    println!("Submitting to {}", config.create_restaurant_url());

    let stdin = io::stdin();
    let summary = TerminalSession::new(stdin.lock(), io::stdout())
        .run(&mut executor)
        .context("terminal session failed")?;

    tracing::info!(
        "Session ended ({} registration(s) submitted, quit: {})",
        summary.submitted.len(),
        summary.quit
    );
    Ok(())
}
