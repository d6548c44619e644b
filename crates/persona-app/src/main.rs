use std::fs::File;
use std::sync::{Arc, Mutex};

use persona_config::Config;
use persona_core::directory::DIRECTORY;
use persona_generator::CardGenerator;
use persona_provider_gemini::GeminiGenerator;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Missing credentials are fatal before the terminal is touched
    let config = Config::from_env()?;
    init_tracing(&config.log_file)?;

    let generator = GeminiGenerator::new(&config.gemini)?;
    let metadata = generator.metadata();
    tracing::info!(
        provider = %metadata.name,
        model = %metadata.model,
        people = DIRECTORY.len(),
        "Starting persona carousel"
    );

    let state = Arc::new(AppState::new(config, Arc::new(generator), DIRECTORY));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Task exited with error during shutdown: {e:#}"),
            Err(e) => tracing::error!("Task panicked during shutdown: {e}"),
        }
    }

    tracing::info!("Bye");
    Ok(())
}

/// Log to a file; stdout belongs to the terminal UI
fn init_tracing(log_file: &str) -> anyhow::Result<()> {
    let file = File::create(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
