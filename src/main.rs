//! Countdown Timer - an interactive console countdown that survives restarts
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};

use countdown_timer::{
    config::Config,
    console::{countdown_notice_task, Session},
    error::ConsoleError,
    state::{CountdownController, StopOutcome},
    storage::RecordStore,
    tasks::countdown_ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they stay out of the console on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    let record_path = config.record_path();
    info!("Starting countdown-timer v1.0.0");
    info!("Configuration: file={}", record_path.display());

    let controller = Arc::new(CountdownController::new(RecordStore::new(record_path)));

    // Start the ticker and notice background tasks
    let ticker_controller = Arc::clone(&controller);
    tokio::spawn(async move {
        countdown_ticker_task(ticker_controller).await;
    });

    let notice_controller = Arc::clone(&controller);
    tokio::spawn(async move {
        countdown_notice_task(notice_controller, stdout()).await;
    });

    let mut session = Session::new(Arc::clone(&controller), BufReader::new(stdin()), stdout());

    let shutdown = async {
        match shutdown_signal().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => {
                error!("Failed to listen for shutdown signals: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let console_result = tokio::select! {
        result = session.run() => result,
        _ = shutdown => Ok(()),
    };

    // Save the remaining time of a running countdown before leaving
    match controller.stop() {
        Ok(StopOutcome::Stopped(remaining)) => info!("Countdown stopped and saved at {}", remaining),
        Ok(StopOutcome::NotRunning) => {}
        Err(e) => error!("Failed to stop countdown: {}", e),
    }

    if let Err(e) = &console_result {
        error!("Console session failed: {}", e);
    }

    info!("Shutdown complete");

    // The stdin reader thread cannot be cancelled; exit without waiting on it
    std::process::exit(exit_code(&console_result));
}

/// Process exit code for how the console session ended
fn exit_code(console_result: &Result<(), ConsoleError>) -> i32 {
    if console_result.is_ok() { 0 } else { 1 }
}
