//! Walk-Recorder: records a fixed window of activity whenever the user starts walking.

mod app;
mod app_command;
mod config;
mod console;
mod error;
mod log_recorder;
mod simulated_classifier;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    log_recorder::LogRecorder,
    simulated_classifier::SimulatedClassifier,
};

use crate::config::Config;

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::{runtime::Runtime, sync::mpsc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walk_recorder_core::{
    ActivityTracker, FileStore, Recorder, RecordingWindowController, StateStore,
    TransitionMonitor,
};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("walk_recorder=debug,walk_recorder_core=debug")),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn StateStore> = match Config::state_path()
        .and_then(|path| FileStore::open(path).map_err(AppError::from))
    {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to open state store: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let (command_tx, command_rx) = mpsc::channel(32);

    // Console reads block, so they get a plain thread. It is detached: a
    // pending stdin read must not hold up process exit.
    let console_tx = command_tx.clone();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        if let Err(e) = console::forward_console_commands(stdin.lock(), console_tx) {
            error!(error = ?e, "Console input error");
        }
    });

    rt.block_on(async {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received");
                    if let Err(e) = command_tx.send(AppCommand::Shutdown).await {
                        error!(error = ?e, "Failed to send shutdown command");
                    }
                }
                // Without a Ctrl-C handler the console `q` command still shuts down.
                Err(e) => error!(error = ?e, "Failed to listen for Ctrl-C"),
            }
        });

        let app = build_app(&config, store, Arc::new(LogRecorder), command_rx);

        if let Err(e) = app.run().await {
            error!(error = ?e, "App error");
        }
    });
}

#[track_caller]
fn build_runtime() -> AppResult<Runtime> {
    Runtime::new().map_err(|e| AppError::RuntimeError {
        reason: format!("Failed to create tokio runtime: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Wire the core components to the simulated classifier and `recorder`.
pub(crate) fn build_app(
    config: &Config,
    store: Arc<dyn StateStore>,
    recorder: Arc<dyn Recorder>,
    command_rx: mpsc::Receiver<AppCommand>,
) -> App {
    let (event_tx, event_rx) = mpsc::channel(32);

    let monitor = Arc::new(TransitionMonitor::new(
        Arc::clone(&store),
        config.monitor.confidence_threshold,
    ));
    let controller =
        RecordingWindowController::new(recorder, Arc::clone(&store), config.recording.window());
    let tracker = ActivityTracker::new(
        SimulatedClassifier::new(config.simulator.update_interval()),
        store,
        event_tx,
        config.tracking.mode,
    );

    App {
        monitor,
        controller,
        tracker,
        event_rx,
        command_rx,
        initial_mode: config.tracking.mode,
    }
}
