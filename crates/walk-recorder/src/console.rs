//! Console control: the stand-in for the two tracking toggle buttons.

use crate::{AppCommand, AppError, AppResult};

use std::{io::BufRead, panic::Location};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Read commands line by line from `input` and forward them.
///
/// Blocking: run on a dedicated thread, never on the async runtime.
/// Returns when input ends, after forwarding `Shutdown`, or when the
/// application stops receiving.
#[track_caller]
pub(crate) fn forward_console_commands(
    input: impl BufRead,
    command_tx: mpsc::Sender<AppCommand>,
) -> AppResult<()> {
    info!("Console ready: [a]ctivity, [t]ransition, [q]uit");

    for line in input.lines() {
        let line = line?;

        let Some(command) = AppCommand::parse(&line) else {
            if !line.trim().is_empty() {
                warn!(input = %line.trim(), "Unknown console command");
            }
            continue;
        };

        command_tx
            .blocking_send(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if command == AppCommand::Shutdown {
            break;
        }
    }

    debug!("Console input closed");

    Ok(())
}
