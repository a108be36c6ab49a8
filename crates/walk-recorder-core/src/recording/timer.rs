//! Cancelable one-shot timer.

use std::{future::Future, time::Duration};

use tokio::sync::oneshot;
use tracing::trace;

/// Handle to a pending one-shot timer.
///
/// Cancelling consumes the handle, so a timer can be cancelled at most once.
/// Dropping the handle cancels the timer as well.
#[derive(Debug)]
pub struct TimerHandle {
    cancel_tx: oneshot::Sender<()>,
}

impl TimerHandle {
    /// Cancel the timer.
    ///
    /// Returns `true` if the timer was still pending, `false` if it had
    /// already fired. Callers must not rely on `true` meaning the expiry
    /// callback never ran: an expiry that raced the cancel still has to be
    /// absorbed by a state check on the callback side.
    pub fn cancel(self) -> bool {
        self.cancel_tx.send(()).is_ok()
    }

    /// Whether the timer task is still waiting.
    pub fn is_pending(&self) -> bool {
        !self.cancel_tx.is_closed()
    }
}

/// Run `on_expire` after `delay` unless the returned handle is cancelled first.
///
/// Must be called from within a tokio runtime.
pub fn schedule<F, Fut>(delay: Duration, on_expire: F) -> TimerHandle
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel_rx => {
                trace!("Timer cancelled");
            }
            _ = tokio::time::sleep(delay) => {
                trace!(delay_ms = delay.as_millis(), "Timer elapsed");
                on_expire().await;
            }
        }
    });

    TimerHandle { cancel_tx }
}
