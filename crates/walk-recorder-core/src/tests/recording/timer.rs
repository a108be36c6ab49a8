use crate::schedule;

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

fn flag_timer(delay: Duration) -> (crate::TimerHandle, Arc<AtomicBool>) {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);
    let handle = schedule(delay, move || async move {
        flag.store(true, Ordering::SeqCst);
    });
    (handle, fired)
}

/// WHAT: An uncancelled timer fires after its delay and not before
/// WHY: The recording window must close on time
#[tokio::test(start_paused = true)]
async fn given_pending_timer_when_delay_elapses_then_callback_runs() {
    // Given: A 30 second timer
    let (handle, fired) = flag_timer(Duration::from_secs(30));

    // When: 29 seconds pass
    tokio::time::sleep(Duration::from_secs(29)).await;

    // Then: Not fired yet
    assert!(!fired.load(Ordering::SeqCst));
    assert!(handle.is_pending());

    // When: Past the deadline
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Then: Fired
    assert!(fired.load(Ordering::SeqCst));
}

/// WHAT: Cancelling before expiry prevents the callback
/// WHY: An explicit stop must suppress the timed stop
#[tokio::test(start_paused = true)]
async fn given_pending_timer_when_cancelled_then_callback_never_runs() {
    // Given: A 30 second timer
    let (handle, fired) = flag_timer(Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(10)).await;

    // When: Cancelled at 10 seconds
    let was_pending = handle.cancel();
    tokio::time::sleep(Duration::from_secs(60)).await;

    // Then: Cancel hit a pending timer and the callback never ran
    assert!(was_pending);
    assert!(!fired.load(Ordering::SeqCst));
}

/// WHAT: Dropping the handle cancels the timer
/// WHY: A discarded session must not leave a live timer behind
#[tokio::test(start_paused = true)]
async fn given_pending_timer_when_handle_dropped_then_callback_never_runs() {
    // Given: A 30 second timer
    let (handle, fired) = flag_timer(Duration::from_secs(30));

    // When: The handle is dropped
    drop(handle);
    tokio::time::sleep(Duration::from_secs(60)).await;

    // Then: Never fired
    assert!(!fired.load(Ordering::SeqCst));
}
