mod monitor;
mod transition_event;

pub use {
    monitor::{DEFAULT_CONFIDENCE_THRESHOLD, TransitionMonitor, next_transition},
    transition_event::TransitionEvent,
};
