mod classifier;
mod tracker;
mod tracking_state;

pub use {
    classifier::{ActivityClassifier, ClassifierEvent},
    tracker::ActivityTracker,
    tracking_state::{ControlAvailability, TrackingMode, TrackingRequest, TrackingState},
};
