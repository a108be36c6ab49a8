use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which classifier feed to subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Periodic classified activities, fed to the transition monitor.
    #[default]
    Activity,
    /// Platform-detected ENTER/EXIT transitions, logged only.
    Transition,
}

/// What a toggle should do given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingRequest {
    /// Subscribe in this mode.
    Enable(TrackingMode),
    /// Unsubscribe from this mode.
    Disable(TrackingMode),
}

/// Which toggle controls may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    /// Activity-mode toggle is usable.
    pub activity: bool,
    /// Transition-mode toggle is usable.
    pub transition: bool,
}

/// Tracking mode and whether the classifier subscription is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingState {
    /// Mode last requested.
    pub mode: TrackingMode,
    /// Subscription is active.
    pub enabled: bool,
}

impl TrackingState {
    /// Resolve a toggle of `mode` against the current state.
    ///
    /// Toggling a different mode while tracking is enabled is rejected;
    /// the active mode must be disabled first.
    #[track_caller]
    pub fn request(&self, mode: TrackingMode) -> CoreResult<TrackingRequest> {
        match (self.enabled, self.mode == mode) {
            (false, _) => Ok(TrackingRequest::Enable(mode)),
            (true, true) => Ok(TrackingRequest::Disable(mode)),
            (true, false) => Err(CoreError::ModeBusy {
                active: self.mode,
                requested: mode,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Control availability for this state.
    pub fn controls(&self) -> ControlAvailability {
        if !self.enabled {
            return ControlAvailability {
                activity: true,
                transition: true,
            };
        }

        ControlAvailability {
            activity: self.mode == TrackingMode::Activity,
            transition: self.mode == TrackingMode::Transition,
        }
    }
}
