use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// Synthetic signal raised at a STILL/WALKING boundary.
///
/// The discriminants are the wire codes exchanged with the recording side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TransitionEvent {
    /// WALKING -> STILL.
    StoppedWalking = 0,
    /// STILL -> WALKING.
    StartedWalking = 1,
}

impl TransitionEvent {
    /// Wire code for this signal.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decode a wire code.
    ///
    /// Unknown codes are a caller defect and are rejected.
    #[track_caller]
    pub fn from_code(code: i32) -> CoreResult<Self> {
        match code {
            0 => Ok(Self::StoppedWalking),
            1 => Ok(Self::StartedWalking),
            _ => Err(CoreError::InvalidSignal {
                code,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<i32> for TransitionEvent {
    type Error = CoreError;

    #[track_caller]
    fn try_from(code: i32) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionEvent::StoppedWalking => f.write_str("STOPPED_WALKING"),
            TransitionEvent::StartedWalking => f.write_str("STARTED_WALKING"),
        }
    }
}
