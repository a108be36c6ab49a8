use crate::ActivityType;

use chrono::{DateTime, Utc};

/// Whether the platform saw the user enter or leave an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTransitionKind {
    /// Activity began.
    Enter,
    /// Activity ended.
    Exit,
}

/// Raw transition event delivered by the platform transition feed.
///
/// These are informational only. Recording is driven by classified
/// activities going through the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTransition {
    /// Activity the transition refers to.
    pub activity: ActivityType,
    /// Enter or exit.
    pub kind: PlatformTransitionKind,
    /// When the platform reported it.
    pub timestamp: DateTime<Utc>,
}
