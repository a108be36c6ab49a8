use std::fmt;

/// Activity label reported by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// Device is not moving.
    Still,
    /// User is walking.
    Walking,
    /// Any other label (vehicle, bicycle, running, unknown...).
    Other,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityType::Still => "STILL",
            ActivityType::Walking => "WALKING",
            ActivityType::Other => "UNKNOWN",
        };
        f.write_str(label)
    }
}
