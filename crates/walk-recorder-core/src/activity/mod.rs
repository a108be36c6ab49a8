mod activity_type;
mod last_activity_state;
mod observation;
mod platform_transition;

pub use {
    activity_type::ActivityType,
    last_activity_state::LastActivityState,
    observation::ActivityObservation,
    platform_transition::{PlatformTransition, PlatformTransitionKind},
};
