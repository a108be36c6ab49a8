use crate::{CoreError, TransitionEvent};

/// WHAT: Wire codes decode to the matching signal
/// WHY: The recording side receives signals as integers
#[test]
#[allow(clippy::unwrap_used)]
fn given_known_codes_when_decoding_then_matching_signals() {
    // Given/When: Decoding both known codes
    let started = TransitionEvent::try_from(1).unwrap();
    let stopped = TransitionEvent::try_from(0).unwrap();

    // Then: Codes map onto their signals and back
    assert_eq!(started, TransitionEvent::StartedWalking);
    assert_eq!(stopped, TransitionEvent::StoppedWalking);
    assert_eq!(started.code(), 1);
    assert_eq!(stopped.code(), 0);
}

/// WHAT: Unknown wire codes are rejected
/// WHY: An unknown code is a caller defect, not something to ignore
#[test]
fn given_unknown_code_when_decoding_then_invalid_signal_error() {
    // Given/When: Decoding a code outside the known set
    let result = TransitionEvent::from_code(-1);

    // Then: InvalidSignal carries the rejected code
    assert!(matches!(
        result,
        Err(CoreError::InvalidSignal { code: -1, .. })
    ));
}
