use super::*;

#[test]
fn arm_installs_banner_and_bumps_sequence() {
    let mut slot = AlertSlot::default();
    let seq = slot.arm(AlertKind::Success, "saved".to_owned());
    assert_eq!(seq, 1);
    assert_eq!(
        slot.current,
        Some(AlertMessage { kind: AlertKind::Success, text: "saved".to_owned() })
    );

    let seq = slot.arm(AlertKind::Error, "failed".to_owned());
    assert_eq!(seq, 2);
}

#[test]
fn dismiss_clears_only_the_matching_banner() {
    let mut slot = AlertSlot::default();
    let first = slot.arm(AlertKind::Success, "one".to_owned());
    let second = slot.arm(AlertKind::Error, "two".to_owned());

    // Stale timer from the first banner must not clear the second.
    slot.dismiss(first);
    assert_eq!(
        slot.current,
        Some(AlertMessage { kind: AlertKind::Error, text: "two".to_owned() })
    );

    slot.dismiss(second);
    assert_eq!(slot.current, None);
}
