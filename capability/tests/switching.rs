use lenskit_capability::convert::{
    av_restricted_switching_conditions, av_switching_behavior, restricted_switching_conditions,
    switching_behavior,
};
use lenskit_capability::platform::{SwitchingBehavior, SwitchingCondition, SwitchingConditions};
use lenskit_capability::sys::apple::{
    AVPrimaryConstituentDeviceSwitchingBehavior, AVRestrictedSwitchingBehaviorConditions as Av,
};

use SwitchingCondition::{ExposureChanged, FocusChanged, VideoZoomChanged};

/// Every subset of the three conditions.
fn all_subsets() -> Vec<SwitchingConditions> {
    (0..1u8 << SwitchingCondition::ALL.len())
        .map(|bits| {
            SwitchingCondition::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, condition)| condition)
                .collect()
        })
        .collect()
}

#[test]
fn switching_behavior_is_a_bijection() {
    let pairs = [
        (
            SwitchingBehavior::Unsupported,
            AVPrimaryConstituentDeviceSwitchingBehavior::Unsupported,
        ),
        (
            SwitchingBehavior::Auto,
            AVPrimaryConstituentDeviceSwitchingBehavior::Auto,
        ),
        (
            SwitchingBehavior::Restricted,
            AVPrimaryConstituentDeviceSwitchingBehavior::Restricted,
        ),
        (
            SwitchingBehavior::Locked,
            AVPrimaryConstituentDeviceSwitchingBehavior::Locked,
        ),
    ];
    for (platform, native) in pairs {
        assert_eq!(av_switching_behavior(platform), native);
        assert_eq!(switching_behavior(native), platform);
    }
}

#[test]
fn single_conditions_encode_to_their_bit() {
    assert_eq!(
        av_restricted_switching_conditions([VideoZoomChanged]),
        Av::VIDEO_ZOOM_CHANGED
    );
    assert_eq!(
        av_restricted_switching_conditions([FocusChanged]),
        Av::FOCUS_MODE_CHANGED
    );
    assert_eq!(
        av_restricted_switching_conditions([ExposureChanged]),
        Av::EXPOSURE_MODE_CHANGED
    );
}

#[test]
fn two_conditions_leave_the_third_bit_clear() {
    let mask = av_restricted_switching_conditions([VideoZoomChanged, ExposureChanged]);
    assert_eq!(mask, Av::VIDEO_ZOOM_CHANGED | Av::EXPOSURE_MODE_CHANGED);
    assert!(!mask.contains(Av::FOCUS_MODE_CHANGED));
}

#[test]
fn empty_set_is_empty_mask() {
    let mask = av_restricted_switching_conditions(std::iter::empty());
    assert_eq!(mask, Av::empty());
    assert_eq!(mask.bits(), 0);
    assert!(restricted_switching_conditions(Av::empty()).is_empty());
}

#[test]
fn full_set_is_full_mask() {
    assert_eq!(
        av_restricted_switching_conditions(SwitchingConditions::all().iter()),
        Av::all()
    );
    assert_eq!(Av::all().bits(), 0b111);
}

#[test]
fn encode_ignores_order_and_repeats() {
    assert_eq!(
        av_restricted_switching_conditions([FocusChanged, VideoZoomChanged, FocusChanged]),
        av_restricted_switching_conditions([VideoZoomChanged, FocusChanged])
    );
}

#[test]
fn every_subset_round_trips() {
    let subsets = all_subsets();
    assert_eq!(subsets.len(), 8);
    for set in subsets {
        let mask = Av::from(set);
        assert_eq!(restricted_switching_conditions(mask), set);
        assert_eq!(SwitchingConditions::from(mask), set);
    }
}

#[test]
fn encoding_distributes_over_union() {
    assert_eq!(
        av_restricted_switching_conditions([VideoZoomChanged, FocusChanged]),
        av_restricted_switching_conditions([VideoZoomChanged])
            | av_restricted_switching_conditions([FocusChanged])
    );

    for a in all_subsets() {
        for b in all_subsets() {
            assert_eq!(Av::from(a.union(b)), Av::from(a) | Av::from(b));
        }
    }
}

#[test]
fn unknown_bits_are_ignored() {
    let mask = Av::from_bits_retain(Av::FOCUS_MODE_CHANGED.bits() | (1 << 7) | (1 << 40));
    assert_eq!(
        restricted_switching_conditions(mask),
        SwitchingConditions::from([FocusChanged])
    );
    assert!(restricted_switching_conditions(Av::from_bits_retain(1 << 3)).is_empty());
}
