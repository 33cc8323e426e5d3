#![cfg(feature = "serde")]

use lenskit_capability::platform::{
    DeviceOrientation, FlashMode, PixelFormat, SwitchingBehavior, SwitchingCondition,
    SwitchingConditions,
};

#[test]
fn enums_use_boundary_names() {
    assert_eq!(
        serde_json::to_string(&DeviceOrientation::PortraitUp).unwrap(),
        "\"portraitUp\""
    );
    assert_eq!(
        serde_json::to_string(&PixelFormat::Bgra8888).unwrap(),
        "\"bgra8888\""
    );
    assert_eq!(
        serde_json::to_string(&SwitchingBehavior::Restricted).unwrap(),
        "\"restricted\""
    );
    let flash: FlashMode = serde_json::from_str("\"always\"").unwrap();
    assert_eq!(flash, FlashMode::Always);
}

#[test]
fn condition_set_travels_as_list() {
    let set = SwitchingConditions::from([
        SwitchingCondition::ExposureChanged,
        SwitchingCondition::VideoZoomChanged,
    ]);
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"["videoZoomChanged","exposureChanged"]"#
    );

    let decoded: SwitchingConditions =
        serde_json::from_str(r#"["focusChanged","focusChanged"]"#).unwrap();
    assert_eq!(
        decoded,
        SwitchingConditions::from([SwitchingCondition::FocusChanged])
    );
    assert_eq!(serde_json::to_string(&SwitchingConditions::empty()).unwrap(), "[]");
}
