//! Translation between the cross-platform vocabulary and AVFoundation values.
//!
//! Every function here is a pure, total case table, and every direction is
//! also available as a `From` impl. Raw framework values are validated by the
//! native types in [`crate::sys::apple`] before they reach this module.

use crate::platform::{
    DeviceOrientation, ExposureMode, FlashMode, FocusMode, PixelFormat, SwitchingBehavior,
    SwitchingCondition, SwitchingConditions,
};
use crate::sys::apple::{
    AVCaptureExposureMode, AVCaptureFlashMode, AVCaptureFocusMode, AVCaptureVideoOrientation,
    AVPrimaryConstituentDeviceSwitchingBehavior, AVRestrictedSwitchingBehaviorConditions,
    CVPixelFormatType, FourCharCode, UIDeviceOrientation,
};

/// Orientation reported for native attitudes with no cross-platform
/// counterpart: treat them as "no rotation".
pub const UNREPRESENTABLE_ORIENTATION: DeviceOrientation = DeviceOrientation::PortraitUp;

/// Native flash mode for a requested flash mode.
#[must_use]
pub const fn av_flash_mode(mode: FlashMode) -> AVCaptureFlashMode {
    match mode {
        FlashMode::Off => AVCaptureFlashMode::Off,
        FlashMode::Auto => AVCaptureFlashMode::Auto,
        FlashMode::Always => AVCaptureFlashMode::On,
    }
}

/// Cross-platform flash mode for a native one.
#[must_use]
pub const fn flash_mode(mode: AVCaptureFlashMode) -> FlashMode {
    match mode {
        AVCaptureFlashMode::Off => FlashMode::Off,
        AVCaptureFlashMode::Auto => FlashMode::Auto,
        AVCaptureFlashMode::On => FlashMode::Always,
    }
}

/// CoreVideo pixel format for a streaming format.
#[must_use]
pub const fn cv_pixel_format(format: PixelFormat) -> CVPixelFormatType {
    match format {
        PixelFormat::Bgra8888 => CVPixelFormatType::Bgra32,
        PixelFormat::Yuv420 => CVPixelFormatType::YCbCr420BiPlanarVideoRange,
    }
}

/// CoreVideo four-char code for a streaming format.
#[must_use]
pub const fn pixel_format_code(format: PixelFormat) -> FourCharCode {
    cv_pixel_format(format).code()
}

/// Streaming format for a CoreVideo pixel format.
#[must_use]
pub const fn pixel_format(format: CVPixelFormatType) -> PixelFormat {
    match format {
        CVPixelFormatType::Bgra32 => PixelFormat::Bgra8888,
        CVPixelFormatType::YCbCr420BiPlanarVideoRange => PixelFormat::Yuv420,
    }
}

/// Native device orientation for a cross-platform orientation.
///
/// Never yields `Unknown`, `FaceUp` or `FaceDown`.
#[must_use]
pub const fn ui_device_orientation(orientation: DeviceOrientation) -> UIDeviceOrientation {
    match orientation {
        DeviceOrientation::PortraitUp => UIDeviceOrientation::Portrait,
        DeviceOrientation::PortraitDown => UIDeviceOrientation::PortraitUpsideDown,
        DeviceOrientation::LandscapeLeft => UIDeviceOrientation::LandscapeLeft,
        DeviceOrientation::LandscapeRight => UIDeviceOrientation::LandscapeRight,
    }
}

/// Cross-platform orientation for a native device orientation.
///
/// `Unknown`, `FaceUp` and `FaceDown` have no cross-platform equivalent and
/// resolve to [`UNREPRESENTABLE_ORIENTATION`].
#[must_use]
pub const fn device_orientation(orientation: UIDeviceOrientation) -> DeviceOrientation {
    match orientation {
        UIDeviceOrientation::Portrait => DeviceOrientation::PortraitUp,
        UIDeviceOrientation::PortraitUpsideDown => DeviceOrientation::PortraitDown,
        UIDeviceOrientation::LandscapeLeft => DeviceOrientation::LandscapeLeft,
        UIDeviceOrientation::LandscapeRight => DeviceOrientation::LandscapeRight,
        UIDeviceOrientation::Unknown
        | UIDeviceOrientation::FaceUp
        | UIDeviceOrientation::FaceDown => UNREPRESENTABLE_ORIENTATION,
    }
}

/// Cross-platform orientation for a raw `UIDeviceOrientation` value.
///
/// Raw values outside the enumeration are treated like `Unknown`.
#[must_use]
pub fn device_orientation_from_raw(raw: i64) -> DeviceOrientation {
    UIDeviceOrientation::try_from(raw).map_or(UNREPRESENTABLE_ORIENTATION, device_orientation)
}

/// Capture connection orientation for a cross-platform device orientation.
///
/// The connection's landscape directions are named after the home button
/// rather than the top of the device, so the two landscape cases swap.
#[must_use]
pub const fn av_video_orientation(orientation: DeviceOrientation) -> AVCaptureVideoOrientation {
    match orientation {
        DeviceOrientation::PortraitUp => AVCaptureVideoOrientation::Portrait,
        DeviceOrientation::PortraitDown => AVCaptureVideoOrientation::PortraitUpsideDown,
        DeviceOrientation::LandscapeLeft => AVCaptureVideoOrientation::LandscapeRight,
        DeviceOrientation::LandscapeRight => AVCaptureVideoOrientation::LandscapeLeft,
    }
}

/// Cross-platform device orientation for a capture connection orientation.
#[must_use]
pub const fn device_orientation_for_video(
    orientation: AVCaptureVideoOrientation,
) -> DeviceOrientation {
    match orientation {
        AVCaptureVideoOrientation::Portrait => DeviceOrientation::PortraitUp,
        AVCaptureVideoOrientation::PortraitUpsideDown => DeviceOrientation::PortraitDown,
        AVCaptureVideoOrientation::LandscapeRight => DeviceOrientation::LandscapeLeft,
        AVCaptureVideoOrientation::LandscapeLeft => DeviceOrientation::LandscapeRight,
    }
}

/// Capture connection orientation for a native device orientation.
///
/// Flat and unknown attitudes produce `Portrait`.
#[must_use]
pub const fn video_orientation_for_device(
    orientation: UIDeviceOrientation,
) -> AVCaptureVideoOrientation {
    av_video_orientation(device_orientation(orientation))
}

/// Native focus mode for a cross-platform focus mode.
#[must_use]
pub const fn av_focus_mode(mode: FocusMode) -> AVCaptureFocusMode {
    match mode {
        FocusMode::Auto => AVCaptureFocusMode::ContinuousAutoFocus,
        // Focus once on the current subject, after which the device locks.
        FocusMode::Locked => AVCaptureFocusMode::AutoFocus,
    }
}

/// Cross-platform focus mode for a native one.
#[must_use]
pub const fn focus_mode(mode: AVCaptureFocusMode) -> FocusMode {
    match mode {
        AVCaptureFocusMode::ContinuousAutoFocus => FocusMode::Auto,
        AVCaptureFocusMode::AutoFocus | AVCaptureFocusMode::Locked => FocusMode::Locked,
    }
}

/// Native exposure mode for a cross-platform exposure mode.
#[must_use]
pub const fn av_exposure_mode(mode: ExposureMode) -> AVCaptureExposureMode {
    match mode {
        ExposureMode::Auto => AVCaptureExposureMode::ContinuousAutoExposure,
        ExposureMode::Locked => AVCaptureExposureMode::AutoExpose,
    }
}

/// Cross-platform exposure mode for a native one.
///
/// Manual (`Custom`) exposure does not drift, so it reads back as locked.
#[must_use]
pub const fn exposure_mode(mode: AVCaptureExposureMode) -> ExposureMode {
    match mode {
        AVCaptureExposureMode::ContinuousAutoExposure => ExposureMode::Auto,
        AVCaptureExposureMode::AutoExpose
        | AVCaptureExposureMode::Locked
        | AVCaptureExposureMode::Custom => ExposureMode::Locked,
    }
}

/// Native lens switching behavior for a cross-platform one.
#[must_use]
pub const fn av_switching_behavior(
    behavior: SwitchingBehavior,
) -> AVPrimaryConstituentDeviceSwitchingBehavior {
    match behavior {
        SwitchingBehavior::Unsupported => AVPrimaryConstituentDeviceSwitchingBehavior::Unsupported,
        SwitchingBehavior::Auto => AVPrimaryConstituentDeviceSwitchingBehavior::Auto,
        SwitchingBehavior::Restricted => AVPrimaryConstituentDeviceSwitchingBehavior::Restricted,
        SwitchingBehavior::Locked => AVPrimaryConstituentDeviceSwitchingBehavior::Locked,
    }
}

/// Cross-platform lens switching behavior for a native one.
#[must_use]
pub const fn switching_behavior(
    behavior: AVPrimaryConstituentDeviceSwitchingBehavior,
) -> SwitchingBehavior {
    match behavior {
        AVPrimaryConstituentDeviceSwitchingBehavior::Unsupported => SwitchingBehavior::Unsupported,
        AVPrimaryConstituentDeviceSwitchingBehavior::Auto => SwitchingBehavior::Auto,
        AVPrimaryConstituentDeviceSwitchingBehavior::Restricted => SwitchingBehavior::Restricted,
        AVPrimaryConstituentDeviceSwitchingBehavior::Locked => SwitchingBehavior::Locked,
    }
}

/// The native bit standing for one switching condition.
#[must_use]
pub const fn av_switching_condition(
    condition: SwitchingCondition,
) -> AVRestrictedSwitchingBehaviorConditions {
    match condition {
        SwitchingCondition::VideoZoomChanged => {
            AVRestrictedSwitchingBehaviorConditions::VIDEO_ZOOM_CHANGED
        }
        SwitchingCondition::FocusChanged => {
            AVRestrictedSwitchingBehaviorConditions::FOCUS_MODE_CHANGED
        }
        SwitchingCondition::ExposureChanged => {
            AVRestrictedSwitchingBehaviorConditions::EXPOSURE_MODE_CHANGED
        }
    }
}

/// Native condition mask for a collection of switching conditions.
///
/// Only membership matters: order and repeats are irrelevant, and no
/// conditions yield the empty mask.
#[must_use]
pub fn av_restricted_switching_conditions<I>(
    conditions: I,
) -> AVRestrictedSwitchingBehaviorConditions
where
    I: IntoIterator<Item = SwitchingCondition>,
{
    conditions.into_iter().fold(
        AVRestrictedSwitchingBehaviorConditions::empty(),
        |mask, condition| mask | av_switching_condition(condition),
    )
}

/// Switching conditions named by a native condition mask.
///
/// Bits that do not correspond to a known condition are ignored.
#[must_use]
pub fn restricted_switching_conditions(
    mask: AVRestrictedSwitchingBehaviorConditions,
) -> SwitchingConditions {
    let unknown = mask.difference(AVRestrictedSwitchingBehaviorConditions::all());
    if !unknown.is_empty() {
        log::debug!(
            "ignoring unrecognized switching condition bits {:#x}",
            unknown.bits()
        );
    }

    SwitchingCondition::ALL
        .into_iter()
        .filter(|condition| mask.contains(av_switching_condition(*condition)))
        .collect()
}

impl From<FlashMode> for AVCaptureFlashMode {
    fn from(mode: FlashMode) -> Self {
        av_flash_mode(mode)
    }
}

impl From<AVCaptureFlashMode> for FlashMode {
    fn from(mode: AVCaptureFlashMode) -> Self {
        flash_mode(mode)
    }
}

impl From<PixelFormat> for CVPixelFormatType {
    fn from(format: PixelFormat) -> Self {
        cv_pixel_format(format)
    }
}

impl From<CVPixelFormatType> for PixelFormat {
    fn from(format: CVPixelFormatType) -> Self {
        pixel_format(format)
    }
}

impl From<PixelFormat> for FourCharCode {
    fn from(format: PixelFormat) -> Self {
        pixel_format_code(format)
    }
}

impl From<DeviceOrientation> for UIDeviceOrientation {
    fn from(orientation: DeviceOrientation) -> Self {
        ui_device_orientation(orientation)
    }
}

impl From<UIDeviceOrientation> for DeviceOrientation {
    fn from(orientation: UIDeviceOrientation) -> Self {
        device_orientation(orientation)
    }
}

impl From<DeviceOrientation> for AVCaptureVideoOrientation {
    fn from(orientation: DeviceOrientation) -> Self {
        av_video_orientation(orientation)
    }
}

impl From<AVCaptureVideoOrientation> for DeviceOrientation {
    fn from(orientation: AVCaptureVideoOrientation) -> Self {
        device_orientation_for_video(orientation)
    }
}

impl From<FocusMode> for AVCaptureFocusMode {
    fn from(mode: FocusMode) -> Self {
        av_focus_mode(mode)
    }
}

impl From<AVCaptureFocusMode> for FocusMode {
    fn from(mode: AVCaptureFocusMode) -> Self {
        focus_mode(mode)
    }
}

impl From<ExposureMode> for AVCaptureExposureMode {
    fn from(mode: ExposureMode) -> Self {
        av_exposure_mode(mode)
    }
}

impl From<AVCaptureExposureMode> for ExposureMode {
    fn from(mode: AVCaptureExposureMode) -> Self {
        exposure_mode(mode)
    }
}

impl From<SwitchingBehavior> for AVPrimaryConstituentDeviceSwitchingBehavior {
    fn from(behavior: SwitchingBehavior) -> Self {
        av_switching_behavior(behavior)
    }
}

impl From<AVPrimaryConstituentDeviceSwitchingBehavior> for SwitchingBehavior {
    fn from(behavior: AVPrimaryConstituentDeviceSwitchingBehavior) -> Self {
        switching_behavior(behavior)
    }
}

impl From<SwitchingCondition> for AVRestrictedSwitchingBehaviorConditions {
    fn from(condition: SwitchingCondition) -> Self {
        av_switching_condition(condition)
    }
}

impl From<SwitchingConditions> for AVRestrictedSwitchingBehaviorConditions {
    fn from(conditions: SwitchingConditions) -> Self {
        av_restricted_switching_conditions(conditions.iter())
    }
}

impl From<AVRestrictedSwitchingBehaviorConditions> for SwitchingConditions {
    fn from(mask: AVRestrictedSwitchingBehaviorConditions) -> Self {
        restricted_switching_conditions(mask)
    }
}
