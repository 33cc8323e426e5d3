//! AVFoundation, CoreVideo and UIKit values.
//!
//! Each type carries the raw value the Apple framework uses, so a value built
//! here can be handed to the capture session as-is. Nothing in this module
//! links against the frameworks; the types exist on every target.

use crate::CapabilityError;
use std::fmt;

/// Declares a native `NSInteger` enumeration with `raw()` and `TryFrom<i64>`.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The raw framework value.
            #[must_use]
            pub const fn raw(self) -> i64 {
                match self {
                    $( Self::$variant => $raw ),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CapabilityError;

            fn try_from(raw: i64) -> Result<Self, Self::Error> {
                match raw {
                    $( $raw => Ok(Self::$variant), )+
                    _ => Err(CapabilityError::UnknownRawValue { kind: $kind, raw }),
                }
            }
        }
    };
}

native_enum! {
    /// `AVCaptureDevice.FlashMode`.
    AVCaptureFlashMode: "AVCaptureFlashMode" {
        /// `AVCaptureFlashModeOff`
        Off = 0,
        /// `AVCaptureFlashModeOn`
        On = 1,
        /// `AVCaptureFlashModeAuto`
        Auto = 2,
    }
}

native_enum! {
    /// `UIDeviceOrientation`.
    UIDeviceOrientation: "UIDeviceOrientation" {
        /// Orientation cannot be determined.
        Unknown = 0,
        /// Upright, home button at the bottom.
        Portrait = 1,
        /// Upside down, home button at the top.
        PortraitUpsideDown = 2,
        /// Upright, home button on the right.
        LandscapeLeft = 3,
        /// Upright, home button on the left.
        LandscapeRight = 4,
        /// Flat, screen facing up.
        FaceUp = 5,
        /// Flat, screen facing down.
        FaceDown = 6,
    }
}

native_enum! {
    /// `AVCaptureVideoOrientation`, the orientation of a capture connection.
    AVCaptureVideoOrientation: "AVCaptureVideoOrientation" {
        /// `AVCaptureVideoOrientationPortrait`
        Portrait = 1,
        /// `AVCaptureVideoOrientationPortraitUpsideDown`
        PortraitUpsideDown = 2,
        /// `AVCaptureVideoOrientationLandscapeRight`
        LandscapeRight = 3,
        /// `AVCaptureVideoOrientationLandscapeLeft`
        LandscapeLeft = 4,
    }
}

native_enum! {
    /// `AVCaptureDevice.FocusMode`.
    AVCaptureFocusMode: "AVCaptureFocusMode" {
        /// Focus is held at the current lens position.
        Locked = 0,
        /// Focus once, then switch to `Locked`.
        AutoFocus = 1,
        /// Refocus whenever needed.
        ContinuousAutoFocus = 2,
    }
}

native_enum! {
    /// `AVCaptureDevice.ExposureMode`.
    AVCaptureExposureMode: "AVCaptureExposureMode" {
        /// Exposure is held at its current value.
        Locked = 0,
        /// Expose once, then switch to `Locked`.
        AutoExpose = 1,
        /// Adjust exposure whenever needed.
        ContinuousAutoExposure = 2,
        /// Exposure follows manually set duration and ISO.
        Custom = 3,
    }
}

native_enum! {
    /// `AVCaptureDevice.PrimaryConstituentDeviceSwitchingBehavior`.
    AVPrimaryConstituentDeviceSwitchingBehavior:
        "AVCapturePrimaryConstituentDeviceSwitchingBehavior" {
        /// `AVCapturePrimaryConstituentDeviceSwitchingBehaviorUnsupported`
        Unsupported = 0,
        /// `AVCapturePrimaryConstituentDeviceSwitchingBehaviorAuto`
        Auto = 1,
        /// `AVCapturePrimaryConstituentDeviceSwitchingBehaviorRestricted`
        Restricted = 2,
        /// `AVCapturePrimaryConstituentDeviceSwitchingBehaviorLocked`
        Locked = 3,
    }
}

bitflags::bitflags! {
    /// `AVCaptureDevice.PrimaryConstituentDeviceRestrictedSwitchingBehaviorConditions`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AVRestrictedSwitchingBehaviorConditions: u64 {
        /// Switching is allowed when the video zoom factor changes.
        const VIDEO_ZOOM_CHANGED = 1 << 0;
        /// Switching is allowed when the focus mode changes.
        const FOCUS_MODE_CHANGED = 1 << 1;
        /// Switching is allowed when the exposure mode changes.
        const EXPOSURE_MODE_CHANGED = 1 << 2;
    }
}

/// A CoreVideo `OSType` pixel format code, four ASCII bytes packed big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCharCode(pub u32);

impl FourCharCode {
    /// `kCVPixelFormatType_32BGRA` (`'BGRA'`).
    pub const BGRA_32: Self = Self::from_bytes(*b"BGRA");
    /// `kCVPixelFormatType_420YpCbCr8BiPlanarVideoRange` (`'420v'`).
    pub const YCBCR_420_BIPLANAR_VIDEO_RANGE: Self = Self::from_bytes(*b"420v");

    /// Pack four bytes into a code.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// The four bytes of the code.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// CoreVideo pixel formats a capture output can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CVPixelFormatType {
    /// `kCVPixelFormatType_32BGRA`
    Bgra32,
    /// `kCVPixelFormatType_420YpCbCr8BiPlanarVideoRange`
    YCbCr420BiPlanarVideoRange,
}

impl CVPixelFormatType {
    /// The four-char code CoreVideo uses for this format.
    #[must_use]
    pub const fn code(self) -> FourCharCode {
        match self {
            Self::Bgra32 => FourCharCode::BGRA_32,
            Self::YCbCr420BiPlanarVideoRange => FourCharCode::YCBCR_420_BIPLANAR_VIDEO_RANGE,
        }
    }

    /// The raw `OSType` value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.code().0
    }
}

impl TryFrom<FourCharCode> for CVPixelFormatType {
    type Error = CapabilityError;

    fn try_from(code: FourCharCode) -> Result<Self, Self::Error> {
        match code {
            FourCharCode::BGRA_32 => Ok(Self::Bgra32),
            FourCharCode::YCBCR_420_BIPLANAR_VIDEO_RANGE => Ok(Self::YCbCr420BiPlanarVideoRange),
            other => Err(CapabilityError::UnknownPixelFormat(other)),
        }
    }
}

impl TryFrom<u32> for CVPixelFormatType {
    type Error = CapabilityError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::try_from(FourCharCode(raw))
    }
}

impl From<CVPixelFormatType> for FourCharCode {
    fn from(format: CVPixelFormatType) -> Self {
        format.code()
    }
}

impl fmt::Display for FourCharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            for b in bytes {
                write!(f, "{}", char::from(b))?;
            }
            Ok(())
        } else {
            write!(f, "{:#010x}", self.0)
        }
    }
}

impl fmt::Debug for FourCharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCharCode('{self}')")
    }
}
