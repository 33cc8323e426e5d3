//! Cross-platform camera capability translation.
//!
//! Client code configures the camera with a small, stable vocabulary
//! ([`platform`]). The capture stack speaks its own enumerations and bit
//! masks ([`sys::apple`]). This crate converts between the two.
//!
//! All conversions are pure functions with no shared state, so they can be
//! called from any thread. None of them check whether a device actually
//! supports the requested mode; that is left to the capture session.
//!
//! # Usage
//!
//! ```
//! use lenskit_capability::convert;
//! use lenskit_capability::platform::{DeviceOrientation, SwitchingCondition};
//! use lenskit_capability::sys::apple::{
//!     AVRestrictedSwitchingBehaviorConditions, UIDeviceOrientation,
//! };
//!
//! let mask = convert::av_restricted_switching_conditions([
//!     SwitchingCondition::VideoZoomChanged,
//!     SwitchingCondition::FocusChanged,
//! ]);
//! assert_eq!(
//!     mask,
//!     AVRestrictedSwitchingBehaviorConditions::VIDEO_ZOOM_CHANGED
//!         | AVRestrictedSwitchingBehaviorConditions::FOCUS_MODE_CHANGED
//! );
//!
//! // Flat attitudes have no cross-platform name and read as upright.
//! assert_eq!(
//!     convert::device_orientation(UIDeviceOrientation::FaceUp),
//!     DeviceOrientation::PortraitUp
//! );
//! ```

#![warn(missing_docs)]

pub mod convert;
pub mod platform;
pub mod sys;

use sys::apple::FourCharCode;

/// Errors raised when a raw framework value does not name a native value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// A raw integer does not name a member of a native enumeration.
    #[error("unknown {kind} value: {raw}")]
    UnknownRawValue {
        /// Name of the native enumeration.
        kind: &'static str,
        /// The offending raw value.
        raw: i64,
    },
    /// A pixel format code that is not one of the supported CoreVideo formats.
    #[error("unknown pixel format: {0}")]
    UnknownPixelFormat(FourCharCode),
}
