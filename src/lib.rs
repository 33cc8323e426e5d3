//! # Lenskit
//!
//! Translation of cross-platform camera settings into the values native
//! capture frameworks expect, and back.
//!
//! ## Features
//!
//! - `capability`: flash, pixel format, orientation, focus, exposure and
//!   multi-lens switching translation for AVFoundation.
//! - `serde`: serialize the cross-platform vocabulary with its boundary names.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! lenskit = { version = "0.1", features = ["capability"] }
//! ```
//!
//! ```rust
//! # #[cfg(feature = "capability")]
//! # {
//! use lenskit::capability::convert;
//! use lenskit::capability::platform::FlashMode;
//! use lenskit::capability::sys::apple::AVCaptureFlashMode;
//!
//! assert_eq!(convert::av_flash_mode(FlashMode::Always), AVCaptureFlashMode::On);
//! # }
//! ```

#[cfg(feature = "capability")]
pub use lenskit_capability as capability;
