//! Native framework vocabularies.
//!
//! Only Apple's capture stack has a translation table today. The values are
//! plain data, so the module is compiled on every target and the mapping can
//! be exercised off-device.

pub mod apple;
