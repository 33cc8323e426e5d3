//! Cross-platform camera vocabulary.
//!
//! These are the values client code sends across the plugin boundary. They are
//! deliberately smaller than the native enumerations they map onto.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flash behavior requested for still capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FlashMode {
    /// Never fire the flash.
    Off,
    /// Let the device decide based on scene lighting.
    Auto,
    /// Fire the flash for every capture.
    Always,
}

/// Pixel layout of streamed frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PixelFormat {
    /// 32-bit BGRA, one plane.
    Bgra8888,
    /// 8-bit YCbCr 4:2:0, two planes.
    Yuv420,
}

/// Physical orientation of the device, as seen by client code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DeviceOrientation {
    /// Upright portrait. Also the fallback for attitudes that have no
    /// cross-platform equivalent.
    #[default]
    PortraitUp,
    /// Portrait, upside down.
    PortraitDown,
    /// Landscape with the top of the device on the left.
    LandscapeLeft,
    /// Landscape with the top of the device on the right.
    LandscapeRight,
}

impl DeviceOrientation {
    /// All orientations, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::PortraitUp,
        Self::PortraitDown,
        Self::LandscapeLeft,
        Self::LandscapeRight,
    ];
}

/// Focus behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FocusMode {
    /// Keep refocusing as the scene changes.
    Auto,
    /// Hold the current focus.
    Locked,
}

/// Exposure behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ExposureMode {
    /// Keep adjusting exposure as the scene changes.
    Auto,
    /// Hold the current exposure.
    Locked,
}

/// How a multi-lens (virtual) device may switch between its physical lenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SwitchingBehavior {
    /// The device has a single lens, or switching is unavailable.
    Unsupported,
    /// Switch freely.
    Auto,
    /// Switch only when one of the configured conditions occurs.
    Restricted,
    /// Never switch away from the active lens.
    Locked,
}

/// An event that allows a restricted multi-lens device to switch lenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SwitchingCondition {
    /// The video zoom factor changed.
    VideoZoomChanged,
    /// The focus mode changed.
    FocusChanged,
    /// The exposure mode changed.
    ExposureChanged,
}

impl SwitchingCondition {
    /// All conditions, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::VideoZoomChanged,
        Self::FocusChanged,
        Self::ExposureChanged,
    ];

    const fn index(self) -> usize {
        match self {
            Self::VideoZoomChanged => 0,
            Self::FocusChanged => 1,
            Self::ExposureChanged => 2,
        }
    }
}

/// A set of [`SwitchingCondition`]s.
///
/// Each condition is an independent flag, so membership never depends on the
/// order conditions were added in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SwitchingConditions {
    flags: [bool; SwitchingCondition::ALL.len()],
}

impl SwitchingConditions {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            flags: [false; SwitchingCondition::ALL.len()],
        }
    }

    /// The set holding every condition.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            flags: [true; SwitchingCondition::ALL.len()],
        }
    }

    /// Add a condition. Adding one twice is a no-op.
    pub const fn insert(&mut self, condition: SwitchingCondition) {
        self.flags[condition.index()] = true;
    }

    /// Remove a condition.
    pub const fn remove(&mut self, condition: SwitchingCondition) {
        self.flags[condition.index()] = false;
    }

    /// Whether `condition` is in the set.
    #[must_use]
    pub const fn contains(&self, condition: SwitchingCondition) -> bool {
        self.flags[condition.index()]
    }

    /// Whether the set holds no condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(|set| !set)
    }

    /// Number of conditions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|set| **set).count()
    }

    /// Conditions present in either set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut flags = self.flags;
        for (flag, theirs) in flags.iter_mut().zip(other.flags) {
            *flag |= theirs;
        }
        Self { flags }
    }

    /// Iterate the conditions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = SwitchingCondition> + '_ {
        SwitchingCondition::ALL
            .into_iter()
            .filter(|condition| self.contains(*condition))
    }
}

impl FromIterator<SwitchingCondition> for SwitchingConditions {
    fn from_iter<I: IntoIterator<Item = SwitchingCondition>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<SwitchingCondition> for SwitchingConditions {
    fn extend<I: IntoIterator<Item = SwitchingCondition>>(&mut self, iter: I) {
        for condition in iter {
            self.insert(condition);
        }
    }
}

impl<const N: usize> From<[SwitchingCondition; N]> for SwitchingConditions {
    fn from(conditions: [SwitchingCondition; N]) -> Self {
        conditions.into_iter().collect()
    }
}

// On the wire the set travels as a plain list of condition names.
#[cfg(feature = "serde")]
impl Serialize for SwitchingConditions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SwitchingConditions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let conditions = Vec::<SwitchingCondition>::deserialize(deserializer)?;
        Ok(conditions.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_does_not_matter() {
        let a = SwitchingConditions::from([
            SwitchingCondition::ExposureChanged,
            SwitchingCondition::VideoZoomChanged,
        ]);
        let b = SwitchingConditions::from([
            SwitchingCondition::VideoZoomChanged,
            SwitchingCondition::ExposureChanged,
            SwitchingCondition::VideoZoomChanged,
        ]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn iterates_in_declaration_order() {
        let set = SwitchingConditions::from([
            SwitchingCondition::ExposureChanged,
            SwitchingCondition::VideoZoomChanged,
        ]);
        let listed: Vec<_> = set.iter().collect();
        assert_eq!(
            listed,
            [
                SwitchingCondition::VideoZoomChanged,
                SwitchingCondition::ExposureChanged
            ]
        );
    }

    #[test]
    fn remove_and_union() {
        let mut set = SwitchingConditions::all();
        set.remove(SwitchingCondition::FocusChanged);
        assert!(!set.contains(SwitchingCondition::FocusChanged));
        assert_eq!(set.len(), 2);

        let focus = SwitchingConditions::from([SwitchingCondition::FocusChanged]);
        assert_eq!(set.union(focus), SwitchingConditions::all());
        assert!(SwitchingConditions::empty().is_empty());
        assert_eq!(SwitchingConditions::default(), SwitchingConditions::empty());
    }
}
