use std::fmt;

use crate::math::Mat34;

/// Number of device slots the runtime tracks.
pub const MAX_TRACKED_DEVICES: u32 = 64;

/// Index of a tracked device as assigned by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceIndex(pub u32);

impl DeviceIndex {
    /// The headset always occupies the first slot.
    pub const HMD: Self = Self(0);
    /// Sentinel for "no device".
    pub const INVALID: Self = Self(u32::MAX);

    /// Whether this index refers to an actual device slot.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 < MAX_TRACKED_DEVICES
    }
}

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{:02}", self.0)
        } else {
            f.write_str("--")
        }
    }
}

/// Broad category of a tracked device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Empty slot.
    #[default]
    Invalid,
    /// Head-mounted display.
    Hmd,
    /// Hand-held controller.
    Controller,
    /// Puck-style tracker.
    GenericTracker,
    /// Base station / lighthouse.
    TrackingReference,
    /// Accessory that redirects the display.
    DisplayRedirect,
}

impl DeviceClass {
    /// Human-readable class name for device reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Hmd => "Head-Mounted Display",
            Self::Controller => "Controller",
            Self::GenericTracker => "Generic Tracker",
            Self::TrackingReference => "Reference Point",
            Self::DisplayRedirect => "Accessory",
        }
    }
}

/// Which hand a controller is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Left hand.
    Left,
    /// Right hand.
    Right,
}

impl Hand {
    /// Both hands, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Slot index (left = 0, right = 1).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Which eye a per-eye quantity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    /// Left eye.
    Left,
    /// Right eye.
    Right,
}

impl Eye {
    /// Both eyes, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Slot index (left = 0, right = 1).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// String properties the runtime can report per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceProperty {
    /// Hardware model number.
    ModelNumber,
    /// Hardware serial number.
    SerialNumber,
    /// Name of the render model used to draw the device.
    RenderModelName,
}

/// One device's tracking state for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedDevicePose {
    /// Slot the pose belongs to.
    pub device: DeviceIndex,
    /// Device category.
    pub class: DeviceClass,
    /// Handedness, for controllers with an assigned role.
    pub hand: Option<Hand>,
    /// Device-to-world transform in runtime layout.
    pub matrix: Mat34,
    /// Whether `matrix` holds a usable pose this frame.
    pub valid: bool,
    /// Whether the device is currently connected.
    pub connected: bool,
}
