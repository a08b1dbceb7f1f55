use glam::Vec4;

use crate::input::{ButtonState, InputHandlers};
use crate::math::Ray;
use crate::runtime::DeviceIndex;

/// Which source a target accepts lasers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaserOwner {
    /// Any source may aim at the target.
    #[default]
    Unowned,
    /// Only this device may aim at the target.
    Device(DeviceIndex),
}

impl LaserOwner {
    /// Whether `device` may aim at a target with this owner.
    #[must_use]
    pub fn allows(self, device: DeviceIndex) -> bool {
        match self {
            Self::Unowned => true,
            Self::Device(owner) => owner == device,
        }
    }
}

impl From<DeviceIndex> for LaserOwner {
    /// An invalid index means "whoever".
    fn from(device: DeviceIndex) -> Self {
        if device.is_valid() {
            Self::Device(device)
        } else {
            Self::Unowned
        }
    }
}

/// Beam colors a target wants for misses and hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserPalette {
    /// Color while the beam misses the target.
    pub miss: Vec4,
    /// Color while the beam hits the target.
    pub hit: Vec4,
}

/// A successful laser hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// An interactive surface a laser can aim at and click.
pub trait LaserTarget {
    /// Current owner.
    fn owner(&self) -> LaserOwner;

    /// Whether `device` may aim at this target.
    fn is_laser_allowed(&self, device: DeviceIndex) -> bool {
        self.owner().allows(device)
    }

    /// Miss/hit beam colors.
    fn laser_palette(&self) -> LaserPalette;

    /// Test `ray` from `source` against the target.
    ///
    /// `color` is the color the target should use to mark the hit. A
    /// target that cannot be hit yet (not sized, not shown) returns
    /// `None`.
    fn laser_shoot(
        &mut self,
        source: DeviceIndex,
        ray: &Ray,
        color: Vec4,
        handlers: &mut dyn InputHandlers,
    ) -> Option<LaserHit>;

    /// Relay a click of the laser button pressed on `source`.
    ///
    /// Returns whether the click reached the host. A release is relayed
    /// only to close a press from the same source.
    fn laser_click(
        &mut self,
        source: DeviceIndex,
        state: ButtonState,
        handlers: &mut dyn InputHandlers,
    ) -> bool;

    /// Release a press that is still held, before the target stops
    /// taking lasers.
    fn laser_cancel(&mut self, handlers: &mut dyn InputHandlers);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unowned_allows_everyone() {
        assert!(LaserOwner::Unowned.allows(DeviceIndex(1)));
        assert!(LaserOwner::Unowned.allows(DeviceIndex::INVALID));
    }

    #[test]
    fn owned_allows_only_owner() {
        let owner = LaserOwner::Device(DeviceIndex(4));
        assert!(owner.allows(DeviceIndex(4)));
        assert!(!owner.allows(DeviceIndex(5)));
    }

    #[test]
    fn invalid_device_converts_to_unowned() {
        assert_eq!(LaserOwner::from(DeviceIndex::INVALID), LaserOwner::Unowned);
        assert_eq!(
            LaserOwner::from(DeviceIndex(2)),
            LaserOwner::Device(DeviceIndex(2))
        );
    }
}
