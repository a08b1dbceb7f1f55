use glam::Vec4;

use crate::math::Ray;
use crate::runtime::DeviceIndex;

/// Something that can emit a laser: in practice a tracked controller.
pub trait LaserSource {
    /// Runtime slot of the emitting device.
    fn device_index(&self) -> DeviceIndex;

    /// Show or hide the beam.
    fn laser_show(&mut self, visible: bool);

    /// Whether the beam is shown.
    fn is_laser_visible(&self) -> bool;

    /// World-space ray of the beam, or `None` while it is hidden.
    fn laser_ray(&self) -> Option<Ray>;

    /// Length used when the beam hits nothing.
    fn max_laser_length(&self) -> f32;

    /// Shorten the beam to end at a hit.
    fn set_laser_length(&mut self, length: f32);

    /// Recolor the beam.
    fn set_laser_color(&mut self, color: Vec4);
}
