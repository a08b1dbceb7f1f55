//! Controller lasers and the targets they point at.
//!
//! A [`LaserSource`] (a tracked controller) emits a ray; a [`LaserTarget`]
//! (the GUI menu or the scene picker) decides whether the source may aim
//! at it and where the ray lands. [`arbitrate`] runs the per-frame pass
//! that connects the two.

mod arbiter;
mod source;
mod target;

use glam::Vec4;

pub use arbiter::{arbitrate, ArbitrationReport, ClickTransition};
pub use source::LaserSource;
pub use target::{LaserHit, LaserOwner, LaserPalette, LaserTarget};

/// Default laser length when nothing is hit, in world units.
pub const LASER_MAX_LENGTH: f32 = 100.0;

/// Default laser color (translucent cyan).
pub const LASER_DEFAULT_COLOR: Vec4 = Vec4::new(0.0, 1.0, 1.0, 0.25);

/// Visual state of one laser beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    visible: bool,
    length: f32,
    max_length: f32,
    color: Vec4,
}

impl Default for Laser {
    fn default() -> Self {
        Self::new(LASER_MAX_LENGTH, LASER_DEFAULT_COLOR)
    }
}

impl Laser {
    /// A hidden laser at full length.
    #[must_use]
    pub fn new(max_length: f32, color: Vec4) -> Self {
        let max_length = max_length.max(0.0);
        Self {
            visible: false,
            length: max_length,
            max_length,
            color,
        }
    }

    /// Make the beam visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the beam.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the beam is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current beam length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Length used when nothing is hit.
    #[must_use]
    pub fn max_length(&self) -> f32 {
        self.max_length
    }

    /// Set the beam length, clamped to `[0, max_length]`.
    pub fn set_length(&mut self, length: f32) {
        self.length = length.clamp(0.0, self.max_length);
    }

    /// Change the miss length; the current length is clamped to it.
    pub fn set_max_length(&mut self, max_length: f32) {
        self.max_length = max_length.max(0.0);
        self.length = self.length.min(self.max_length);
    }

    /// Current RGBA color.
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Set the RGBA color.
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_laser_is_hidden_at_full_length() {
        let laser = Laser::default();
        assert!(!laser.is_visible());
        assert_eq!(laser.length(), LASER_MAX_LENGTH);
        assert_eq!(laser.color(), LASER_DEFAULT_COLOR);
    }

    #[test]
    fn length_is_clamped() {
        let mut laser = Laser::new(10.0, Vec4::ONE);
        laser.set_length(25.0);
        assert_eq!(laser.length(), 10.0);
        laser.set_length(-1.0);
        assert_eq!(laser.length(), 0.0);
        laser.set_length(8.0);
        laser.set_max_length(5.0);
        assert_eq!(laser.length(), 5.0);
    }
}
