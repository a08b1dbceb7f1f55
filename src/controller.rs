//! Tracked hand controllers.

use glam::{Mat4, Vec4};

use crate::laser::{Laser, LaserSource};
use crate::math::{Pose, Ray};
use crate::options::LaserOptions;
use crate::runtime::{DeviceIndex, Hand};

/// One hand controller: pose, visibility, grip state and its laser.
#[derive(Debug, Clone)]
pub struct Controller {
    device: DeviceIndex,
    hand: Hand,
    pose: Pose,
    world_to_controller: Mat4,
    shown: bool,
    grip_pressed: bool,
    hints_index: u32,
    render_model: Option<String>,
    laser: Laser,
}

impl Controller {
    /// A controller at the origin with its laser hidden.
    #[must_use]
    pub fn new(
        device: DeviceIndex,
        hand: Hand,
        options: &LaserOptions,
    ) -> Self {
        Self {
            device,
            hand,
            pose: Pose::IDENTITY,
            world_to_controller: Mat4::IDENTITY,
            shown: true,
            grip_pressed: false,
            hints_index: 0,
            render_model: None,
            laser: Laser::new(options.max_length, Vec4::from(options.color)),
        }
    }

    /// Hand this controller is assigned to.
    #[must_use]
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Controller-to-world pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Update the pose and its cached inverse.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.world_to_controller = pose.inverse_rigid();
    }

    /// World-to-controller matrix.
    #[must_use]
    pub fn world_to_controller(&self) -> Mat4 {
        self.world_to_controller
    }

    /// Show or hide the controller model.
    pub fn show(&mut self, shown: bool) {
        self.shown = shown;
    }

    /// Whether the controller model is drawn.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether the grip button is held.
    #[must_use]
    pub fn is_grip_pressed(&self) -> bool {
        self.grip_pressed
    }

    /// Record the grip button state.
    pub fn press_grip(&mut self, pressed: bool) {
        self.grip_pressed = pressed;
    }

    /// Sprite shown on the button-hints quad.
    #[must_use]
    pub fn hints_index(&self) -> u32 {
        self.hints_index
    }

    /// Select the sprite shown on the button-hints quad.
    pub fn set_hints_index(&mut self, index: u32) {
        self.hints_index = index;
    }

    /// Render model name reported by the runtime, if known.
    #[must_use]
    pub fn render_model_name(&self) -> Option<&str> {
        self.render_model.as_deref()
    }

    /// Remember the render model name for the draw pass.
    pub fn set_render_model_name(&mut self, name: Option<String>) {
        self.render_model = name;
    }

    /// The beam state for the draw pass.
    #[must_use]
    pub fn laser(&self) -> &Laser {
        &self.laser
    }

    /// Apply new laser options without touching visibility.
    pub fn apply_laser_options(&mut self, options: &LaserOptions) {
        self.laser.set_max_length(options.max_length);
    }
}

impl LaserSource for Controller {
    fn device_index(&self) -> DeviceIndex {
        self.device
    }

    fn laser_show(&mut self, visible: bool) {
        if visible {
            self.laser.show();
        } else {
            self.laser.hide();
        }
    }

    fn is_laser_visible(&self) -> bool {
        self.laser.is_visible()
    }

    fn laser_ray(&self) -> Option<Ray> {
        self.laser.is_visible().then(|| self.pose.laser_ray())
    }

    fn max_laser_length(&self) -> f32 {
        self.laser.max_length()
    }

    fn set_laser_length(&mut self, length: f32) {
        self.laser.set_length(length);
    }

    fn set_laser_color(&mut self, color: Vec4) {
        self.laser.set_color(color);
    }
}
