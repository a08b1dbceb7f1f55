//! Laser picking in the 3D scene.
//!
//! While the menu is hidden, pressing the laser button turns the scene
//! itself into the laser target. The picker records a view looking down
//! the laser for the host's picking pass and relays the button as a mouse
//! click at a fixed point of the host viewport.

use glam::{Mat4, Vec3, Vec4};

use crate::input::{ButtonState, InputHandlers, MouseButton};
use crate::laser::{LaserHit, LaserOwner, LaserPalette, LaserTarget};
use crate::math::Ray;
use crate::runtime::DeviceIndex;

/// Scene picking target.
#[derive(Debug, Clone)]
pub struct ScenePicker {
    active: bool,
    owner: LaserOwner,
    pressed: Option<DeviceIndex>,
    x: i32,
    y: i32,
    matrix: Mat4,
    palette: LaserPalette,
}

impl ScenePicker {
    /// An inactive picker.
    #[must_use]
    pub fn new(palette: LaserPalette) -> Self {
        Self {
            active: false,
            owner: LaserOwner::Unowned,
            pressed: None,
            x: 0,
            y: 0,
            matrix: Mat4::IDENTITY,
            palette,
        }
    }

    /// Start picking for `owner`, clicking at `(x, y)` in host viewport
    /// pixels.
    pub fn activate(&mut self, owner: LaserOwner, x: i32, y: i32) {
        log::debug!("picker activated by {owner:?} at ({x}, {y})");
        self.active = true;
        self.owner = owner;
        self.x = x;
        self.y = y;
    }

    /// Stop picking and release the owner. A held press is dropped, so
    /// call [`laser_cancel`](LaserTarget::laser_cancel) first to close it.
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("picker deactivated");
        }
        self.active = false;
        self.owner = LaserOwner::Unowned;
        self.pressed = None;
    }

    /// Whether the picker is the current laser target.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// World-to-view matrix looking along the last laser shot at the
    /// picker.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Viewport pixel the click is relayed at.
    #[must_use]
    pub fn click_point(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Replace the miss/hit colors.
    pub fn set_palette(&mut self, palette: LaserPalette) {
        self.palette = palette;
    }
}

impl LaserTarget for ScenePicker {
    fn owner(&self) -> LaserOwner {
        self.owner
    }

    fn laser_palette(&self) -> LaserPalette {
        self.palette
    }

    fn laser_shoot(
        &mut self,
        _source: DeviceIndex,
        ray: &Ray,
        _color: Vec4,
        _handlers: &mut dyn InputHandlers,
    ) -> Option<LaserHit> {
        let direction = ray.direction.normalize_or_zero();
        if direction != Vec3::ZERO {
            let up = if direction.y.abs() > 0.999 {
                Vec3::Z
            } else {
                Vec3::Y
            };
            self.matrix = Mat4::look_to_rh(ray.origin, direction, up);
        }
        // The host's picking pass decides what is under the laser.
        None
    }

    fn laser_click(
        &mut self,
        source: DeviceIndex,
        state: ButtonState,
        handlers: &mut dyn InputHandlers,
    ) -> bool {
        if !self.active {
            return false;
        }
        match state {
            ButtonState::Down => {
                if self.pressed.is_some() || !self.owner.allows(source) {
                    return false;
                }
                self.pressed = Some(source);
            }
            ButtonState::Up => {
                if self.pressed != Some(source) {
                    return false;
                }
                self.pressed = None;
            }
        }
        handlers.mouse(MouseButton::Left, state, self.x, self.y);
        true
    }

    fn laser_cancel(&mut self, handlers: &mut dyn InputHandlers) {
        if let Some(device) = self.pressed.take() {
            log::debug!("pick from {device} cancelled");
            handlers.mouse(MouseButton::Left, ButtonState::Up, self.x, self.y);
        }
    }
}
