//! Head-locked GUI panel.
//!
//! The host renders its 2D GUI into an offscreen texture; the [`Menu`]
//! places that texture in front of the viewer when it is shown, turns
//! laser hits into pixel coordinates and relays them to the host as
//! mouse motion and clicks.

mod hotspot;
mod intersect;

use glam::{Mat4, Vec2, Vec3, Vec4};

pub use hotspot::Hotspot;
pub use intersect::{
    intersect_panel, PanelFrame, PanelHit, COS_ANGLE_THRESHOLD,
};

use crate::input::{ButtonState, InputHandlers, MouseButton};
use crate::laser::{LaserHit, LaserOwner, LaserPalette, LaserTarget};
use crate::math::Ray;
use crate::options::GuiOptions;
use crate::runtime::DeviceIndex;

/// World-space corners of the panel, counter-clockwise from the
/// bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuQuad {
    /// Bottom-left, bottom-right, top-right, top-left.
    pub corners: [Vec3; 4],
}

impl MenuQuad {
    /// Texture coordinates matching [`corners`](Self::corners).
    pub const UVS: [Vec2; 4] = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
}

/// A laser press relayed to the host and not yet released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    device: DeviceIndex,
    x: i32,
    y: i32,
}

/// The GUI panel as a laser target.
#[derive(Debug, Clone)]
pub struct Menu {
    options: GuiOptions,
    width: u32,
    height: u32,
    visible: bool,
    matrix: Mat4,
    owner: LaserOwner,
    hover_device: DeviceIndex,
    hotspot: Hotspot,
    press: Option<Press>,
    palette: LaserPalette,
}

impl Menu {
    /// A hidden menu sized from `options`.
    #[must_use]
    pub fn new(options: &GuiOptions, palette: LaserPalette) -> Self {
        Self {
            options: options.clone(),
            width: options.width,
            height: options.height,
            visible: false,
            matrix: Mat4::IDENTITY,
            owner: LaserOwner::Unowned,
            hover_device: DeviceIndex::INVALID,
            hotspot: Hotspot::new(options.hotspot_radius, palette.hit),
            press: None,
            palette,
        }
    }

    /// Take new placement, appearance and palette settings. The pixel size
    /// set by [`buffer_start`](Self::buffer_start) is kept.
    pub fn apply_options(
        &mut self,
        options: &GuiOptions,
        palette: LaserPalette,
    ) {
        self.options = options.clone();
        self.palette = palette;
        self.hotspot.set_radius(options.hotspot_radius);
    }

    /// Announce the size of the texture the host is about to draw the GUI
    /// into.
    pub fn buffer_start(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            log::debug!(
                "menu buffer resized {}x{} -> {width}x{height}",
                self.width,
                self.height
            );
            self.width = width;
            self.height = height;
            self.hotspot.park();
        }
    }

    /// Pixel size of the panel texture.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Show the panel in front of `head` (head-to-world), accepting lasers
    /// from `owner` only.
    pub fn show(&mut self, head: Mat4, owner: LaserOwner) {
        self.matrix = head;
        self.visible = true;
        self.owner = owner;
        self.hover_device = DeviceIndex::INVALID;
        self.press = None;
        self.hotspot.park();
    }

    /// Hide the panel and release its owner. A held press is dropped, so
    /// call [`laser_cancel`](LaserTarget::laser_cancel) first to close it.
    pub fn hide(&mut self) {
        self.visible = false;
        self.owner = LaserOwner::Unowned;
        self.hover_device = DeviceIndex::INVALID;
        self.press = None;
        self.hotspot.park();
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Panel orientation captured on [`show`](Self::show).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Half extents of the panel in world units.
    #[must_use]
    pub fn world_half_extents(&self) -> Vec2 {
        if self.width == 0 {
            return Vec2::ZERO;
        }
        let half_width = self.options.distance * self.options.fov_tangent();
        let half_height = half_width * self.height as f32 / self.width as f32;
        Vec2::new(half_width, half_height)
    }

    /// Geometry used for ray tests.
    #[must_use]
    pub fn frame(&self) -> PanelFrame {
        let half = self.world_half_extents();
        PanelFrame {
            matrix: self.matrix,
            distance: self.options.distance,
            half_width: half.x,
            half_height: half.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Intersect a ray with the shown panel.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<PanelHit> {
        if !self.visible {
            return None;
        }
        self.frame().intersect(ray)
    }

    /// The laser marker.
    #[must_use]
    pub fn hotspot(&self) -> &Hotspot {
        &self.hotspot
    }

    /// Device whose laser is on the panel, or
    /// [`DeviceIndex::INVALID`].
    #[must_use]
    pub fn hover_device(&self) -> DeviceIndex {
        self.hover_device
    }

    /// Whether any laser is on the panel.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover_device.is_valid()
    }

    /// World-space corners for the draw pass.
    #[must_use]
    pub fn quad(&self) -> MenuQuad {
        let half = self.world_half_extents();
        let right = self.matrix.x_axis.truncate() * half.x;
        let up = self.matrix.y_axis.truncate() * half.y;
        let center = self.matrix.w_axis.truncate()
            - self.matrix.z_axis.truncate() * self.options.distance;
        MenuQuad {
            corners: [
                center - right - up,
                center + right - up,
                center + right + up,
                center - right + up,
            ],
        }
    }

    /// Color the panel texture is cleared to before the GUI draws.
    #[must_use]
    pub fn clear_color(&self) -> Vec4 {
        let c = self.options.scene_color;
        Vec4::new(c, c, c, self.options.scene_alpha)
    }

    /// Opacity of the panel. Responsive panels turn opaque while hovered.
    #[must_use]
    pub fn panel_alpha(&self) -> f32 {
        if self.options.use_alpha.is_active(!self.is_hovered()) {
            self.options.alpha
        } else {
            1.0
        }
    }

    /// Backdrop color, if a backdrop is drawn this frame.
    #[must_use]
    pub fn backdrop_color(&self) -> Option<Vec4> {
        self.options.use_backdrop.is_active(self.is_hovered()).then(|| {
            let c = self.options.back_color;
            Vec4::new(c, c, c, self.options.back_alpha)
        })
    }

    /// Whether the panel is drawn over the scene this frame.
    #[must_use]
    pub fn is_overlay(&self) -> bool {
        self.options.overlay.is_active(self.is_hovered())
    }
}

impl LaserTarget for Menu {
    fn owner(&self) -> LaserOwner {
        self.owner
    }

    fn laser_palette(&self) -> LaserPalette {
        self.palette
    }

    fn laser_shoot(
        &mut self,
        source: DeviceIndex,
        ray: &Ray,
        color: Vec4,
        handlers: &mut dyn InputHandlers,
    ) -> Option<LaserHit> {
        let Some(hit) = self.intersect_ray(ray) else {
            if self.hover_device == source {
                self.hover_device = DeviceIndex::INVALID;
                self.hotspot.park();
            }
            return None;
        };
        self.hotspot.move_to(hit.x, hit.y);
        self.hotspot.set_color(color);
        self.hover_device = source;
        if let Some(press) = &mut self.press {
            if press.device == source {
                press.x = hit.x;
                press.y = hit.y;
            }
        }
        handlers.motion(hit.x, hit.y);
        Some(LaserHit {
            distance: hit.distance,
        })
    }

    fn laser_click(
        &mut self,
        source: DeviceIndex,
        state: ButtonState,
        handlers: &mut dyn InputHandlers,
    ) -> bool {
        let (x, y) = match state {
            ButtonState::Down => {
                if self.press.is_some()
                    || self.hover_device != source
                    || !self.hotspot.is_on_surface()
                {
                    return false;
                }
                let (x, y) = self.hotspot.position();
                self.press = Some(Press { device: source, x, y });
                (x, y)
            }
            // Released where the laser last touched the panel.
            ButtonState::Up => match self.press {
                Some(press) if press.device == source => {
                    self.press = None;
                    (press.x, press.y)
                }
                _ => return false,
            },
        };
        log::debug!("menu click {state:?} from {source} at ({x}, {y})");
        handlers.mouse(MouseButton::Left, state, x, y);
        true
    }

    fn laser_cancel(&mut self, handlers: &mut dyn InputHandlers) {
        if let Some(press) = self.press.take() {
            log::debug!("menu press from {} cancelled", press.device);
            handlers.mouse(
                MouseButton::Left,
                ButtonState::Up,
                press.x,
                press.y,
            );
        }
    }
}
