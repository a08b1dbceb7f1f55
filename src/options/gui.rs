use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VrError;

/// Three-way switch used by the GUI transparency, backdrop and overlay
/// settings.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GuiMode {
    /// Feature disabled.
    #[default]
    Off,
    /// Feature always enabled.
    On,
    /// Feature enabled only while a laser hovers the panel.
    Responsive,
}

impl GuiMode {
    /// Whether the feature is in effect given the hover state.
    #[must_use]
    pub fn is_active(self, hovered: bool) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::Responsive => hovered,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "VR GUI", inline)]
#[serde(default)]
/// Head-locked GUI panel placement and appearance.
pub struct GuiOptions {
    /// Panel texture width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Panel texture height in pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Distance from the head to the panel, in world units.
    #[schemars(title = "Distance", range(min = 0.5, max = 5.0), extend("step" = 0.05))]
    pub distance: f32,
    /// Horizontal field of view covered by the panel, in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Gray level the panel is cleared to before the GUI draws.
    #[schemars(title = "Scene Color", range(min = 0.0, max = 1.0))]
    pub scene_color: f32,
    /// Alpha the panel is cleared to before the GUI draws.
    #[schemars(title = "Scene Alpha", range(min = 0.0, max = 1.0))]
    pub scene_alpha: f32,
    /// When the panel is drawn translucent.
    #[schemars(title = "Use Alpha")]
    pub use_alpha: GuiMode,
    /// Panel opacity while translucent.
    #[schemars(title = "Alpha", range(min = 0.0, max = 1.0))]
    pub alpha: f32,
    /// When a backdrop quad is drawn behind the panel.
    #[schemars(title = "Use Backdrop")]
    pub use_backdrop: GuiMode,
    /// Backdrop gray level.
    #[schemars(title = "Backdrop Color", range(min = 0.0, max = 1.0))]
    pub back_color: f32,
    /// Backdrop alpha.
    #[schemars(title = "Backdrop Alpha", range(min = 0.0, max = 1.0))]
    pub back_alpha: f32,
    /// When the panel is drawn over the scene ignoring depth.
    #[schemars(title = "Overlay")]
    pub overlay: GuiMode,
    /// Radius of the laser hotspot marker, in panel pixels.
    #[schemars(skip)]
    pub hotspot_radius: f32,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            distance: 1.5,
            fov: 35.0,
            scene_color: 0.2,
            scene_alpha: 0.75,
            use_alpha: GuiMode::Off,
            alpha: 1.0,
            use_backdrop: GuiMode::Off,
            back_color: 0.2,
            back_alpha: 0.75,
            overlay: GuiMode::Off,
            hotspot_radius: 8.0,
        }
    }
}

impl GuiOptions {
    /// Overwrite the appearance fields a preset controls.
    pub fn apply_preset(&mut self, preset: GuiPreset) {
        self.scene_color = 0.0;
        match preset {
            GuiPreset::OldDefaults => {
                self.use_alpha = GuiMode::Off;
                self.scene_alpha = 0.75;
                self.use_backdrop = GuiMode::Off;
                self.overlay = GuiMode::Off;
            }
            GuiPreset::SpatialOpaque => {
                self.use_alpha = GuiMode::Off;
                self.scene_alpha = 1.0;
                self.use_backdrop = GuiMode::Off;
                self.overlay = GuiMode::Off;
            }
            GuiPreset::SpatialSemiTransparent => {
                self.use_alpha = GuiMode::On;
                self.alpha = 0.85;
                self.scene_alpha = 1.0;
                self.use_backdrop = GuiMode::Off;
                self.overlay = GuiMode::Off;
            }
            GuiPreset::SpatialTransparent => {
                self.use_alpha = GuiMode::On;
                self.alpha = 0.5;
                self.scene_alpha = 0.0;
                self.use_backdrop = GuiMode::Off;
                self.overlay = GuiMode::Off;
            }
            GuiPreset::Overlay => {
                self.use_alpha = GuiMode::Off;
                self.scene_alpha = 1.0;
                self.back_color = 0.5;
                self.back_alpha = 0.85;
                self.use_backdrop = GuiMode::On;
                self.overlay = GuiMode::On;
            }
            GuiPreset::ResponsiveOverlay | GuiPreset::ResponsiveSpatial => {
                self.use_alpha = GuiMode::Responsive;
                self.alpha = 0.5;
                self.scene_alpha = 0.85;
                self.back_color = 0.125;
                self.back_alpha = 0.85;
                self.use_backdrop = GuiMode::Responsive;
                self.overlay = if preset == GuiPreset::ResponsiveOverlay {
                    GuiMode::Responsive
                } else {
                    GuiMode::Off
                };
            }
        }
    }

    /// Tangent of half the horizontal field of view.
    #[must_use]
    pub fn fov_tangent(&self) -> f32 {
        (self.fov.to_radians() * 0.5).tan()
    }
}

/// Named appearance bundles offered by the VR GUI menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiPreset {
    /// Dimmed scene behind an opaque panel.
    OldDefaults,
    /// Opaque panel placed in the scene.
    SpatialOpaque,
    /// Mostly opaque panel placed in the scene.
    SpatialSemiTransparent,
    /// Half transparent panel with a transparent background.
    SpatialTransparent,
    /// Panel drawn over the scene with a backdrop.
    Overlay,
    /// Overlay that turns opaque while pointed at.
    ResponsiveOverlay,
    /// Spatial panel that turns opaque while pointed at.
    ResponsiveSpatial,
}

impl GuiPreset {
    /// Every preset in menu order.
    pub const ALL: [Self; 7] = [
        Self::OldDefaults,
        Self::SpatialOpaque,
        Self::SpatialSemiTransparent,
        Self::SpatialTransparent,
        Self::Overlay,
        Self::ResponsiveOverlay,
        Self::ResponsiveSpatial,
    ];

    /// Menu label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OldDefaults => "Old Defaults",
            Self::SpatialOpaque => "Spatial Opaque",
            Self::SpatialSemiTransparent => "Spatial Semi-Transparent",
            Self::SpatialTransparent => "Spatial Transparent",
            Self::Overlay => "Overlay",
            Self::ResponsiveOverlay => "Responsive Overlay",
            Self::ResponsiveSpatial => "Responsive Spatial",
        }
    }
}

impl FromStr for GuiPreset {
    type Err = VrError;

    /// Parse a menu label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VrError::UnknownPreset(s.to_owned()))
    }
}
