use glam::Vec4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::laser::{LaserPalette, LASER_MAX_LENGTH};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Laser", inline)]
#[serde(default)]
/// Laser beam length and colors.
pub struct LaserOptions {
    /// Beam length when nothing is hit.
    #[schemars(title = "Max Length", range(min = 1.0, max = 1000.0))]
    pub max_length: f32,
    /// Beam color before any target has recolored it (RGBA).
    #[schemars(skip)]
    pub color: [f32; 4],
    /// Beam color while missing the menu panel (RGBA).
    #[schemars(skip)]
    pub menu_miss: [f32; 4],
    /// Beam color while hitting the menu panel (RGBA).
    #[schemars(skip)]
    pub menu_hit: [f32; 4],
    /// Beam color while picking in the scene without a hit (RGBA).
    #[schemars(skip)]
    pub picker_miss: [f32; 4],
    /// Beam color for a scene pick hit (RGBA).
    #[schemars(skip)]
    pub picker_hit: [f32; 4],
}

impl Default for LaserOptions {
    fn default() -> Self {
        Self {
            max_length: LASER_MAX_LENGTH,
            color: [0.0, 1.0, 1.0, 0.25],
            menu_miss: [0.0, 1.0, 1.0, 0.25],
            menu_hit: [0.0, 1.0, 1.0, 1.0],
            picker_miss: [1.0, 1.0, 0.0, 0.5],
            picker_hit: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

impl LaserOptions {
    /// Palette used by the menu panel.
    #[must_use]
    pub fn menu_palette(&self) -> LaserPalette {
        LaserPalette {
            miss: Vec4::from(self.menu_miss),
            hit: Vec4::from(self.menu_hit),
        }
    }

    /// Palette used by the scene picker.
    #[must_use]
    pub fn picker_palette(&self) -> LaserPalette {
        LaserPalette {
            miss: Vec4::from(self.picker_miss),
            hit: Vec4::from(self.picker_hit),
        }
    }
}
