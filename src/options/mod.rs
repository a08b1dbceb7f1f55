//! Centralized VR options with TOML preset support.
//!
//! GUI panel placement/appearance, laser colors and pad bindings are
//! consolidated here. Options serialize to/from TOML so a user's VR setup
//! can be saved and restored.

mod gui;
mod laser;
mod pads;

use std::path::Path;

pub use gui::{GuiMode, GuiOptions, GuiPreset};
pub use laser::LaserOptions;
pub use pads::PadBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VrError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gui]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct VrOptions {
    /// Head-locked GUI panel.
    pub gui: GuiOptions,
    /// Laser length and palettes.
    pub laser: LaserOptions,
    /// Pad direction bindings.
    #[schemars(skip)]
    pub pads: PadBindings,
}

impl VrOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(VrOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VrError> {
        let content = std::fs::read_to_string(path).map_err(VrError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VrError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VrError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VrError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VrError::Io)?;
        }
        std::fs::write(path, content).map_err(VrError::Io)
    }

    /// Saved VR setups (TOML file stems) in a directory, sorted.
    #[must_use]
    pub fn list_saved(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        names.sort();
        names
    }

    /// Names of the built-in GUI appearance presets, in menu order.
    #[must_use]
    pub fn gui_presets() -> Vec<&'static str> {
        GuiPreset::ALL.into_iter().map(GuiPreset::name).collect()
    }
}
