use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::{ActionKind, HostAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Pad Bindings", inline)]
#[serde(default)]
/// Host commands bound to the controller pad directions.
///
/// A `None` entry leaves that direction unbound.
pub struct PadBindings {
    /// Pad center press.
    pub center: Option<HostAction>,
    /// Pad right.
    pub east: Option<HostAction>,
    /// Pad left.
    pub west: Option<HostAction>,
    /// Pad up.
    pub north: Option<HostAction>,
    /// Pad down.
    pub south: Option<HostAction>,
}

impl Default for PadBindings {
    fn default() -> Self {
        Self {
            center: Some(HostAction::MovieToggle),
            east: Some(HostAction::SceneNext),
            west: Some(HostAction::ScenePrev),
            north: Some(HostAction::MovieNext),
            south: Some(HostAction::MoviePrev),
        }
    }
}

impl PadBindings {
    /// Host command bound to a pad action; `None` for unbound pads and
    /// non-pad actions.
    #[must_use]
    pub fn lookup(&self, kind: ActionKind) -> Option<HostAction> {
        match kind {
            ActionKind::PadCenter => self.center,
            ActionKind::PadEast => self.east,
            ActionKind::PadWest => self.west,
            ActionKind::PadNorth => self.north,
            ActionKind::PadSouth => self.south,
            _ => None,
        }
    }
}
