//! Digital input actions as latched from the VR runtime each frame.

use std::fmt;

use crate::runtime::{DeviceIndex, VrRuntime};

/// Action set every molvr action belongs to.
pub const ACTION_SET: &str = "/actions/pymol";

/// Logical digital actions bound to controller buttons by the runtime's
/// binding manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Show or hide the GUI menu panel.
    ToggleMenu,
    /// Laser trigger: clicks the active laser target.
    LaserClick,
    /// Left controller grip.
    LeftGrip,
    /// Right controller grip.
    RightGrip,
    /// Touchpad / thumbstick center press.
    PadCenter,
    /// Touchpad / thumbstick right.
    PadEast,
    /// Touchpad / thumbstick left.
    PadWest,
    /// Touchpad / thumbstick up.
    PadNorth,
    /// Touchpad / thumbstick down.
    PadSouth,
}

impl ActionKind {
    /// Every action, in update order. Positions match the discriminants.
    pub const ALL: [Self; 9] = [
        Self::ToggleMenu,
        Self::LaserClick,
        Self::LeftGrip,
        Self::RightGrip,
        Self::PadCenter,
        Self::PadEast,
        Self::PadWest,
        Self::PadNorth,
        Self::PadSouth,
    ];

    /// The pad directions, which map to host actions.
    pub const PADS: [Self; 5] = [
        Self::PadCenter,
        Self::PadEast,
        Self::PadWest,
        Self::PadNorth,
        Self::PadSouth,
    ];

    /// Action name as it appears in the binding manifest.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ToggleMenu => "ToggleMenu",
            Self::LaserClick => "LClick",
            Self::LeftGrip => "LGrip",
            Self::RightGrip => "RGrip",
            Self::PadCenter => "PadCenter",
            Self::PadEast => "PadEast",
            Self::PadWest => "PadWest",
            Self::PadNorth => "PadNorth",
            Self::PadSouth => "PadSouth",
        }
    }

    /// Full manifest path, e.g. `/actions/pymol/in/ToggleMenu`.
    #[must_use]
    pub fn path(self) -> String {
        format!("{ACTION_SET}/in/{}", self.name())
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of a digital action for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionData {
    /// Whether the action is bound and its device is available.
    pub active: bool,
    /// Button held.
    pub state: bool,
    /// `state` differs from the previous frame.
    pub changed: bool,
    /// Device that produced the current state.
    pub origin: DeviceIndex,
}

impl Default for ActionData {
    fn default() -> Self {
        Self::INACTIVE
    }
}

impl ActionData {
    /// An unbound / unavailable action.
    pub const INACTIVE: Self = Self {
        active: false,
        state: false,
        changed: false,
        origin: DeviceIndex::INVALID,
    };

    /// A button transition reported by `origin`.
    #[must_use]
    pub fn transition(origin: DeviceIndex, pressed: bool) -> Self {
        Self {
            active: true,
            state: pressed,
            changed: true,
            origin,
        }
    }
}

/// One runtime action and its latched state.
#[derive(Debug, Clone)]
pub struct Action {
    kind: ActionKind,
    data: ActionData,
}

impl Action {
    /// Create an action in the inactive state.
    #[must_use]
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            data: ActionData::INACTIVE,
        }
    }

    /// Which action this is.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Raw latched data.
    #[must_use]
    pub fn data(&self) -> ActionData {
        self.data
    }

    /// Button currently held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.data.active && self.data.state
    }

    /// Button went down this frame.
    #[must_use]
    pub fn was_pressed(&self) -> bool {
        self.data.active && self.data.changed && self.data.state
    }

    /// Button went up this frame.
    #[must_use]
    pub fn was_released(&self) -> bool {
        self.data.active && self.data.changed && !self.data.state
    }

    /// Button changed state this frame.
    #[must_use]
    pub fn was_pressed_or_released(&self) -> bool {
        self.data.active && self.data.changed
    }

    /// Device that produced the current state, or
    /// [`DeviceIndex::INVALID`] when the action is inactive.
    #[must_use]
    pub fn device_index(&self) -> DeviceIndex {
        if self.data.active {
            self.data.origin
        } else {
            DeviceIndex::INVALID
        }
    }

    /// Re-read this action from the runtime. Errors leave the action
    /// inactive.
    pub fn update<R: VrRuntime + ?Sized>(&mut self, runtime: &mut R) {
        self.data = match runtime.action_data(self.kind) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("action {} unavailable: {e}", self.kind);
                ActionData::INACTIVE
            }
        };
    }
}

/// Every action molvr listens to, indexed by [`ActionKind`].
#[derive(Debug, Clone)]
pub struct ActionList {
    actions: [Action; 9],
}

impl Default for ActionList {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionList {
    /// Create the list with every [`ActionKind`] inactive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: ActionKind::ALL.map(Action::new),
        }
    }

    /// Look up one action.
    #[must_use]
    pub fn get(&self, kind: ActionKind) -> &Action {
        &self.actions[kind as usize]
    }

    /// Latch this frame's state for every action.
    pub fn update<R: VrRuntime + ?Sized>(&mut self, runtime: &mut R) {
        if let Err(e) = runtime.update_action_state() {
            log::warn!("failed to update action state: {e}");
            for action in &mut self.actions {
                action.data = ActionData::INACTIVE;
            }
            return;
        }
        for action in &mut self.actions {
            action.update(runtime);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_data(data: ActionData) -> Action {
        let mut action = Action::new(ActionKind::LaserClick);
        action.data = data;
        action
    }

    #[test]
    fn press_transition() {
        let action =
            with_data(ActionData::transition(DeviceIndex(3), true));
        assert!(action.is_pressed());
        assert!(action.was_pressed());
        assert!(!action.was_released());
        assert!(action.was_pressed_or_released());
        assert_eq!(action.device_index(), DeviceIndex(3));
    }

    #[test]
    fn release_transition() {
        let action =
            with_data(ActionData::transition(DeviceIndex(3), false));
        assert!(!action.is_pressed());
        assert!(!action.was_pressed());
        assert!(action.was_released());
    }

    #[test]
    fn held_without_change_is_not_a_transition() {
        let action = with_data(ActionData {
            changed: false,
            ..ActionData::transition(DeviceIndex(1), true)
        });
        assert!(action.is_pressed());
        assert!(!action.was_pressed_or_released());
    }

    #[test]
    fn inactive_action_reports_nothing() {
        let action = with_data(ActionData {
            active: false,
            ..ActionData::transition(DeviceIndex(1), true)
        });
        assert!(!action.is_pressed());
        assert!(!action.was_pressed());
        assert_eq!(action.device_index(), DeviceIndex::INVALID);
    }

    #[test]
    fn manifest_paths() {
        assert_eq!(
            ActionKind::ToggleMenu.path(),
            "/actions/pymol/in/ToggleMenu"
        );
        assert_eq!(ActionKind::LaserClick.path(), "/actions/pymol/in/LClick");
    }

    #[test]
    fn list_lookup_returns_matching_kind() {
        let list = ActionList::new();
        for (index, kind) in ActionKind::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, index);
            assert_eq!(list.get(kind).kind(), kind);
        }
    }
}
