use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mouse button identifier understood by the host's 2D UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button.
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Button went down.
    Down,
    /// Button went up.
    Up,
}

impl ButtonState {
    /// `Down` for `true`, `Up` for `false`.
    #[must_use]
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Host-level commands triggered from controller pads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HostAction {
    /// Advance to the next stored scene.
    SceneNext,
    /// Go back to the previous stored scene.
    ScenePrev,
    /// Start or stop movie playback.
    MovieToggle,
    /// Step the movie forward one frame.
    MovieNext,
    /// Step the movie back one frame.
    MoviePrev,
}

/// The host application's input entry points.
///
/// molvr never owns a UI event loop; it translates laser hits and
/// controller buttons into these calls and lets the host handle them as
/// if they came from its own mouse and keyboard. Pixel coordinates are
/// in the menu texture's space with the origin at the bottom-left.
pub trait InputHandlers {
    /// A mouse button changed state at `(x, y)`.
    fn mouse(
        &mut self,
        _button: MouseButton,
        _state: ButtonState,
        _x: i32,
        _y: i32,
    ) {
    }

    /// The pointer moved to `(x, y)`.
    fn motion(&mut self, _x: i32, _y: i32) {}

    /// A host command was requested.
    fn action(&mut self, _action: HostAction) {}
}

/// One call received by an [`EventRecorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// [`InputHandlers::mouse`].
    Mouse {
        /// Button that changed.
        button: MouseButton,
        /// New state.
        state: ButtonState,
        /// Horizontal pixel.
        x: i32,
        /// Vertical pixel.
        y: i32,
    },
    /// [`InputHandlers::motion`].
    Motion {
        /// Horizontal pixel.
        x: i32,
        /// Vertical pixel.
        y: i32,
    },
    /// [`InputHandlers::action`].
    Action(HostAction),
}

/// [`InputHandlers`] implementation that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<HostEvent>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recorded mouse events with the given state.
    pub fn mouse_events(
        &self,
        state: ButtonState,
    ) -> impl Iterator<Item = &HostEvent> {
        self.events.iter().filter(move |e| {
            matches!(e, HostEvent::Mouse { state: s, .. } if *s == state)
        })
    }
}

impl InputHandlers for EventRecorder {
    fn mouse(
        &mut self,
        button: MouseButton,
        state: ButtonState,
        x: i32,
        y: i32,
    ) {
        self.events.push(HostEvent::Mouse {
            button,
            state,
            x,
            y,
        });
    }

    fn motion(&mut self, x: i32, y: i32) {
        self.events.push(HostEvent::Motion { x, y });
    }

    fn action(&mut self, action: HostAction) {
        self.events.push(HostEvent::Action(action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = EventRecorder::new();
        recorder.motion(1, 2);
        recorder.mouse(MouseButton::Left, ButtonState::Down, 1, 2);
        recorder.action(HostAction::SceneNext);
        assert_eq!(
            recorder.events(),
            &[
                HostEvent::Motion { x: 1, y: 2 },
                HostEvent::Mouse {
                    button: MouseButton::Left,
                    state: ButtonState::Down,
                    x: 1,
                    y: 2,
                },
                HostEvent::Action(HostAction::SceneNext),
            ]
        );
        assert_eq!(recorder.mouse_events(ButtonState::Down).count(), 1);
        assert_eq!(recorder.mouse_events(ButtonState::Up).count(), 0);
        assert_eq!(recorder.take().len(), 3);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn default_handlers_ignore_everything() {
        struct Deaf;
        impl InputHandlers for Deaf {}
        let mut deaf = Deaf;
        deaf.motion(0, 0);
        deaf.action(HostAction::MovieToggle);
    }

    #[test]
    fn host_action_serializes_snake_case() {
        let json = serde_json::to_string(&HostAction::MovieToggle).unwrap();
        assert_eq!(json, "\"movie_toggle\"");
    }
}
