//! Input handling: runtime actions coming in, host events going out.

/// Digital runtime actions and their per-frame state machine.
pub mod action;
/// Host-facing event types and the [`InputHandlers`] dispatcher trait.
pub mod event;

pub use action::{Action, ActionData, ActionKind, ActionList, ACTION_SET};
pub use event::{
    ButtonState, EventRecorder, HostAction, HostEvent, InputHandlers,
    MouseButton,
};
