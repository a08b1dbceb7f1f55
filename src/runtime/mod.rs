//! The seam between molvr and a VR runtime.
//!
//! [`VrRuntime`] is the only way the rest of the crate talks to the
//! headset: pose waits, device queries, per-eye parameters and input
//! action state. Vendor bindings implement it outside this crate;
//! [`StubRuntime`] implements it in-process for tests and headless runs.

mod device;
mod stub;

pub use device::{
    DeviceClass, DeviceIndex, DeviceProperty, Eye, Hand, TrackedDevicePose,
    MAX_TRACKED_DEVICES,
};
pub use stub::StubRuntime;

use crate::error::VrError;
use crate::input::{ActionData, ActionKind};
use crate::math::{Mat34, RawProjection};

/// Everything molvr needs from a VR runtime.
pub trait VrRuntime {
    /// Whether a headset is connected.
    fn is_hmd_present(&self) -> bool;

    /// Per-eye render target size the compositor prefers.
    fn recommended_render_target_size(&self) -> (u32, u32);

    /// Raw frustum tangents for one eye.
    fn projection_raw(&self, eye: Eye) -> RawProjection;

    /// Eye-to-head transform (IPD offset) for one eye.
    fn eye_to_head(&self, eye: Eye) -> Mat34;

    /// Block until the compositor hands out this frame's poses.
    fn wait_get_poses(&mut self) -> Result<Vec<TrackedDevicePose>, VrError>;

    /// Category of the device in `device`'s slot.
    fn device_class(&self, device: DeviceIndex) -> DeviceClass;

    /// A string property of a device.
    fn device_property(
        &self,
        device: DeviceIndex,
        property: DeviceProperty,
    ) -> Result<String, VrError>;

    /// Latch new input state for all actions. Called once per frame before
    /// any [`action_data`](Self::action_data) query.
    fn update_action_state(&mut self) -> Result<(), VrError>;

    /// Current state of one digital action.
    fn action_data(&mut self, kind: ActionKind) -> Result<ActionData, VrError>;

    /// Drain pending runtime events, returning how many were discarded.
    fn poll_events(&mut self) -> usize {
        0
    }
}
