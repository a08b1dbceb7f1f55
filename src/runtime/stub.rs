use std::collections::{BTreeMap, VecDeque};

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use super::device::{
    DeviceClass, DeviceIndex, DeviceProperty, Eye, Hand, TrackedDevicePose,
};
use super::VrRuntime;
use crate::error::VrError;
use crate::input::{ActionData, ActionKind};
use crate::math::{mat4_to_mat34, Mat34, RawProjection};

/// Height of the stub headset above the tracking origin, in meters.
const STUB_HMD_HEIGHT: f32 = 1.0;
/// Half the stub's interpupillary distance, in meters.
const STUB_HALF_IPD: f32 = 0.032_15;
/// Eye offset towards the back of the head, in meters.
const STUB_EYE_DEPTH: f32 = 0.015;

#[derive(Debug, Clone)]
struct StubDevice {
    class: DeviceClass,
    hand: Option<Hand>,
    model: String,
    serial: String,
    render_model: String,
    matrix: Mat34,
    connected: bool,
}

/// In-process [`VrRuntime`] with a headset and scriptable controllers.
///
/// The headset sits in slot 0, one meter above the origin, looking down
/// `-Z`. Controllers are added explicitly; digital action transitions are
/// queued and released one per [`update_action_state`] call, so a press
/// queued before a frame is seen as `was_pressed` in exactly that frame.
///
/// [`update_action_state`]: VrRuntime::update_action_state
#[derive(Debug, Clone)]
pub struct StubRuntime {
    hmd_present: bool,
    devices: BTreeMap<DeviceIndex, StubDevice>,
    pending: FxHashMap<ActionKind, VecDeque<ActionData>>,
    current: FxHashMap<ActionKind, ActionData>,
    frames: u64,
}

impl Default for StubRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StubRuntime {
    /// A runtime with a connected headset and no controllers.
    #[must_use]
    pub fn new() -> Self {
        let mut devices = BTreeMap::new();
        let _ = devices.insert(
            DeviceIndex::HMD,
            StubDevice {
                class: DeviceClass::Hmd,
                hand: None,
                model: "Stub HMD".into(),
                serial: "STUB-00".into(),
                render_model: "stub_hmd".into(),
                matrix: mat4_to_mat34(Mat4::from_translation(Vec3::new(
                    0.0,
                    STUB_HMD_HEIGHT,
                    0.0,
                ))),
                connected: true,
            },
        );
        Self {
            hmd_present: true,
            devices,
            pending: FxHashMap::default(),
            current: FxHashMap::default(),
            frames: 0,
        }
    }

    /// A runtime that reports no headset, for init failure paths.
    #[must_use]
    pub fn without_hmd() -> Self {
        Self {
            hmd_present: false,
            devices: BTreeMap::new(),
            ..Self::new()
        }
    }

    /// Connect a controller in `device`'s slot, posed at the headset.
    pub fn add_controller(&mut self, device: DeviceIndex, hand: Hand) {
        let matrix = self
            .devices
            .get(&DeviceIndex::HMD)
            .map_or_else(|| mat4_to_mat34(Mat4::IDENTITY), |hmd| hmd.matrix);
        let _ = self.devices.insert(
            device,
            StubDevice {
                class: DeviceClass::Controller,
                hand: Some(hand),
                model: "Stub Controller".into(),
                serial: format!("STUB-{device}"),
                render_model: "stub_controller".into(),
                matrix,
                connected: true,
            },
        );
    }

    /// Move a device. Unknown slots are ignored.
    pub fn set_pose(&mut self, device: DeviceIndex, pose: Mat4) {
        if let Some(d) = self.devices.get_mut(&device) {
            d.matrix = mat4_to_mat34(pose);
        }
    }

    /// Mark a device as disconnected; it keeps its slot.
    pub fn disconnect(&mut self, device: DeviceIndex) {
        if let Some(d) = self.devices.get_mut(&device) {
            d.connected = false;
        }
    }

    /// Queue a button press of `kind` from `device`.
    pub fn press(&mut self, kind: ActionKind, device: DeviceIndex) {
        self.queue(kind, ActionData::transition(device, true));
    }

    /// Queue a button release of `kind` from `device`.
    pub fn release(&mut self, kind: ActionKind, device: DeviceIndex) {
        self.queue(kind, ActionData::transition(device, false));
    }

    /// Number of completed [`VrRuntime::wait_get_poses`] calls.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn queue(&mut self, kind: ActionKind, data: ActionData) {
        self.pending.entry(kind).or_default().push_back(data);
    }
}

impl VrRuntime for StubRuntime {
    fn is_hmd_present(&self) -> bool {
        self.hmd_present
    }

    fn recommended_render_target_size(&self) -> (u32, u32) {
        (1512, 1680)
    }

    fn projection_raw(&self, eye: Eye) -> RawProjection {
        match eye {
            Eye::Left => RawProjection {
                left: -1.396_663_4,
                right: 1.239_944,
                top: -1.471_105_5,
                bottom: 1.458_684_3,
            },
            Eye::Right => RawProjection {
                left: -1.240_600_1,
                right: 1.394_323_8,
                top: -1.467_880_5,
                bottom: 1.460_325,
            },
        }
    }

    fn eye_to_head(&self, eye: Eye) -> Mat34 {
        let x = match eye {
            Eye::Left => -STUB_HALF_IPD,
            Eye::Right => STUB_HALF_IPD,
        };
        [
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, STUB_EYE_DEPTH],
        ]
    }

    fn wait_get_poses(&mut self) -> Result<Vec<TrackedDevicePose>, VrError> {
        if !self.hmd_present {
            return Err(VrError::HmdNotPresent);
        }
        self.frames += 1;
        Ok(self
            .devices
            .iter()
            .map(|(index, d)| TrackedDevicePose {
                device: *index,
                class: d.class,
                hand: d.hand,
                matrix: d.matrix,
                valid: d.connected,
                connected: d.connected,
            })
            .collect())
    }

    fn device_class(&self, device: DeviceIndex) -> DeviceClass {
        self.devices
            .get(&device)
            .map_or(DeviceClass::Invalid, |d| d.class)
    }

    fn device_property(
        &self,
        device: DeviceIndex,
        property: DeviceProperty,
    ) -> Result<String, VrError> {
        let d = self.devices.get(&device).ok_or_else(|| {
            VrError::Runtime(format!("invalid device {device}"))
        })?;
        Ok(match property {
            DeviceProperty::ModelNumber => d.model.clone(),
            DeviceProperty::SerialNumber => d.serial.clone(),
            DeviceProperty::RenderModelName => d.render_model.clone(),
        })
    }

    fn update_action_state(&mut self) -> Result<(), VrError> {
        for data in self.current.values_mut() {
            data.changed = false;
        }
        for (kind, queue) in &mut self.pending {
            if let Some(next) = queue.pop_front() {
                let _ = self.current.insert(*kind, next);
            }
        }
        Ok(())
    }

    fn action_data(&mut self, kind: ActionKind) -> Result<ActionData, VrError> {
        Ok(self.current.get(&kind).copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headset_is_reported_at_stub_height() {
        let mut runtime = StubRuntime::new();
        let poses = runtime.wait_get_poses().unwrap();
        assert_eq!(poses.len(), 1);
        assert_eq!(poses[0].class, DeviceClass::Hmd);
        assert_eq!(poses[0].matrix[1][3], STUB_HMD_HEIGHT);
        assert_eq!(runtime.frames(), 1);
    }

    #[test]
    fn without_hmd_fails_pose_wait() {
        let mut runtime = StubRuntime::without_hmd();
        assert!(!runtime.is_hmd_present());
        assert!(runtime.wait_get_poses().is_err());
        assert_eq!(
            runtime.device_class(DeviceIndex::HMD),
            DeviceClass::Invalid
        );
    }

    #[test]
    fn queued_transitions_release_one_per_update() {
        let mut runtime = StubRuntime::new();
        runtime.press(ActionKind::LaserClick, DeviceIndex(2));
        runtime.release(ActionKind::LaserClick, DeviceIndex(2));

        runtime.update_action_state().unwrap();
        let data = runtime.action_data(ActionKind::LaserClick).unwrap();
        assert!(data.state && data.changed);

        runtime.update_action_state().unwrap();
        let data = runtime.action_data(ActionKind::LaserClick).unwrap();
        assert!(!data.state && data.changed);

        runtime.update_action_state().unwrap();
        let data = runtime.action_data(ActionKind::LaserClick).unwrap();
        assert!(!data.changed);
        assert_eq!(data.origin, DeviceIndex(2));
    }

    #[test]
    fn untouched_action_is_inactive() {
        let mut runtime = StubRuntime::new();
        runtime.update_action_state().unwrap();
        let data = runtime.action_data(ActionKind::PadEast).unwrap();
        assert!(!data.active);
    }

    #[test]
    fn controller_properties_and_disconnect() {
        let mut runtime = StubRuntime::new();
        runtime.add_controller(DeviceIndex(3), Hand::Right);
        assert_eq!(
            runtime.device_class(DeviceIndex(3)),
            DeviceClass::Controller
        );
        assert_eq!(
            runtime
                .device_property(DeviceIndex(3), DeviceProperty::SerialNumber)
                .unwrap(),
            "STUB-03"
        );
        assert!(runtime
            .device_property(DeviceIndex(9), DeviceProperty::ModelNumber)
            .is_err());

        runtime.disconnect(DeviceIndex(3));
        let poses = runtime.wait_get_poses().unwrap();
        let controller =
            poses.iter().find(|p| p.device == DeviceIndex(3)).unwrap();
        assert!(!controller.connected);
        assert_eq!(controller.hand, Some(Hand::Right));
    }
}
