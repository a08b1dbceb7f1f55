//! The VR session: runtime, tracked devices, input and laser targets.
//!
//! [`VrContext`] is created once per session with [`VrContext::init`] and
//! driven by the host's frame loop:
//!
//! 1. [`frame_start`](VrContext::frame_start) waits for poses and updates
//!    the head and controllers.
//! 2. [`handle_input`](VrContext::handle_input) latches actions, toggles
//!    the menu, forwards pad commands and routes every laser to the
//!    active target.
//! 3. The host's draw pass reads eye matrices, the menu quad and laser
//!    state.

use glam::Mat4;

use crate::controller::Controller;
use crate::error::VrError;
use crate::input::{ActionKind, ActionList, ButtonState, InputHandlers};
use crate::laser::{
    arbitrate, ArbitrationReport, ClickTransition, LaserOwner, LaserSource,
    LaserTarget,
};
use crate::math::{fast_inverse_mat34, projection_from_raw, Pose};
use crate::menu::Menu;
use crate::options::{LaserOptions, VrOptions};
use crate::picker::ScenePicker;
use crate::runtime::{
    DeviceClass, DeviceIndex, DeviceProperty, Eye, Hand, TrackedDevicePose,
    VrRuntime, MAX_TRACKED_DEVICES,
};

/// Pixel rectangle inside an eye image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge.
    pub x: u32,
    /// Bottom edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Owned VR session state.
pub struct VrContext<R: VrRuntime> {
    runtime: R,
    options: VrOptions,
    actions: ActionList,
    menu: Menu,
    picker: ScenePicker,
    controllers: [Option<Controller>; 2],
    head_pose: Pose,
    world_to_head: Mat4,
    head_to_eye: [Mat4; 2],
    eye_size: Option<(u32, u32)>,
    scene_size: (u32, u32),
}

impl<R: VrRuntime> VrContext<R> {
    /// Start a session on `runtime`.
    ///
    /// Fails with [`VrError::HmdNotPresent`] when no headset is connected
    /// and with [`VrError::Runtime`] when the headset cannot be queried.
    pub fn init(runtime: R, options: VrOptions) -> Result<Self, VrError> {
        if !runtime.is_hmd_present() {
            return Err(VrError::HmdNotPresent);
        }
        let model = runtime
            .device_property(DeviceIndex::HMD, DeviceProperty::ModelNumber)?;
        log::info!("VR session started on {model}");

        let head_to_eye =
            Eye::ALL.map(|eye| fast_inverse_mat34(&runtime.eye_to_head(eye)));
        let menu = Menu::new(&options.gui, options.laser.menu_palette());
        let picker = ScenePicker::new(options.laser.picker_palette());

        Ok(Self {
            runtime,
            options,
            actions: ActionList::new(),
            menu,
            picker,
            controllers: [None, None],
            head_pose: Pose::IDENTITY,
            world_to_head: Mat4::IDENTITY,
            head_to_eye,
            eye_size: None,
            scene_size: (0, 0),
        })
    }

    /// End the session and hand the runtime back.
    #[must_use]
    pub fn shutdown(self) -> R {
        log::info!("VR session shut down");
        self.runtime
    }

    /// The runtime.
    #[must_use]
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// The runtime, mutably.
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &VrOptions {
        &self.options
    }

    /// Replace the options and push them into the menu, picker and
    /// lasers.
    pub fn set_options(&mut self, options: VrOptions) {
        self.menu
            .apply_options(&options.gui, options.laser.menu_palette());
        self.picker.set_palette(options.laser.picker_palette());
        for controller in self.controllers.iter_mut().flatten() {
            controller.apply_laser_options(&options.laser);
        }
        self.options = options;
    }

    /// Size of the host's scene viewport, used as the picking click point.
    pub fn set_scene_size(&mut self, width: u32, height: u32) {
        self.scene_size = (width, height);
    }

    /// Wait for this frame's poses and update the head and controllers.
    ///
    /// Runtime failures are logged and leave last frame's state in place.
    pub fn frame_start(&mut self) {
        if self.eye_size.is_none() {
            let (width, height) = self.runtime.recommended_render_target_size();
            log::info!("eye render targets {width}x{height}");
            self.eye_size = Some((width, height));
        }

        let poses = match self.runtime.wait_get_poses() {
            Ok(poses) => poses,
            Err(e) => {
                log::warn!("failed to get poses: {e}");
                return;
            }
        };

        for pose in &poses {
            match pose.class {
                DeviceClass::Hmd if pose.valid => {
                    self.head_pose = Pose::from_mat34(&pose.matrix);
                    self.world_to_head = fast_inverse_mat34(&pose.matrix);
                }
                DeviceClass::Controller => {
                    if let Some(hand) = pose.hand {
                        update_controller(
                            &self.runtime,
                            &self.options.laser,
                            &mut self.controllers[hand.index()],
                            hand,
                            pose,
                        );
                    }
                }
                _ => {}
            }
        }
    }

    /// Latch input and run the laser pass for this frame.
    pub fn handle_input(
        &mut self,
        handlers: &mut dyn InputHandlers,
    ) -> ArbitrationReport {
        let discarded = self.runtime.poll_events();
        if discarded > 0 {
            log::trace!("discarded {discarded} runtime events");
        }
        self.actions.update(&mut self.runtime);

        let toggle = self.actions.get(ActionKind::ToggleMenu);
        if toggle.was_pressed() {
            let device = toggle.device_index();
            self.menu_toggle(device, handlers);
        }

        self.apply_grips();
        self.forward_pads(handlers);

        let click = self.actions.get(ActionKind::LaserClick);
        let click_device = click.device_index();
        let click_pressed = click.was_pressed();
        let click_released = click.was_released();
        let transition = click.was_pressed_or_released().then(|| {
            ClickTransition {
                device: click_device,
                state: ButtonState::from_pressed(click.is_pressed()),
            }
        });

        if click_pressed && !self.menu.is_visible() && !self.picker.is_active()
        {
            let (width, height) = self.scene_size;
            self.picker.activate(
                LaserOwner::from(click_device),
                (width / 2) as i32,
                (height / 2) as i32,
            );
        }

        let target: Option<&mut dyn LaserTarget> = if self.menu.is_visible() {
            Some(&mut self.menu)
        } else if self.picker.is_active() {
            Some(&mut self.picker)
        } else {
            None
        };
        let report = arbitrate(
            target,
            self.controllers.iter_mut().flatten(),
            transition,
            handlers,
        );

        if click_released
            && self.picker.is_active()
            && self.picker.owner().allows(click_device)
        {
            self.picker.deactivate();
        }
        report
    }

    /// Show the menu for `device` (or anyone, for an invalid index), or
    /// hide it if shown. Showing the menu ends any scene pick. A press
    /// still held on the target being closed is released through
    /// `handlers`.
    pub fn menu_toggle(
        &mut self,
        device: DeviceIndex,
        handlers: &mut dyn InputHandlers,
    ) {
        if self.menu.is_visible() {
            log::debug!("menu hidden by {device}");
            self.menu.laser_cancel(handlers);
            self.menu.hide();
        } else {
            log::debug!("menu shown for {device}");
            self.picker.laser_cancel(handlers);
            self.picker.deactivate();
            self.menu
                .show(self.head_pose.matrix(), LaserOwner::from(device));
        }
    }

    /// Announce the size of the menu texture the host is about to draw.
    pub fn menu_buffer_start(&mut self, width: u32, height: u32) {
        self.menu.buffer_start(width, height);
    }

    /// The GUI panel.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The scene picker.
    #[must_use]
    pub fn picker(&self) -> &ScenePicker {
        &self.picker
    }

    /// The controller assigned to `hand`, if connected.
    #[must_use]
    pub fn controller(&self, hand: Hand) -> Option<&Controller> {
        self.controllers[hand.index()].as_ref()
    }

    /// Head-to-world pose.
    #[must_use]
    pub fn head_pose(&self) -> Pose {
        self.head_pose
    }

    /// World-to-head matrix.
    #[must_use]
    pub fn world_to_head(&self) -> Mat4 {
        self.world_to_head
    }

    /// Head-to-eye matrix.
    #[must_use]
    pub fn head_to_eye(&self, eye: Eye) -> Mat4 {
        self.head_to_eye[eye.index()]
    }

    /// World-to-eye view matrix.
    #[must_use]
    pub fn world_to_eye(&self, eye: Eye) -> Mat4 {
        self.head_to_eye(eye) * self.world_to_head
    }

    /// Eye projection for the given clip planes.
    #[must_use]
    pub fn projection(&self, eye: Eye, near: f32, far: f32) -> Option<Mat4> {
        projection_from_raw(self.runtime.projection_raw(eye), near, far)
    }

    /// Eye render target size, known after the first
    /// [`frame_start`](Self::frame_start).
    #[must_use]
    pub fn eye_size(&self) -> Option<(u32, u32)> {
        self.eye_size
    }

    /// Largest centered rectangle of an eye image with the scene window's
    /// aspect ratio, for mirroring the eye to the desktop.
    #[must_use]
    pub fn eye_viewport(
        &self,
        scene_width: u32,
        scene_height: u32,
    ) -> Option<Viewport> {
        let (eye_width, eye_height) = self.eye_size?;
        if scene_width == 0
            || scene_height == 0
            || eye_width == 0
            || eye_height == 0
        {
            return None;
        }
        let scene_aspect = scene_width as f32 / scene_height as f32;
        let eye_aspect = eye_width as f32 / eye_height as f32;
        let (width, height) = if scene_aspect > eye_aspect {
            (eye_width, (eye_width as f32 / scene_aspect) as u32)
        } else {
            ((eye_height as f32 * scene_aspect) as u32, eye_height)
        };
        Some(Viewport {
            x: (eye_width - width) / 2,
            y: (eye_height - height) / 2,
            width,
            height,
        })
    }

    /// Human-readable report of every tracked device. Each line is also
    /// logged.
    #[must_use]
    pub fn feedback(&self) -> String {
        let mut report = String::new();
        for slot in 0..MAX_TRACKED_DEVICES {
            let device = DeviceIndex(slot);
            let class = self.runtime.device_class(device);
            if class == DeviceClass::Invalid {
                continue;
            }
            let model = self
                .runtime
                .device_property(device, DeviceProperty::ModelNumber)
                .unwrap_or_default();
            let serial = self
                .runtime
                .device_property(device, DeviceProperty::SerialNumber)
                .unwrap_or_default();
            let line = format!(
                "Device {device}: {} {model} (serial {serial})",
                class.name()
            );
            log::info!("{line}");
            report.push_str(&line);
            report.push('\n');
        }
        report
    }

    fn apply_grips(&mut self) {
        for (kind, hand) in [
            (ActionKind::LeftGrip, Hand::Left),
            (ActionKind::RightGrip, Hand::Right),
        ] {
            let grip = self.actions.get(kind);
            if !grip.was_pressed_or_released() {
                continue;
            }
            if let Some(controller) = &mut self.controllers[hand.index()] {
                controller.press_grip(grip.is_pressed());
            }
        }
    }

    fn forward_pads(&self, handlers: &mut dyn InputHandlers) {
        for kind in ActionKind::PADS {
            if !self.actions.get(kind).was_pressed() {
                continue;
            }
            if let Some(action) = self.options.pads.lookup(kind) {
                log::debug!("{kind} -> {action:?}");
                handlers.action(action);
            }
        }
    }
}

/// Create, move or drop the controller in one hand's slot.
fn update_controller<R: VrRuntime>(
    runtime: &R,
    laser: &LaserOptions,
    slot: &mut Option<Controller>,
    hand: Hand,
    pose: &TrackedDevicePose,
) {
    if !pose.connected {
        if slot.as_ref().is_some_and(|c| c.device_index() == pose.device) {
            log::info!("{hand:?} controller {} disconnected", pose.device);
            *slot = None;
        }
        return;
    }

    if !slot.as_ref().is_some_and(|c| c.device_index() == pose.device) {
        let mut controller = Controller::new(pose.device, hand, laser);
        match runtime
            .device_property(pose.device, DeviceProperty::RenderModelName)
        {
            Ok(name) => controller.set_render_model_name(Some(name)),
            Err(e) => log::warn!(
                "no render model for controller {}: {e}",
                pose.device
            ),
        }
        log::info!("{hand:?} controller {} connected", pose.device);
        *slot = Some(controller);
    }

    let Some(controller) = slot.as_mut() else {
        return;
    };
    if pose.valid {
        controller.set_pose(Pose::from_mat34(&pose.matrix));
    }
}
