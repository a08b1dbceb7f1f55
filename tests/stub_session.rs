//! End-to-end laser sessions driven through the stub runtime.

use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};
use molvr::context::VrContext;
use molvr::input::{
    ActionKind, ButtonState, EventRecorder, HostEvent, MouseButton,
};
use molvr::laser::{LaserOwner, LaserSource, LaserTarget};
use molvr::options::{LaserOptions, VrOptions};
use molvr::runtime::{DeviceIndex, Hand, StubRuntime};

const OWNER: DeviceIndex = DeviceIndex(5);
const OTHER: DeviceIndex = DeviceIndex(6);

fn session() -> VrContext<StubRuntime> {
    let mut runtime = StubRuntime::new();
    runtime.add_controller(OWNER, Hand::Left);
    runtime.add_controller(OTHER, Hand::Right);
    let mut ctx = VrContext::init(runtime, VrOptions::default()).unwrap();
    ctx.menu_buffer_start(640, 480);
    ctx
}

/// A controller at the headset, pointing away from the menu.
fn turned_away() -> Mat4 {
    Mat4::from_translation(Vec3::Y) * Mat4::from_rotation_y(PI)
}

fn step(
    ctx: &mut VrContext<StubRuntime>,
    events: &mut EventRecorder,
    kind: ActionKind,
    device: DeviceIndex,
    pressed: bool,
) {
    if pressed {
        ctx.runtime_mut().press(kind, device);
    } else {
        ctx.runtime_mut().release(kind, device);
    }
    ctx.frame_start();
    let _ = ctx.handle_input(events);
}

#[test]
fn owner_hits_menu_center_and_clicks_once() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, true);
    assert!(ctx.menu().is_visible());
    assert_eq!(ctx.menu().owner(), LaserOwner::Device(OWNER));

    // Both controllers sit at the headset, so the owner's laser lands on
    // the panel center.
    assert_eq!(ctx.menu().hotspot().position(), (320, 240));
    let owner = ctx.controller(Hand::Left).unwrap();
    assert!(owner.is_laser_visible());
    assert!((owner.laser().length() - 1.5).abs() < 1e-5);
    let hit_color = Vec4::from(LaserOptions::default().menu_hit);
    assert_eq!(owner.laser().color(), hit_color);

    let other = ctx.controller(Hand::Right).unwrap();
    assert!(!other.is_laser_visible());

    let _ = events.take();
    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, true);

    let downs: Vec<_> = events.mouse_events(ButtonState::Down).collect();
    assert_eq!(
        downs,
        [&HostEvent::Mouse {
            button: MouseButton::Left,
            state: ButtonState::Down,
            x: 320,
            y: 240,
        }]
    );
    // The click went to the menu, not to a scene pick.
    assert!(!ctx.picker().is_active());
}

#[test]
fn click_from_other_device_is_ignored() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, true);
    step(&mut ctx, &mut events, ActionKind::LaserClick, OTHER, true);

    assert_eq!(events.mouse_events(ButtonState::Down).count(), 0);
    assert!(!ctx.controller(Hand::Right).unwrap().is_laser_visible());
}

#[test]
fn reopened_unowned_menu_accepts_every_device() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, true);
    assert!(!ctx.menu().is_laser_allowed(OTHER));

    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, false);
    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, true);
    assert!(!ctx.menu().is_visible());
    assert!(ctx.menu().is_laser_allowed(OTHER));

    ctx.menu_toggle(DeviceIndex::INVALID, &mut events);
    assert_eq!(ctx.menu().owner(), LaserOwner::Unowned);
    assert!(ctx.menu().is_laser_allowed(OWNER));
    assert!(ctx.menu().is_laser_allowed(OTHER));

    ctx.frame_start();
    let report = ctx.handle_input(&mut events);
    assert_eq!(report.visible, 2);
    assert_eq!(report.hits, 2);
}

#[test]
fn lasers_hide_when_no_target_is_active() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    ctx.frame_start();
    let report = ctx.handle_input(&mut events);
    assert_eq!(report.visible, 0);
    assert!(!ctx.controller(Hand::Left).unwrap().is_laser_visible());
    assert!(!ctx.controller(Hand::Right).unwrap().is_laser_visible());
}

#[test]
fn unowned_menu_ignores_click_from_device_off_panel() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    ctx.menu_toggle(DeviceIndex::INVALID, &mut events);
    ctx.frame_start();
    let report = ctx.handle_input(&mut events);
    assert_eq!(report.hits, 2);
    assert_eq!(ctx.menu().hover_device(), OTHER);

    ctx.runtime_mut().set_pose(OWNER, turned_away());
    let _ = events.take();
    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, true);

    // The hotspot still belongs to the other laser.
    assert_eq!(ctx.menu().hover_device(), OTHER);
    assert_eq!(ctx.menu().hotspot().position(), (320, 240));
    assert_eq!(events.mouse_events(ButtonState::Down).count(), 0);

    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, false);
    assert_eq!(events.mouse_events(ButtonState::Up).count(), 0);
}

#[test]
fn second_controller_press_keeps_pick_with_first() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, true);
    assert!(ctx.picker().is_active());

    step(&mut ctx, &mut events, ActionKind::LaserClick, OTHER, true);
    assert_eq!(ctx.picker().owner(), LaserOwner::Device(OWNER));
    assert!(ctx.controller(Hand::Left).unwrap().is_laser_visible());
    assert!(!ctx.controller(Hand::Right).unwrap().is_laser_visible());

    step(&mut ctx, &mut events, ActionKind::LaserClick, OTHER, false);
    assert!(ctx.picker().is_active());

    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, false);
    assert!(!ctx.picker().is_active());
    assert_eq!(events.mouse_events(ButtonState::Down).count(), 1);
    assert_eq!(events.mouse_events(ButtonState::Up).count(), 1);
}

#[test]
fn release_off_panel_closes_the_press() {
    let mut ctx = session();
    let mut events = EventRecorder::new();

    step(&mut ctx, &mut events, ActionKind::ToggleMenu, OWNER, true);
    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, true);
    assert_eq!(events.mouse_events(ButtonState::Down).count(), 1);

    ctx.runtime_mut().set_pose(OWNER, turned_away());
    ctx.frame_start();
    let _ = ctx.handle_input(&mut events);
    assert!(!ctx.menu().hotspot().is_on_surface());

    let _ = events.take();
    step(&mut ctx, &mut events, ActionKind::LaserClick, OWNER, false);
    let ups: Vec<_> = events.mouse_events(ButtonState::Up).collect();
    assert_eq!(
        ups,
        [&HostEvent::Mouse {
            button: MouseButton::Left,
            state: ButtonState::Up,
            x: 320,
            y: 240,
        }]
    );
}
