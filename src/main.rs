//! Headless walk-through of a VR session on the in-process stub runtime.
//!
//! Usage: `molvr [options.toml]`. Logs what the host would receive.

use std::path::Path;

use molvr::context::VrContext;
use molvr::input::{ActionKind, EventRecorder};
use molvr::laser::LaserSource;
use molvr::options::VrOptions;
use molvr::runtime::{DeviceIndex, Hand, StubRuntime};

const LEFT: DeviceIndex = DeviceIndex(1);
const RIGHT: DeviceIndex = DeviceIndex(2);

/// One scripted button transition per frame.
const SCRIPT: &[(&str, ActionKind, DeviceIndex, bool)] = &[
    ("open menu", ActionKind::ToggleMenu, RIGHT, true),
    ("", ActionKind::ToggleMenu, RIGHT, false),
    ("click menu", ActionKind::LaserClick, RIGHT, true),
    ("release menu click", ActionKind::LaserClick, RIGHT, false),
    ("close menu", ActionKind::ToggleMenu, RIGHT, true),
    ("", ActionKind::ToggleMenu, RIGHT, false),
    ("pick in scene", ActionKind::LaserClick, LEFT, true),
    ("release pick", ActionKind::LaserClick, LEFT, false),
    ("next scene", ActionKind::PadEast, LEFT, true),
];

fn load_options() -> VrOptions {
    let Some(arg) = std::env::args().nth(1) else {
        return VrOptions::default();
    };
    match VrOptions::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut runtime = StubRuntime::new();
    runtime.add_controller(LEFT, Hand::Left);
    runtime.add_controller(RIGHT, Hand::Right);

    let mut ctx = match VrContext::init(runtime, load_options()) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    ctx.set_scene_size(1024, 768);
    ctx.menu_buffer_start(640, 480);
    let _ = ctx.feedback();

    let mut recorder = EventRecorder::new();
    for (label, kind, device, pressed) in SCRIPT {
        if *pressed {
            ctx.runtime_mut().press(*kind, *device);
        } else {
            ctx.runtime_mut().release(*kind, *device);
        }
        ctx.frame_start();
        let report = ctx.handle_input(&mut recorder);

        if label.is_empty() {
            let _ = recorder.take();
            continue;
        }
        log::info!(
            "{label}: menu {}, picker {}, {} laser(s), {} hit(s)",
            if ctx.menu().is_visible() { "shown" } else { "hidden" },
            if ctx.picker().is_active() { "active" } else { "idle" },
            report.visible,
            report.hits,
        );
        for hand in Hand::ALL {
            if let Some(c) = ctx.controller(hand) {
                if c.is_laser_visible() {
                    log::info!(
                        "  {hand:?} laser length {:.2} color {:?}",
                        c.laser().length(),
                        c.laser().color()
                    );
                }
            }
        }
        for event in recorder.take() {
            log::info!("  -> {event:?}");
        }
    }

    let runtime = ctx.shutdown();
    log::info!("ran {} frames", runtime.frames());
}
