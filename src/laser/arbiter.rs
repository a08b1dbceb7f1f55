use super::source::LaserSource;
use super::target::LaserTarget;
use crate::input::{ButtonState, InputHandlers};
use crate::runtime::DeviceIndex;

/// A press or release of the laser button this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTransition {
    /// Device whose button changed.
    pub device: DeviceIndex,
    /// New button state.
    pub state: ButtonState,
}

/// What one arbitration pass did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArbitrationReport {
    /// Sources whose laser ended up visible.
    pub visible: usize,
    /// Sources whose ray hit the target.
    pub hits: usize,
    /// Whether a click was relayed to the target.
    pub clicked: bool,
}

/// Route every source's laser to the active target for one frame.
///
/// With no target every laser is hidden. Otherwise each laser is shown
/// only if the target allows its device; visible lasers are shot at the
/// target, shortened to the hit distance (or reset to full length on a
/// miss) and recolored from the target's palette. A click transition is
/// handed to the target only for the source whose device produced it,
/// right after that source's shot; the target decides whether it reaches
/// the host.
pub fn arbitrate<'s, S>(
    mut target: Option<&mut dyn LaserTarget>,
    sources: impl IntoIterator<Item = &'s mut S>,
    click: Option<ClickTransition>,
    handlers: &mut dyn InputHandlers,
) -> ArbitrationReport
where
    S: LaserSource + 's,
{
    let mut report = ArbitrationReport::default();

    for source in sources {
        let Some(target) = target.as_deref_mut() else {
            source.laser_show(false);
            continue;
        };

        let device = source.device_index();
        source.laser_show(target.is_laser_allowed(device));

        let Some(ray) = source.laser_ray() else {
            continue;
        };
        report.visible += 1;

        let palette = target.laser_palette();
        match target.laser_shoot(device, &ray, palette.hit, handlers) {
            Some(hit) => {
                source.set_laser_length(hit.distance);
                source.set_laser_color(palette.hit);
                report.hits += 1;
            }
            None => {
                source.set_laser_length(source.max_laser_length());
                source.set_laser_color(palette.miss);
            }
        }

        if let Some(click) = click.filter(|c| c.device == device) {
            report.clicked |= target.laser_click(device, click.state, handlers);
        }
    }

    report
}
