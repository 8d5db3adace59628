//! Choosing which overlay may take keyboard focus.
//!
//! Overlays of neighbouring sliders can overlap. Only the active controller
//! nearest the cursor is allowed to claim focus in a frame; the others still
//! draw.

use slider_ui::{Point, Ui};

use crate::config::{SliderSettings, TieBreak};
use crate::constants::UNCONFIGURED_DISTANCE;
use crate::controller::NumberEntryController;
use crate::registry::{ControllerId, ControllerRegistry};

/// Distance from `point` to the nearest of the controller's entry rectangles.
///
/// A controller without rectangles sits at [`UNCONFIGURED_DISTANCE`].
pub fn effective_distance(controller: &NumberEntryController, point: Point) -> f32 {
    [controller.minimum().bounds(), controller.maximum().bounds()]
        .iter()
        .flatten()
        .map(|bounds| bounds.distance_to(point))
        .fold(UNCONFIGURED_DISTANCE, f32::min)
}

/// Whether `id` may claim focus: no other active controller in the current
/// window is strictly closer to the cursor.
///
/// Equal distances are settled by `settings.tie_break`.
pub fn is_controller_closest(
    registry: &ControllerRegistry,
    id: ControllerId,
    ui: &Ui,
    settings: &SliderSettings,
) -> bool {
    let Some(controller) = registry.get(id) else {
        return false;
    };
    let cursor = ui.cursor();
    let distance = effective_distance(controller, cursor);

    let mut seen_self = false;
    for other_id in registry.active_controllers(ui, settings) {
        if other_id == id {
            seen_self = true;
            continue;
        }
        let Some(other) = registry.get(other_id) else {
            continue;
        };
        let other_distance = effective_distance(other, cursor);
        if other_distance < distance {
            return false;
        }
        if other_distance == distance && wins_tie(other, controller, !seen_self, settings) {
            return false;
        }
    }
    true
}

/// Whether `other` beats `controller` at equal distance.
fn wins_tie(
    other: &NumberEntryController,
    controller: &NumberEntryController,
    other_first: bool,
    settings: &SliderSettings,
) -> bool {
    match settings.tie_break {
        TieBreak::FirstMatch => other_first,
        TieBreak::MostRecentInteraction => {
            match (other.last_interaction(), controller.last_interaction()) {
                (Some(a), Some(b)) if a != b => a > b,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                _ => other_first,
            }
        }
    }
}
