//! Before/after-draw hooks for each supported slider variant.
//!
//! The host calls a `before_*` hook right before it draws a slider and the
//! matching `after_*` hook right after. The before hook resolves the slider's
//! controller and lays out its entry fields; in always-on mode it also hands
//! back a narrower rectangle for the slider itself. The after hook fades the
//! overlay, draws it if active and returns the slider's value(s), clamped to
//! the caller's bounds.
//!
//! ```text
//! let layout = overlay.before_float_range(&mut ui, rect, range, 0.0, 100.0);
//! let range = host_draws_range_slider(&mut ui, layout.slider, range);
//! let range = overlay.after_float_range(&mut ui, &layout, range, 0.0, 100.0);
//! ```

mod float_range;
mod horizontal;
mod int_range;

use slider_ui::{Bounds, FontSize, TextMetrics, Ui, WindowId};

use crate::config::SliderSettings;
use crate::constants::{ENTRY_SPACING, RANGE_GAP_WIDTH};
use crate::controller::NumberEntryController;
use crate::focus::is_controller_closest;
use crate::registry::{ControllerId, ControllerRegistry};

/// A float range as drawn by a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// An integer range as drawn by a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Layout computed for a range slider before it draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeLayout {
    pub controller: ControllerId,
    pub minimum_entry: Bounds,
    pub maximum_entry: Bounds,
    /// Where the host should draw the slider
    pub slider: Bounds,
}

/// Layout computed for a single-value slider before it draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub controller: ControllerId,
    pub entry: Bounds,
    /// Where the host should draw the slider
    pub slider: Bounds,
}

/// Entry overlays for every slider the host draws.
///
/// Owns the controller registry and the settings. One per host.
#[derive(Debug, Default)]
pub struct SliderOverlay {
    registry: ControllerRegistry,
    settings: SliderSettings,
}

impl SliderOverlay {
    pub fn new(settings: SliderSettings) -> Self {
        Self {
            registry: ControllerRegistry::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SliderSettings {
        &mut self.settings
    }

    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    pub fn controller(&self, id: ControllerId) -> Option<&NumberEntryController> {
        self.registry.get(id)
    }

    /// Forget the controllers of a slider leaving the layout.
    pub fn remove_slider(&mut self, ui: &Ui, rect: Bounds) {
        self.registry.remove_controllers_for_position(ui, rect);
    }

    /// Window-closed callback; drops the window's controllers.
    pub fn on_window_closed(&mut self, window: WindowId) {
        self.registry.remove_controllers_for_window(window);
    }

    /// Run the fade and, if the controller is active, `draw` its fields.
    ///
    /// `draw` receives whether the controller may claim focus. Returns what
    /// `draw` returned, or `None` if nothing was drawn.
    fn with_overlay<T>(
        &mut self,
        ui: &mut Ui,
        id: ControllerId,
        region: Bounds,
        draw: impl FnOnce(&mut NumberEntryController, &mut Ui, bool, &SliderSettings) -> T,
    ) -> Option<T> {
        let settings = &self.settings;
        let font = ui.font();
        ui.set_font(FontSize::Tiny);

        let active = match self.registry.get_mut(id) {
            Some(controller) => {
                controller.begin_heuristics(ui, region, settings);
                let active = controller.is_currently_active(ui, settings);
                controller.note_active(active);
                active
            }
            None => {
                log::warn!("SliderOverlay: controller {:?} is gone", id);
                ui.set_font(font);
                return None;
            }
        };

        let mut drawn = None;
        if active {
            let closest = is_controller_closest(&self.registry, id, ui, settings);
            drawn = self
                .registry
                .get_mut(id)
                .map(|controller| draw(controller, ui, closest, settings));
        }

        if let Some(controller) = self.registry.get_mut(id) {
            controller.end_heuristics(ui);
        }
        ui.set_font(font);
        drawn
    }
}

fn entry_line_height() -> f32 {
    TextMetrics::for_font(FontSize::Tiny).line_height()
}

/// Minimum and maximum entry rectangles for a range slider at `rect`.
///
/// The fields take a quarter each of the width left after the center gap;
/// the minimum sits at the left edge and the maximum ends at the right edge.
fn range_entry_rects(rect: Bounds) -> (Bounds, Bounds) {
    let line_height = entry_line_height();
    let gap_x = rect.center().x - RANGE_GAP_WIDTH / 2.0;
    let used_width = rect.width - RANGE_GAP_WIDTH - 2.0 * ENTRY_SPACING;
    let field_width = used_width / 4.0;

    let minimum = Bounds::new(rect.x, rect.y, field_width, line_height);
    let maximum = Bounds::new(
        gap_x + RANGE_GAP_WIDTH + field_width + ENTRY_SPACING,
        rect.y,
        field_width,
        line_height,
    );
    (minimum, maximum)
}

/// Always-on slider rectangle squeezed between the two entry fields.
fn range_slider_between(rect: Bounds, minimum_entry: Bounds, maximum_entry: Bounds) -> Bounds {
    Bounds::new(
        minimum_entry.right() + ENTRY_SPACING,
        rect.y,
        rect.width - minimum_entry.width - maximum_entry.width - 2.0 * ENTRY_SPACING,
        rect.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_range_entry_rects() {
        let (min, max) = range_entry_rects(Bounds::new(100.0, 50.0, 220.0, 30.0));
        // (220 - 10 - 10) / 4
        assert!(approx_eq(min.width, 50.0));
        assert_eq!(min.x, 100.0);
        assert_eq!(min.y, 50.0);
        assert!(approx_eq(min.height, 14.4));
        assert!(approx_eq(max.right(), 320.0));
        assert!(!min.overlaps(&max));
    }
}
