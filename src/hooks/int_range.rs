//! Integer range sliders.

use slider_ui::{Bounds, Ui};

use super::{IntRange, RangeLayout, SliderOverlay, range_entry_rects, range_slider_between};
use crate::number::{NumberKind, clamp_i32};

impl SliderOverlay {
    /// Resolve the controller for an integer range slider and lay out its fields.
    pub fn before_int_range(
        &mut self,
        ui: &mut Ui,
        rect: Bounds,
        range: IntRange,
        min: i32,
        max: i32,
    ) -> RangeLayout {
        let id = self.registry.controller_for_position(ui, rect);
        let (minimum_entry, maximum_entry) = range_entry_rects(rect);

        if let Some(controller) = self.registry.get_mut(id) {
            controller.set_kind(NumberKind::Integer);
            controller.set_limits(min as f32, max as f32);
            controller.set_range_state_if_null(range.min as f32, range.max as f32);
            controller.set_minimum_entry_rect(minimum_entry);
            controller.set_maximum_entry_rect(maximum_entry);
        }

        let slider = if self.settings.is_always_on() {
            range_slider_between(rect, minimum_entry, maximum_entry)
        } else {
            rect
        };

        RangeLayout {
            controller: id,
            minimum_entry,
            maximum_entry,
            slider,
        }
    }

    /// Integer counterpart of [`SliderOverlay::after_float_range`].
    pub fn after_int_range(
        &mut self,
        ui: &mut Ui,
        layout: &RangeLayout,
        range: IntRange,
        min: i32,
        max: i32,
    ) -> IntRange {
        let drawn = self.with_overlay(ui, layout.controller, layout.slider, |c, ui, closest, settings| {
            c.draw_int_range(ui, range.min, range.max, closest, settings)
        });
        let (low, high) = drawn.unwrap_or((range.min, range.max));

        let low = clamp_i32(low, min, high);
        let high = clamp_i32(high, low, max);
        IntRange::new(low, high)
    }
}
