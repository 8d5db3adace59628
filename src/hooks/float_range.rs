//! Float range sliders.

use slider_ui::{Bounds, Ui};

use super::{FloatRange, RangeLayout, SliderOverlay, range_entry_rects, range_slider_between};
use crate::number::{NumberKind, clamp_f32};

impl SliderOverlay {
    /// Resolve the controller for a float range slider and lay out its fields.
    pub fn before_float_range(
        &mut self,
        ui: &mut Ui,
        rect: Bounds,
        range: FloatRange,
        min: f32,
        max: f32,
    ) -> RangeLayout {
        let id = self.registry.controller_for_position(ui, rect);
        let (minimum_entry, maximum_entry) = range_entry_rects(rect);

        if let Some(controller) = self.registry.get_mut(id) {
            controller.set_kind(NumberKind::Float);
            controller.set_limits(min, max);
            controller.set_range_state_if_null(range.min, range.max);
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

    /// Overlay the entry fields and return the range, clamped so that
    /// `min <= range.min <= range.max <= max`.
    pub fn after_float_range(
        &mut self,
        ui: &mut Ui,
        layout: &RangeLayout,
        range: FloatRange,
        min: f32,
        max: f32,
    ) -> FloatRange {
        let drawn = self.with_overlay(ui, layout.controller, layout.slider, |c, ui, closest, settings| {
            c.draw_range(ui, range.min, range.max, closest, settings)
        });
        let (low, high) = drawn.unwrap_or((range.min, range.max));

        let low = clamp_f32(low, min, high);
        let high = clamp_f32(high, low, max);
        FloatRange::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayStyle, SliderSettings};
    use slider_ui::{Event, ManualClock, Point};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_hover_layout_keeps_slider_rect() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::default();
        let rect = Bounds::new(0.0, 0.0, 220.0, 30.0);

        ui.begin_frame(Event::Repaint);
        let layout = overlay.before_float_range(&mut ui, rect, FloatRange::new(10.0, 90.0), 0.0, 100.0);
        assert_eq!(layout.slider, rect);
        let controller = overlay.controller(layout.controller);
        assert_eq!(controller.and_then(|c| c.minimum().buffer()), Some("10.0"));
        assert_eq!(controller.map(|c| c.limits()), Some((0.0, 100.0)));
    }

    #[test]
    fn test_always_on_shrinks_slider() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::new(SliderSettings {
            display_style: DisplayStyle::AlwaysOn,
            ..SliderSettings::default()
        });
        let rect = Bounds::new(0.0, 0.0, 220.0, 30.0);

        ui.begin_frame(Event::Repaint);
        let layout = overlay.before_float_range(&mut ui, rect, FloatRange::new(10.0, 90.0), 0.0, 100.0);
        assert!(approx_eq(layout.slider.x, 55.0));
        assert!(approx_eq(layout.slider.width, 110.0));
        assert!(!layout.slider.overlaps(&layout.minimum_entry));
        assert!(!layout.slider.overlaps(&layout.maximum_entry));
    }

    #[test]
    fn test_after_clamps_crossed_range() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::default();
        let rect = Bounds::new(0.0, 0.0, 220.0, 30.0);

        // Far away, so nothing is drawn and only the clamp applies
        ui.begin_frame(Event::MouseMove {
            position: Point::new(110.0, 500.0),
        });
        let layout = overlay.before_float_range(&mut ui, rect, FloatRange::new(10.0, 90.0), 0.0, 100.0);
        let range = overlay.after_float_range(&mut ui, &layout, FloatRange::new(-5.0, 120.0), 0.0, 100.0);
        assert_eq!(range, FloatRange::new(0.0, 100.0));

        let range = overlay.after_float_range(&mut ui, &layout, FloatRange::new(60.0, 40.0), 0.0, 100.0);
        assert_eq!(range, FloatRange::new(40.0, 40.0));
    }

    #[test]
    fn test_same_slider_resolves_every_frame() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::default();
        let rect = Bounds::new(0.0, 0.0, 220.0, 30.0);

        let mut ids = Vec::new();
        for _ in 0..3 {
            ui.begin_frame(Event::Repaint);
            let layout = overlay.before_float_range(&mut ui, rect, FloatRange::new(10.0, 90.0), 0.0, 100.0);
            overlay.after_float_range(&mut ui, &layout, FloatRange::new(10.0, 90.0), 0.0, 100.0);
            ids.push(layout.controller);
        }
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(overlay.registry().len(), 1);
    }
}
