//! Single-value horizontal sliders.

use slider_ui::{Bounds, Ui};

use super::{SliderLayout, SliderOverlay, entry_line_height};
use crate::constants::ENTRY_SPACING;
use crate::number::{NumberKind, clamp_f32};

/// Share of the slider's width given to the entry field.
const ENTRY_WIDTH_FRACTION: f32 = 0.2;

impl SliderOverlay {
    /// Resolve the controller for a horizontal slider and place its field at
    /// the right end.
    pub fn before_horizontal_slider(
        &mut self,
        ui: &mut Ui,
        rect: Bounds,
        value: f32,
        min: f32,
        max: f32,
    ) -> SliderLayout {
        let id = self.registry.controller_for_position(ui, rect);

        let field_width = rect.width * ENTRY_WIDTH_FRACTION;
        let entry = Bounds::new(
            rect.right() - field_width,
            rect.y,
            field_width,
            entry_line_height(),
        );

        if let Some(controller) = self.registry.get_mut(id) {
            controller.set_kind(NumberKind::Float);
            controller.set_limits(min, max);
            controller.set_state_if_null(value);
            controller.set_minimum_entry_rect(entry);
        }

        let slider = if self.settings.is_always_on() {
            Bounds::new(
                rect.x,
                rect.y,
                rect.width - field_width - ENTRY_SPACING,
                rect.height,
            )
        } else {
            rect
        };

        SliderLayout {
            controller: id,
            entry,
            slider,
        }
    }

    /// Overlay the entry field and return the value, rounded to a multiple of
    /// `round_to` when it is positive, then clamped to `[min, max]`.
    pub fn after_horizontal_slider(
        &mut self,
        ui: &mut Ui,
        layout: &SliderLayout,
        value: f32,
        min: f32,
        max: f32,
        round_to: f32,
    ) -> f32 {
        let drawn = self.with_overlay(ui, layout.controller, layout.slider, |c, ui, closest, settings| {
            c.draw(ui, value, closest, settings)
        });
        let mut value = drawn.unwrap_or(value);

        if round_to > 0.0 {
            value = (value / round_to).round() * round_to;
        }
        clamp_f32(value, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayStyle, SliderSettings};
    use slider_ui::{Event, ManualClock};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_entry_at_right_fifth() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::default();
        let rect = Bounds::new(10.0, 0.0, 200.0, 24.0);

        ui.begin_frame(Event::Repaint);
        let layout = overlay.before_horizontal_slider(&mut ui, rect, 0.5, 0.0, 1.0);
        assert!(approx_eq(layout.entry.x, 170.0));
        assert!(approx_eq(layout.entry.width, 40.0));
        assert_eq!(layout.slider, rect);
    }

    #[test]
    fn test_always_on_leaves_room_for_entry() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::new(SliderSettings {
            display_style: DisplayStyle::AlwaysOn,
            ..SliderSettings::default()
        });
        let rect = Bounds::new(10.0, 0.0, 200.0, 24.0);

        ui.begin_frame(Event::Repaint);
        let layout = overlay.before_horizontal_slider(&mut ui, rect, 0.5, 0.0, 1.0);
        assert!(approx_eq(layout.slider.width, 155.0));
        assert!(!layout.slider.overlaps(&layout.entry));
    }

    #[test]
    fn test_round_then_clamp() {
        let mut ui = Ui::new(ManualClock::new());
        let mut overlay = SliderOverlay::default();
        let rect = Bounds::new(0.0, 0.0, 200.0, 24.0);

        ui.begin_frame(Event::Repaint);
        let layout = overlay.before_horizontal_slider(&mut ui, rect, 0.0, 0.0, 10.0);
        let value = overlay.after_horizontal_slider(&mut ui, &layout, 3.7, 0.0, 10.0, 0.5);
        assert!(approx_eq(value, 3.5));

        let value = overlay.after_horizontal_slider(&mut ui, &layout, 12.3, 0.0, 10.0, 0.0);
        assert_eq!(value, 10.0);
    }
}
