//! Minimal click-to-set sliders standing in for the host's own sliders.

use crate::event::{Event, MouseButton};
use crate::layout::Bounds;
use crate::ui::{DrawCommand, Ui};

/// Diameter of the thumb
const THUMB_SIZE: f32 = 16.0;

/// Convert an x position to a value in `min..=max`.
fn x_to_value(x: f32, bounds: Bounds, min: f32, max: f32) -> f32 {
    let track_start = bounds.x + THUMB_SIZE / 2.0;
    let track_width = (bounds.width - THUMB_SIZE).max(f32::EPSILON);
    let ratio = ((x - track_start) / track_width).clamp(0.0, 1.0);
    min + ratio * (max - min)
}

/// Normalized position (0-1) of a value.
fn value_ratio(value: f32, min: f32, max: f32) -> f32 {
    if (max - min).abs() < f32::EPSILON {
        0.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

impl Ui {
    /// Single-value slider. A left click inside sets the value.
    pub fn horizontal_slider(&mut self, bounds: Bounds, value: f32, min: f32, max: f32) -> f32 {
        let mut value = value;
        if let Some(x) = self.left_press_inside(bounds) {
            value = x_to_value(x, bounds, min, max);
            self.use_event();
        }
        let command = DrawCommand::Slider {
            bounds,
            fraction: value_ratio(value, min, max),
            color: self.color(),
        };
        self.push(command);
        value
    }

    /// Two-handle range slider. A left click moves the nearer handle.
    pub fn range_slider(
        &mut self,
        bounds: Bounds,
        range: (f32, f32),
        min: f32,
        max: f32,
    ) -> (f32, f32) {
        let (mut low, mut high) = range;
        if let Some(x) = self.left_press_inside(bounds) {
            let value = x_to_value(x, bounds, min, max);
            if (value - low).abs() <= (value - high).abs() {
                low = value.min(high);
            } else {
                high = value.max(low);
            }
            self.use_event();
        }
        for handle in [low, high] {
            let command = DrawCommand::Slider {
                bounds,
                fraction: value_ratio(handle, min, max),
                color: self.color(),
            };
            self.push(command);
        }
        (low, high)
    }

    fn left_press_inside(&self, bounds: Bounds) -> Option<f32> {
        match self.event() {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(*position) => Some(position.x),
            _ => None,
        }
    }
}
