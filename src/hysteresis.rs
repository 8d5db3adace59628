//! Distance-based fade of the entry overlays.
//!
//! Each after-draw pass brackets the overlay with [`NumberEntryController::begin_heuristics`]
//! and [`NumberEntryController::end_heuristics`]. The first sets the draw
//! color's alpha from how far the cursor is from the slider and decides
//! whether the overlay is hidden; the second puts the color back.
//!
//! Two thresholds keep the overlay from flickering at a single boundary:
//! - closer than `begin`: fully opaque
//! - between `begin` and `end`: linear fade
//! - `end` or further: transparent and disabled

use slider_ui::{Bounds, Color, Ui};

use crate::config::SliderSettings;
use crate::controller::NumberEntryController;

/// Overlay alpha with the cursor `distance` away from the slider.
///
/// `base_alpha` is the alpha of the color the overlay would otherwise use.
pub fn fade_alpha(distance: f32, base_alpha: f32, begin: f32, end: f32) -> f32 {
    if distance >= end {
        0.0
    } else if distance >= begin {
        (1.0 - base_alpha * (distance / end)).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

impl NumberEntryController {
    /// Fade the draw color for the cursor's distance from `region`.
    ///
    /// With the cursor inside `region` nothing changes, including the
    /// disabled flag from the last pass.
    pub fn begin_heuristics(&mut self, ui: &mut Ui, region: Bounds, settings: &SliderSettings) {
        let base = *self.previous_color.get_or_insert(ui.color());

        if ui.is_cursor_over(region) {
            return;
        }

        let distance = region.distance_to(ui.cursor());
        let begin = settings.heuristics_begin_distance;
        let end = settings.heuristics_end_distance;

        let mut alpha = fade_alpha(distance, base.a, begin, end);
        self.effectively_disabled = distance >= end;
        // Always-on stays drawn through `is_currently_active`; only the color is forced
        if settings.is_always_on() {
            alpha = 1.0;
        }

        log::trace!(
            "heuristics: group {} distance {:.1} alpha {:.2} disabled {}",
            self.group_id(),
            distance,
            alpha,
            self.effectively_disabled
        );
        self.alpha = alpha;
        ui.set_color(base.with_alpha(alpha));
    }

    /// Restore the color from before [`Self::begin_heuristics`].
    ///
    /// A hidden overlay gives up keyboard focus so it cannot swallow keys.
    pub fn end_heuristics(&mut self, ui: &mut Ui) {
        ui.set_color(self.previous_color.take().unwrap_or(Color::WHITE));

        if !self.effectively_disabled {
            return;
        }
        let holds_focus = [&self.minimum, &self.maximum]
            .iter()
            .any(|field| field.bounds().is_some() && ui.focus().is_focused(field.control_name()));
        if holds_focus {
            log::debug!(
                "NumberEntryController (group {}): faded out, clearing focus",
                self.group_id()
            );
            ui.clear_focus();
        }
    }
}
