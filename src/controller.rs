//! Per-slider entry state.
//!
//! A [`NumberEntryController`] outlives the frames that draw it: the registry
//! hands the same controller back every frame the slider is redrawn at (about)
//! the same place. It owns up to two entry fields (minimum and maximum), each
//! with a value, the raw text the user typed and when they last touched it.

use slider_ui::{Bounds, Color, Ui, WindowId};

use crate::config::SliderSettings;
use crate::constants::INTERACTION_WINDOW_SECS;
use crate::number::{
    NumberKind, format_value, is_fully_typed_number, is_partially_or_fully_typed_number,
    parse_value,
};

/// Selects one of a controller's two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Minimum,
    Maximum,
}

/// Focus name for a field drawn at `bounds`.
///
/// Built from the rounded position so it stays the same across frames.
pub fn control_name_for(bounds: Bounds) -> String {
    format!("slider-entry-{:.0}-{:.0}", bounds.y, bounds.x)
}

/// One text entry field and the value behind it.
#[derive(Debug, Clone, Default)]
pub struct EntryField {
    value: f32,
    /// `None` until the field is first primed
    buffer: Option<String>,
    buffer_valid: bool,
    bounds: Option<Bounds>,
    control_name: String,
    last_interaction: Option<f64>,
    /// Whether the field held keyboard focus when it last drew
    had_focus: bool,
}

impl EntryField {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Text shown in the field, if it has been primed.
    pub fn buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    pub fn is_buffer_valid(&self) -> bool {
        self.buffer_valid
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn control_name(&self) -> &str {
        &self.control_name
    }

    pub fn last_interaction(&self) -> Option<f64> {
        self.last_interaction
    }

    /// Whether the field was interacted with within the interaction window.
    pub fn interacted_recently(&self, now: f64) -> bool {
        self.last_interaction
            .is_some_and(|at| (now - at).abs() <= INTERACTION_WINDOW_SECS)
    }

    pub(crate) fn mark_interaction(&mut self, at: f64) {
        self.last_interaction = Some(at);
    }

    /// A cleared buffer still counts: the user may be retyping.
    fn is_primed(&self) -> bool {
        self.buffer.is_some()
    }

    /// Overwrite value and buffer together.
    fn set_value(&mut self, kind: NumberKind, value: f32) {
        self.buffer = Some(format_value(kind, value));
        self.value = value;
        self.buffer_valid = true;
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.control_name = control_name_for(bounds);
    }

    fn is_focused(&self, ui: &Ui) -> bool {
        self.bounds.is_some() && ui.focus().is_focused(&self.control_name)
    }
}

/// Entry overlay state for one slider.
#[derive(Debug, Clone)]
pub struct NumberEntryController {
    pub(crate) minimum: EntryField,
    pub(crate) maximum: EntryField,
    kind: NumberKind,
    /// Bounds typed values are clamped to
    limits: (f32, f32),
    pub(crate) effectively_disabled: bool,
    pub(crate) alpha: f32,
    pub(crate) previous_color: Option<Color>,
    group_id: u64,
    window: WindowId,
    was_active: bool,
}

impl NumberEntryController {
    pub fn new(window: WindowId, group_id: u64) -> Self {
        Self {
            minimum: EntryField::default(),
            maximum: EntryField::default(),
            kind: NumberKind::default(),
            limits: (f32::MIN, f32::MAX),
            effectively_disabled: false,
            alpha: 1.0,
            previous_color: None,
            group_id,
            window,
            was_active: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn field(&self, which: Field) -> &EntryField {
        match which {
            Field::Minimum => &self.minimum,
            Field::Maximum => &self.maximum,
        }
    }

    fn field_mut(&mut self, which: Field) -> &mut EntryField {
        match which {
            Field::Minimum => &mut self.minimum,
            Field::Maximum => &mut self.maximum,
        }
    }

    pub fn minimum(&self) -> &EntryField {
        &self.minimum
    }

    pub fn maximum(&self) -> &EntryField {
        &self.maximum
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn limits(&self) -> (f32, f32) {
        self.limits
    }

    pub fn group_id(&self) -> u64 {
        self.group_id
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Whether the fade heuristic hid this controller.
    pub fn is_effectively_disabled(&self) -> bool {
        self.effectively_disabled
    }

    /// Overlay alpha from the last fade pass.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Most recent interaction with either field.
    pub fn last_interaction(&self) -> Option<f64> {
        match (self.minimum.last_interaction, self.maximum.last_interaction) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether either field's rectangle overlaps `region`.
    pub fn overlaps(&self, region: &Bounds) -> bool {
        [self.minimum.bounds, self.maximum.bounds]
            .iter()
            .flatten()
            .any(|bounds| bounds.overlaps(region))
    }

    // =========================================================================
    // Setup (before draw)
    // =========================================================================

    pub fn set_kind(&mut self, kind: NumberKind) {
        self.kind = kind;
    }

    pub fn set_limits(&mut self, min: f32, max: f32) {
        self.limits = (min, max);
    }

    pub fn set_minimum(&mut self, value: f32) {
        let kind = self.kind;
        self.minimum.set_value(kind, value);
    }

    pub fn set_maximum(&mut self, value: f32) {
        let kind = self.kind;
        self.maximum.set_value(kind, value);
    }

    /// Prime the minimum field unless it already holds text.
    pub fn set_state_if_null(&mut self, minimum: f32) {
        if !self.minimum.is_primed() {
            self.set_minimum(minimum);
        }
    }

    /// Prime both fields unless they already hold text.
    pub fn set_range_state_if_null(&mut self, minimum: f32, maximum: f32) {
        self.set_state_if_null(minimum);
        if !self.maximum.is_primed() {
            self.set_maximum(maximum);
        }
    }

    pub fn set_minimum_entry_rect(&mut self, bounds: Bounds) {
        self.minimum.set_bounds(bounds);
    }

    pub fn set_maximum_entry_rect(&mut self, bounds: Bounds) {
        self.maximum.set_bounds(bounds);
    }

    // =========================================================================
    // State queries
    // =========================================================================

    /// Whether the overlay should be drawn and take input this frame.
    ///
    /// Never active in a window that is gone or blocked. Holding the command
    /// key hides hover overlays so the slider underneath can be dragged.
    pub fn is_currently_active(&self, ui: &Ui, settings: &SliderSettings) -> bool {
        if !ui.windows().gets_input(self.window) {
            return false;
        }
        settings.is_always_on() || (!ui.modifiers().command() && !self.effectively_disabled)
    }

    /// Record active status, logging transitions.
    pub(crate) fn note_active(&mut self, active: bool) {
        if active != self.was_active {
            log::debug!(
                "NumberEntryController (group {}, window {}) {}",
                self.group_id,
                self.window.raw(),
                if active { "active" } else { "inactive" }
            );
            self.was_active = active;
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the minimum field for a single-value slider.
    pub fn draw(
        &mut self,
        ui: &mut Ui,
        value: f32,
        is_closest: bool,
        settings: &SliderSettings,
    ) -> f32 {
        self.draw_field(ui, Field::Minimum, value, is_closest, settings)
    }

    /// Draw both fields of a range slider.
    pub fn draw_range(
        &mut self,
        ui: &mut Ui,
        minimum: f32,
        maximum: f32,
        is_closest: bool,
        settings: &SliderSettings,
    ) -> (f32, f32) {
        let minimum = self.draw_field(ui, Field::Minimum, minimum, is_closest, settings);
        let maximum = self.draw_field(ui, Field::Maximum, maximum, is_closest, settings);
        (minimum, maximum)
    }

    /// Draw both fields of an integer range slider.
    ///
    /// Results are truncated toward zero. The fields hold `f32`, so only
    /// integers within `±2^24` are carried exactly.
    pub fn draw_int_range(
        &mut self,
        ui: &mut Ui,
        minimum: i32,
        maximum: i32,
        is_closest: bool,
        settings: &SliderSettings,
    ) -> (i32, i32) {
        let (minimum, maximum) =
            self.draw_range(ui, minimum as f32, maximum as f32, is_closest, settings);
        (minimum as i32, maximum as i32)
    }

    /// Draw one field and reconcile it with the slider's value.
    ///
    /// A field touched within the interaction window wins over the slider;
    /// otherwise it follows the slider.
    fn draw_field(
        &mut self,
        ui: &mut Ui,
        which: Field,
        external: f32,
        is_closest: bool,
        settings: &SliderSettings,
    ) -> f32 {
        let kind = self.kind;
        let limits = self.limits;
        let now = ui.time();
        let field = self.field_mut(which);

        if let Some(bounds) = field.bounds {
            ui.set_next_control_name(field.control_name.clone());
            if number_field(ui, bounds, field, kind, limits) {
                field.mark_interaction(now);
            }

            let focused = field.is_focused(ui);
            if field.had_focus && !focused {
                commit(field, kind, limits);
            }
            field.had_focus = focused;

            try_focus(ui, field, is_closest);
            if !settings.is_always_on() && field.is_focused(ui) && is_interaction(ui, bounds) {
                field.mark_interaction(now);
            }
        }

        if field.interacted_recently(now) {
            field.value
        } else {
            field.set_value(kind, external);
            external
        }
    }
}

/// Draw the text field for `field`, parsing what the user typed.
///
/// Returns whether the text changed. The raw text is kept while typing; the
/// value only moves when the text is a complete number.
fn number_field(
    ui: &mut Ui,
    bounds: Bounds,
    field: &mut EntryField,
    kind: NumberKind,
    (min, max): (f32, f32),
) -> bool {
    let background = ui.background_color();
    if !field.buffer_valid {
        ui.set_background_color(Color::RED);
    }

    let current = field.buffer.clone().unwrap_or_default();
    let text = ui.text_field(bounds, &current);
    ui.set_background_color(background);

    if text == current {
        return false;
    }

    if is_fully_typed_number(&text, kind) {
        let parsed = parse_value(kind, &text, field.value, min, max, false);
        field.value = parsed.value;
        field.buffer_valid = parsed.valid;
    } else {
        field.buffer_valid = is_partially_or_fully_typed_number(&text, min, kind);
    }
    log::trace!("{}: {:?} (valid: {})", field.control_name, text, field.buffer_valid);
    field.buffer = Some(text);
    true
}

/// Replace the typed text with the canonical form once focus is gone.
fn commit(field: &mut EntryField, kind: NumberKind, (min, max): (f32, f32)) {
    let text = field.buffer.clone().unwrap_or_default();
    let parsed = parse_value(kind, &text, field.value, min, max, true);
    log::trace!("{}: committed {:?} as {}", field.control_name, text, parsed.buffer);
    field.value = parsed.value;
    field.buffer = Some(parsed.buffer);
    field.buffer_valid = parsed.valid;
}

/// Focus the field on a click inside it, if its controller is the closest.
fn try_focus(ui: &mut Ui, field: &EntryField, is_closest: bool) {
    let Some(bounds) = field.bounds else {
        return;
    };
    if !is_closest || field.is_focused(ui) || !ui.was_pressed_in(bounds) {
        return;
    }

    log::debug!("{}: claimed focus", field.control_name);
    ui.focus_control(field.control_name.clone());
    ui.use_event();
}

/// Whether this frame's event counts as an interaction with `bounds`.
///
/// Hovering alone is not an interaction.
fn is_interaction(ui: &Ui, bounds: Bounds) -> bool {
    ui.event().kind().is_interaction() && ui.is_cursor_over(bounds)
}
