//! Per-frame immediate-mode context.
//!
//! Every control is re-declared each frame through [`Ui`]; nothing here keeps
//! references to controls between frames. What does persist (focus, the
//! window stack, the clock) is keyed by names and ids.

use crate::clock::Clock;
use crate::color::Color;
use crate::event::{Event, KeyModifiers, MouseButton};
use crate::focus::KeyboardFocus;
use crate::layout::{Bounds, Point};
use crate::text_metrics::FontSize;
use crate::window::{WindowId, WindowStack};

/// A draw command emitted during the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    TextField {
        bounds: Bounds,
        text: String,
        color: Color,
        background: Color,
        focused: bool,
    },
    Slider {
        bounds: Bounds,
        /// Thumb position in `0.0..=1.0`
        fraction: f32,
        color: Color,
    },
}

/// Immediate-mode frame context.
pub struct Ui {
    event: Event,
    /// Event the frame started with, kept after `event` is used
    frame_event: Event,
    cursor: Point,
    modifiers: KeyModifiers,
    focus: KeyboardFocus,
    windows: WindowStack,
    current_window: WindowId,
    clock: Box<dyn Clock>,
    color: Color,
    background_color: Color,
    font: FontSize,
    next_control_id: u64,
    commands: Vec<DrawCommand>,
}

impl Ui {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            event: Event::Repaint,
            frame_event: Event::Repaint,
            cursor: Point::zero(),
            modifiers: KeyModifiers::NONE,
            focus: KeyboardFocus::new(),
            windows: WindowStack::new(),
            current_window: WindowId::ROOT,
            clock: Box::new(clock),
            color: Color::WHITE,
            background_color: Color::WHITE,
            font: FontSize::default(),
            next_control_id: 0,
            commands: Vec::new(),
        }
    }

    // =========================================================================
    // Frame lifecycle
    // =========================================================================

    /// Start a frame for `event`.
    ///
    /// Cursor and modifier state are taken from the event when it carries them.
    pub fn begin_frame(&mut self, event: Event) {
        if let Some(position) = event.position() {
            self.cursor = position;
        }
        if let Some(modifiers) = event.modifiers() {
            self.modifiers = modifiers;
        }
        self.frame_event = event.clone();
        self.event = event;
        self.current_window = WindowId::ROOT;
        self.next_control_id = 0;
        self.color = Color::WHITE;
        self.background_color = Color::WHITE;
        self.font = FontSize::default();
        self.commands.clear();
    }

    /// Finish the frame and hand back what was drawn.
    pub fn end_frame(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Start drawing the contents of a window. Control ids restart per window.
    pub fn begin_window(&mut self, id: WindowId) {
        self.current_window = id;
        self.next_control_id = 0;
    }

    /// Return to drawing the root window.
    pub fn end_window(&mut self) {
        self.current_window = WindowId::ROOT;
    }

    /// The window whose contents are being drawn.
    pub fn current_window(&self) -> WindowId {
        self.current_window
    }

    pub fn windows(&self) -> &WindowStack {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowStack {
        &mut self.windows
    }

    /// Next id from the control-id generator.
    ///
    /// Sequential within a window pass, so the n-th call in a window gets the
    /// same id every frame as long as the draw order is stable.
    pub fn next_control_id(&mut self) -> u64 {
        let id = self.next_control_id;
        self.next_control_id += 1;
        id
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// The event this frame started with, even if something has used it.
    pub fn frame_event(&self) -> &Event {
        &self.frame_event
    }

    /// Whether this frame started with a left mouse press inside `bounds`.
    pub fn was_pressed_in(&self, bounds: Bounds) -> bool {
        matches!(
            self.frame_event,
            Event::MousePress { button: MouseButton::Left, position, .. } if bounds.contains(position)
        )
    }

    /// Mark the current event as consumed.
    pub fn use_event(&mut self) {
        self.event = Event::Used;
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn is_cursor_over(&self, bounds: Bounds) -> bool {
        bounds.contains(self.cursor)
    }

    /// Modifier keys currently held.
    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Unscaled real time in seconds.
    pub fn time(&self) -> f64 {
        self.clock.unscaled_time()
    }

    // =========================================================================
    // Keyboard focus
    // =========================================================================

    pub fn set_next_control_name(&mut self, name: impl Into<String>) {
        self.focus.set_next_control_name(name);
    }

    pub fn focused_control(&self) -> Option<&str> {
        self.focus.focused_control()
    }

    pub fn focus_control(&mut self, name: impl Into<String>) {
        self.focus.focus_control(name);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }

    pub fn focus(&self) -> &KeyboardFocus {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut KeyboardFocus {
        &mut self.focus
    }

    // =========================================================================
    // Drawing state
    // =========================================================================

    /// Tint applied to everything drawn next.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Background tint for fields drawn next.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    pub fn font(&self) -> FontSize {
        self.font
    }

    pub fn set_font(&mut self, font: FontSize) {
        self.font = font;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
