//! slider_ui - A small immediate-mode UI host
//!
//! Provides the host-side pieces slider overlays are drawn against: geometry,
//! input events, name-based keyboard focus, a window stack, a real-time clock
//! and a per-frame [`Ui`] context with text-field and slider primitives.

mod clock;
mod color;
mod event;
mod focus;
mod layout;
mod text_metrics;
mod ui;
mod widgets;
mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::Color;
pub use event::{Event, EventKind, KeyCode, KeyModifiers, MouseButton};
pub use focus::{Caret, KeyboardFocus};
pub use layout::{Bounds, Point};
pub use text_metrics::{FontSize, TextMetrics};
pub use ui::{DrawCommand, Ui};
pub use window::{WindowId, WindowStack};
