//! Better Sliders - type-in entry fields for immediate-mode sliders
//!
//! Adds text fields to numeric sliders so exact values can be typed instead
//! of dragged. Fields fade in as the cursor approaches a slider, keep their
//! identity across frames without a retained widget tree, and only the field
//! nearest the cursor may take keyboard focus.

pub mod config;
pub mod constants;
pub mod controller;
pub mod focus;
pub mod hooks;
pub mod hysteresis;
pub mod number;
pub mod registry;

pub use config::{ConfigError, DisplayStyle, LogLevel, SettingsFile, SliderSettings, TieBreak};
pub use controller::{EntryField, Field, NumberEntryController};
pub use focus::{effective_distance, is_controller_closest};
pub use hooks::{FloatRange, IntRange, RangeLayout, SliderLayout, SliderOverlay};
pub use hysteresis::fade_alpha;
pub use number::{NumberKind, Parsed};
pub use registry::{ControllerId, ControllerRegistry};
