//! Global constants for the slider overlays

/// Default distance at which the overlay starts fading out
pub const DEFAULT_HEURISTICS_BEGIN_DISTANCE: f32 = 35.0;

/// Default distance at which the overlay is fully hidden
pub const DEFAULT_HEURISTICS_END_DISTANCE: f32 = 110.0;

/// Seconds after an interaction during which typed values win over the slider
pub const INTERACTION_WINDOW_SECS: f64 = 1.0;

/// Longest text accepted while a number is being typed
pub const MAX_TYPED_LENGTH: usize = 12;

/// Effective distance of a controller with no entry rectangle
pub const UNCONFIGURED_DISTANCE: f32 = 10_000.0;

/// Spacing between an entry field and the slider it belongs to
pub const ENTRY_SPACING: f32 = 5.0;

/// Width of the gap between the two fields of a range slider
pub const RANGE_GAP_WIDTH: f32 = 10.0;
