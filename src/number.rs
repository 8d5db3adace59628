//! Parsing and validation of typed numbers.
//!
//! Entry fields hold raw text that may be half typed ("-", "3.", ""). These
//! functions decide what such text means for the value behind the field:
//! - `parse_*` turn text into a clamped value plus the canonical buffer
//! - `is_partially_or_fully_typed_number` accepts text that can still become
//!   a number, so intermediate keystrokes are not flagged
//! - `is_fully_typed_number` accepts only complete numbers
//!
//! Nothing here fails loudly; unparseable text is reported through
//! [`Parsed::valid`].

use crate::constants::MAX_TYPED_LENGTH;

/// Whether a field holds whole numbers or decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberKind {
    Integer,
    #[default]
    Float,
}

/// Outcome of parsing a buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// Value after parsing and clamping
    pub value: T,
    /// Text the field should show
    pub buffer: String,
    /// Whether `buffer` is a usable number
    pub valid: bool,
}

/// Clamp without panicking on inverted bounds.
///
/// Below `min` gives `min`, otherwise above `max` gives `max`.
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Integer counterpart of [`clamp_f32`].
pub fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Canonical text for an integer.
pub fn format_integer(value: i32) -> String {
    value.to_string()
}

/// Canonical text for a float: shortest round-trip form, always with a
/// decimal point ("5.0", "2.25").
pub fn format_float(value: f32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Canonical text for a value of the given kind.
pub fn format_value(kind: NumberKind, value: f32) -> String {
    match kind {
        NumberKind::Integer => format_integer(value.round() as i32),
        NumberKind::Float => format_float(value),
    }
}

/// Value a field falls back to: zero, or the bound that excludes zero.
fn reset_value(min: f32, max: f32) -> f32 {
    if min > 0.0 {
        min
    } else if max < 0.0 {
        max
    } else {
        0.0
    }
}

/// Parse integer text.
///
/// - parseable: clamped into `[min, max]`, buffer rewritten canonically
/// - unparseable (including empty) with `force`: reset value, valid buffer
/// - unparseable without `force`: `previous` kept, text kept, not valid
pub fn parse_integer(text: &str, previous: i32, min: i32, max: i32, force: bool) -> Parsed<i32> {
    match text.trim().parse::<i32>() {
        Ok(raw) => {
            let value = clamp_i32(raw, min, max);
            Parsed {
                value,
                buffer: format_integer(value),
                valid: true,
            }
        }
        Err(_) if force => {
            let value = reset_value(min as f32, max as f32) as i32;
            Parsed {
                value,
                buffer: format_integer(value),
                valid: true,
            }
        }
        Err(_) => Parsed {
            value: previous,
            buffer: text.to_string(),
            valid: false,
        },
    }
}

/// Parse float text. Same contract as [`parse_integer`].
///
/// Non-finite spellings ("inf", "NaN") count as unparseable.
pub fn parse_float(text: &str, previous: f32, min: f32, max: f32, force: bool) -> Parsed<f32> {
    match text.trim().parse::<f32>() {
        Ok(raw) if raw.is_finite() => {
            let value = clamp_f32(raw, min, max);
            let value = if value == 0.0 { 0.0 } else { value };
            Parsed {
                value,
                buffer: format_float(value),
                valid: true,
            }
        }
        _ if force => {
            let value = reset_value(min, max);
            Parsed {
                value,
                buffer: format_float(value),
                valid: true,
            }
        }
        _ => Parsed {
            value: previous,
            buffer: text.to_string(),
            valid: false,
        },
    }
}

/// Parse text for a field of the given kind, carrying values as `f32`.
pub fn parse_value(
    kind: NumberKind,
    text: &str,
    previous: f32,
    min: f32,
    max: f32,
    force: bool,
) -> Parsed<f32> {
    match kind {
        NumberKind::Float => parse_float(text, previous, min, max, force),
        NumberKind::Integer => {
            let Parsed {
                value,
                buffer,
                valid,
            } = parse_integer(
                text,
                previous.round() as i32,
                min.ceil() as i32,
                max.floor() as i32,
                force,
            );
            let value = if valid { value as f32 } else { previous };
            Parsed {
                value,
                buffer,
                valid,
            }
        }
    }
}

/// Whether text is a number, or a prefix of one, that may still be typed.
///
/// Accepts the empty string. Rejects a leading `-` when `min >= 0`, a
/// trailing second `-`, the literal `"00"`, and anything longer than
/// [`MAX_TYPED_LENGTH`]. Float fields accept digits, `-` and at most one `.`;
/// integer fields accept a lone `-` or a fully typed integer.
pub fn is_partially_or_fully_typed_number(text: &str, min: f32, kind: NumberKind) -> bool {
    if text.is_empty() {
        return true;
    }
    if text.starts_with('-') && min >= 0.0 {
        return false;
    }
    if text.len() > 1 && text.ends_with('-') {
        return false;
    }
    if text == "00" || text.chars().count() > MAX_TYPED_LENGTH {
        return false;
    }

    match kind {
        NumberKind::Float => {
            let shape_ok = text.chars().filter(|&c| c == '.').count() <= 1
                && text.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.');
            shape_ok || is_fully_typed_number(text, kind)
        }
        NumberKind::Integer => text == "-" || is_fully_typed_number(text, kind),
    }
}

/// Whether text is a complete number.
///
/// Integers: an optional leading `-` followed by at least one digit.
/// Floats: the same, optionally followed by `.` and at least one digit.
pub fn is_fully_typed_number(text: &str, kind: NumberKind) -> bool {
    fn is_signed_digits(s: &str) -> bool {
        let digits = s.strip_prefix('-').unwrap_or(s);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    }

    match kind {
        NumberKind::Integer => is_signed_digits(text),
        NumberKind::Float => match text.split_once('.') {
            None => is_signed_digits(text),
            Some((whole, fraction)) => {
                is_signed_digits(whole)
                    && !fraction.is_empty()
                    && fraction.chars().all(|c| c.is_ascii_digit())
            }
        },
    }
}
