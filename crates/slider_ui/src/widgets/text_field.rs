//! Immediate-mode single-line text field.
//!
//! The field is declared every frame with the text to show and returns the
//! (possibly edited) text. It only edits while it holds keyboard focus and
//! never focuses itself: whoever draws it decides when it gets focus.

use crate::event::{Event, KeyCode, KeyModifiers};
use crate::focus::Caret;
use crate::layout::Bounds;
use crate::ui::{DrawCommand, Ui};

impl Ui {
    /// Draw a text field and apply the current event to it if focused.
    ///
    /// The field takes the name set with [`Ui::set_next_control_name`]; an
    /// unnamed field can never be focused.
    pub fn text_field(&mut self, bounds: Bounds, text: &str) -> String {
        let name = self.focus_mut().take_next_control_name();
        let focused = name
            .as_deref()
            .is_some_and(|name| self.focus().is_focused(name));

        let mut text = text.to_string();
        if focused {
            let len = text.chars().count();
            if self.focus_mut().take_select_all() {
                *self.focus_mut().caret_mut() = Caret {
                    cursor: len,
                    selection: Some((0, len)),
                };
            }
            let caret = self.focus_mut().caret_mut();
            caret.cursor = caret.cursor.min(len);

            let event = self.event().clone();
            let mut caret = self.focus().caret();
            match apply_event(&mut text, &mut caret, &event) {
                Edit::Ignored => {}
                Edit::Consumed => {
                    *self.focus_mut().caret_mut() = caret;
                    self.use_event();
                }
                Edit::Blur => {
                    log::debug!("TextField: {:?} blurred by key", name);
                    self.clear_focus();
                    self.use_event();
                }
            }
        }

        let command = DrawCommand::TextField {
            bounds,
            text: text.clone(),
            color: self.color(),
            background: self.background_color(),
            focused,
        };
        self.push(command);
        text
    }
}

enum Edit {
    Ignored,
    Consumed,
    Blur,
}

fn apply_event(text: &mut String, caret: &mut Caret, event: &Event) -> Edit {
    match event {
        Event::TextInput { text: typed } => {
            for c in typed.chars().filter(|c| !c.is_control()) {
                insert_char(text, caret, c);
            }
            Edit::Consumed
        }
        Event::KeyPress { key, modifiers } => apply_key(text, caret, *key, *modifiers),
        _ => Edit::Ignored,
    }
}

fn apply_key(text: &mut String, caret: &mut Caret, key: KeyCode, modifiers: KeyModifiers) -> Edit {
    let len = text.chars().count();
    match key {
        KeyCode::Backspace => {
            if !delete_selection(text, caret) && caret.cursor > 0 {
                caret.cursor -= 1;
                remove_char(text, caret.cursor);
            }
        }
        KeyCode::Delete => {
            if !delete_selection(text, caret) && caret.cursor < len {
                remove_char(text, caret.cursor);
            }
        }
        KeyCode::Left => {
            let target = match caret.selected_range() {
                Some((start, _)) if !modifiers.shift => start,
                _ => caret.cursor.saturating_sub(1),
            };
            move_cursor(caret, target, modifiers.shift);
        }
        KeyCode::Right => {
            let target = match caret.selected_range() {
                Some((_, end)) if !modifiers.shift => end,
                _ => (caret.cursor + 1).min(len),
            };
            move_cursor(caret, target, modifiers.shift);
        }
        KeyCode::Home => move_cursor(caret, 0, modifiers.shift),
        KeyCode::End => move_cursor(caret, len, modifiers.shift),
        KeyCode::A if modifiers.command() => {
            caret.selection = Some((0, len));
            caret.cursor = len;
        }
        KeyCode::Enter | KeyCode::Escape => return Edit::Blur,
        _ => return Edit::Ignored,
    }
    Edit::Consumed
}

fn move_cursor(caret: &mut Caret, target: usize, extend: bool) {
    if extend {
        let anchor = caret.selection.map(|(anchor, _)| anchor).unwrap_or(caret.cursor);
        caret.selection = Some((anchor, target));
    } else {
        caret.selection = None;
    }
    caret.cursor = target;
}

/// Byte offset of a character index.
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn insert_char(text: &mut String, caret: &mut Caret, c: char) {
    delete_selection(text, caret);
    let at = byte_index(text, caret.cursor);
    text.insert(at, c);
    caret.cursor += 1;
}

fn remove_char(text: &mut String, char_index: usize) {
    let at = byte_index(text, char_index);
    if at < text.len() {
        text.remove(at);
    }
}

/// Delete the selected range. Returns false if nothing was selected.
fn delete_selection(text: &mut String, caret: &mut Caret) -> bool {
    let Some((start, end)) = caret.selected_range() else {
        caret.selection = None;
        return false;
    };
    let (from, to) = (byte_index(text, start), byte_index(text, end));
    text.replace_range(from..to, "");
    caret.cursor = start;
    caret.selection = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const FIELD: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 60.0,
        height: 14.0,
    };

    fn frame(ui: &mut Ui, event: Event, text: &str) -> String {
        ui.begin_frame(event);
        ui.set_next_control_name("field");
        ui.text_field(FIELD, text)
    }

    fn typed(text: &str) -> Event {
        Event::TextInput {
            text: text.to_string(),
        }
    }

    fn key(key: KeyCode) -> Event {
        Event::KeyPress {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_unfocused_field_ignores_input() {
        let mut ui = Ui::new(ManualClock::new());
        let out = frame(&mut ui, typed("7"), "10");
        assert_eq!(out, "10");
        assert_eq!(ui.event(), &typed("7"));
    }

    #[test]
    fn test_focus_selects_all_then_typing_replaces() {
        let mut ui = Ui::new(ManualClock::new());
        ui.focus_control("field");
        let out = frame(&mut ui, typed("5"), "10");
        assert_eq!(out, "5");
        assert_eq!(ui.event(), &Event::Used);

        let out = frame(&mut ui, typed("0"), &out);
        assert_eq!(out, "50");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut ui = Ui::new(ManualClock::new());
        ui.focus_control("field");
        // First frame only applies select-all
        let text = frame(&mut ui, Event::Repaint, "123");
        let text = frame(&mut ui, key(KeyCode::End), &text);
        let text = frame(&mut ui, key(KeyCode::Backspace), &text);
        assert_eq!(text, "12");
        let text = frame(&mut ui, key(KeyCode::Home), &text);
        let text = frame(&mut ui, key(KeyCode::Delete), &text);
        assert_eq!(text, "2");
    }

    #[test]
    fn test_cursor_movement_inserts_in_middle() {
        let mut ui = Ui::new(ManualClock::new());
        ui.focus_control("field");
        let text = frame(&mut ui, Event::Repaint, "15");
        let text = frame(&mut ui, key(KeyCode::Left), &text);
        // Collapsing the select-all selection lands at its start
        let text = frame(&mut ui, key(KeyCode::Right), &text);
        let text = frame(&mut ui, typed("."), &text);
        assert_eq!(text, "1.5");
    }

    #[test]
    fn test_enter_blurs() {
        let mut ui = Ui::new(ManualClock::new());
        ui.focus_control("field");
        frame(&mut ui, key(KeyCode::Enter), "3");
        assert!(ui.focused_control().is_none());
    }

    #[test]
    fn test_field_is_recorded_as_draw_command() {
        let mut ui = Ui::new(ManualClock::new());
        frame(&mut ui, Event::Repaint, "42");
        let commands = ui.end_frame();
        assert!(matches!(
            commands.as_slice(),
            [DrawCommand::TextField { text, focused: false, .. }] if text == "42"
        ));
    }
}
