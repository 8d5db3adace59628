use crate::layout::Point;

/// Input events delivered to one frame of the immediate-mode pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: Point,
        modifiers: KeyModifiers,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: Point,
        modifiers: KeyModifiers,
    },
    /// Mouse moved.
    MouseMove { position: Point },
    /// Keyboard key pressed.
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Keyboard key released.
    KeyRelease {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Typed characters.
    TextInput { text: String },
    /// An event some earlier control already consumed.
    Used,
    /// Plain redraw with no input attached.
    Repaint,
}

impl Event {
    /// Classify the event the way interaction tracking needs it.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Used => EventKind::Used,
            Event::MousePress { .. } => EventKind::MouseDown,
            Event::KeyPress { .. } | Event::TextInput { .. } => EventKind::KeyDown,
            _ => EventKind::Other,
        }
    }

    /// Cursor position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position } => Some(*position),
            _ => None,
        }
    }

    /// Modifier state carried by the event, if any.
    pub fn modifiers(&self) -> Option<KeyModifiers> {
        match self {
            Event::MousePress { modifiers, .. }
            | Event::MouseRelease { modifiers, .. }
            | Event::KeyPress { modifiers, .. }
            | Event::KeyRelease { modifiers, .. } => Some(*modifiers),
            _ => None,
        }
    }
}

/// Coarse event classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Used,
    MouseDown,
    KeyDown,
    Other,
}

impl EventKind {
    /// Whether the event counts as an explicit interaction. Hover does not.
    pub fn is_interaction(self) -> bool {
        matches!(self, EventKind::Used | EventKind::MouseDown | EventKind::KeyDown)
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (the subset text fields care about).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Home,
    End,
    A,
    Control,
    Shift,
    Other(u32),
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: KeyModifiers = KeyModifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Control on most platforms, command on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        let press = Event::MousePress {
            button: MouseButton::Left,
            position: Point::zero(),
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(press.kind(), EventKind::MouseDown);
        assert_eq!(
            Event::TextInput {
                text: "4".to_string()
            }
            .kind(),
            EventKind::KeyDown
        );
        assert_eq!(Event::Used.kind(), EventKind::Used);
        assert_eq!(
            Event::MouseMove {
                position: Point::zero()
            }
            .kind(),
            EventKind::Other
        );
    }

    #[test]
    fn test_hover_is_not_interaction() {
        assert!(!EventKind::Other.is_interaction());
        assert!(EventKind::Used.is_interaction());
        assert!(EventKind::MouseDown.is_interaction());
        assert!(EventKind::KeyDown.is_interaction());
    }

    #[test]
    fn test_command_modifier() {
        assert!(!KeyModifiers::NONE.command());
        assert!(KeyModifiers::CTRL.command());
        let meta = KeyModifiers {
            meta: true,
            ..KeyModifiers::default()
        };
        assert!(meta.command());
    }
}
