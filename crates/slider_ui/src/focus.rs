//! Name-based keyboard focus.
//!
//! Controls are re-declared every frame, so focus is tracked by the name a
//! control registers right before it draws, not by object identity.

/// Caret and selection of the focused text control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    /// Cursor position (character index)
    pub cursor: usize,
    /// Selection range (anchor, cursor) if any
    pub selection: Option<(usize, usize)>,
}

impl Caret {
    /// Normalized selection range, if a non-empty selection exists.
    pub fn selected_range(&self) -> Option<(usize, usize)> {
        self.selection
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|(start, end)| start != end)
    }
}

/// Keyboard focus state for one host.
#[derive(Debug, Clone, Default)]
pub struct KeyboardFocus {
    /// Name the next drawn control will take
    next_name: Option<String>,
    /// Name of the control holding focus
    focused: Option<String>,
    /// Caret of the focused control
    caret: Caret,
    /// Select the whole text next time the focused control draws
    select_all_pending: bool,
}

impl KeyboardFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the next control that draws.
    pub fn set_next_control_name(&mut self, name: impl Into<String>) {
        self.next_name = Some(name.into());
    }

    /// Take the pending control name (consumed by the next control).
    pub fn take_next_control_name(&mut self) -> Option<String> {
        self.next_name.take()
    }

    /// Name of the focused control, if any.
    pub fn focused_control(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Whether the named control holds focus.
    pub fn is_focused(&self, name: &str) -> bool {
        self.focused.as_deref() == Some(name)
    }

    /// Move focus to the named control. Its text is selected on next draw.
    pub fn focus_control(&mut self, name: impl Into<String>) {
        let name = name.into();
        log::trace!("focus -> {}", name);
        self.focused = Some(name);
        self.caret = Caret::default();
        self.select_all_pending = true;
    }

    /// Drop keyboard focus entirely.
    pub fn clear(&mut self) {
        if let Some(name) = self.focused.take() {
            log::trace!("focus cleared (was {})", name);
        }
        self.caret = Caret::default();
        self.select_all_pending = false;
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn caret_mut(&mut self) -> &mut Caret {
        &mut self.caret
    }

    /// Consume the pending select-all request.
    pub(crate) fn take_select_all(&mut self) -> bool {
        std::mem::take(&mut self.select_all_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_by_name() {
        let mut focus = KeyboardFocus::new();
        assert!(focus.focused_control().is_none());

        focus.focus_control("field-a");
        assert!(focus.is_focused("field-a"));
        assert!(!focus.is_focused("field-b"));

        focus.clear();
        assert!(focus.focused_control().is_none());
    }

    #[test]
    fn test_next_control_name_is_consumed_once() {
        let mut focus = KeyboardFocus::new();
        focus.set_next_control_name("field-a");
        assert_eq!(focus.take_next_control_name().as_deref(), Some("field-a"));
        assert!(focus.take_next_control_name().is_none());
    }

    #[test]
    fn test_selected_range_is_normalized() {
        let caret = Caret {
            cursor: 1,
            selection: Some((4, 1)),
        };
        assert_eq!(caret.selected_range(), Some((1, 4)));

        let empty = Caret {
            cursor: 2,
            selection: Some((2, 2)),
        };
        assert_eq!(empty.selected_range(), None);
    }
}
