//! Window stack: identity and input routing for host windows.

/// Opaque identity of a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// The root window, which always exists.
    pub const ROOT: WindowId = WindowId(0);

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct WindowEntry {
    id: WindowId,
    title: String,
    /// Modal windows block input to everything beneath them
    modal: bool,
}

/// Ordered stack of open windows, bottom first.
#[derive(Debug, Clone)]
pub struct WindowStack {
    windows: Vec<WindowEntry>,
    next_id: u64,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStack {
    pub fn new() -> Self {
        Self {
            windows: vec![WindowEntry {
                id: WindowId::ROOT,
                title: "root".to_string(),
                modal: false,
            }],
            next_id: 1,
        }
    }

    /// Open a window on top of the stack.
    pub fn open(&mut self, title: impl Into<String>, modal: bool) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        let title = title.into();
        log::debug!("Opened window {:?} '{}' (modal: {})", id, title, modal);
        self.windows.push(WindowEntry { id, title, modal });
        id
    }

    /// Close a window. Returns false if it was not open or is the root.
    pub fn close(&mut self, id: WindowId) -> bool {
        if id == WindowId::ROOT {
            return false;
        }
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        let closed = self.windows.remove(index);
        log::debug!("Closed window {:?} '{}'", id, closed.title);
        true
    }

    /// Whether the window is still open.
    pub fn is_alive(&self, id: WindowId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Whether the window currently receives input.
    ///
    /// Dead windows never do; live ones do unless a modal window sits above.
    pub fn gets_input(&self, id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        !self.windows[index + 1..].iter().any(|w| w.modal)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
