//! Frame-to-frame identity of entry controllers.
//!
//! Sliders are re-declared every frame, so nothing ties this frame's slider
//! to last frame's. The registry recovers the link from three keys:
//! the window being drawn, the group id handed out by the host's control-id
//! generator, and overlap between the slider's rectangle and the entry
//! rectangles remembered on the controller. Overlap rather than equality
//! tolerates rectangles that shift by a fraction of a pixel between frames.
//!
//! Controllers live in a slot map; per-window lists keep insertion order.

use std::collections::HashMap;

use slider_ui::{Bounds, Ui, WindowId};
use slotmap::{SlotMap, new_key_type};

use crate::config::SliderSettings;
use crate::controller::NumberEntryController;

new_key_type! {
    /// Stable handle to a controller in a [`ControllerRegistry`].
    pub struct ControllerId;
}

/// Owns every entry controller, grouped by window.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: SlotMap<ControllerId, NumberEntryController>,
    windows: HashMap<WindowId, Vec<ControllerId>>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find or create the controller for a slider drawn at `region`.
    ///
    /// Takes one id from the control-id generator, so it must be called
    /// exactly once per slider draw, in draw order.
    pub fn controller_for_position(&mut self, ui: &mut Ui, region: Bounds) -> ControllerId {
        let group_id = ui.next_control_id();
        let window = ui.current_window();

        let existing = self.windows.get(&window).and_then(|ids| {
            ids.iter().copied().find(|id| {
                self.controllers
                    .get(*id)
                    .is_some_and(|c| c.group_id() == group_id && c.overlaps(&region))
            })
        });
        if let Some(id) = existing {
            return id;
        }

        let id = self
            .controllers
            .insert(NumberEntryController::new(window, group_id));
        self.windows.entry(window).or_default().push(id);
        log::debug!(
            "ControllerRegistry: new controller for group {} in window {} ({} total)",
            group_id,
            window.raw(),
            self.controllers.len()
        );
        id
    }

    pub fn get(&self, id: ControllerId) -> Option<&NumberEntryController> {
        self.controllers.get(id)
    }

    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut NumberEntryController> {
        self.controllers.get_mut(id)
    }

    /// Controllers registered for `window`, in insertion order.
    pub fn controllers_for_window(&self, window: WindowId) -> &[ControllerId] {
        self.windows.get(&window).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop every controller in the current window whose rectangles overlap
    /// `region`.
    pub fn remove_controllers_for_position(&mut self, ui: &Ui, region: Bounds) {
        let Some(ids) = self.windows.get_mut(&ui.current_window()) else {
            return;
        };
        let controllers = &mut self.controllers;
        let before = ids.len();
        ids.retain(|id| {
            let overlapping = controllers.get(*id).is_some_and(|c| c.overlaps(&region));
            if overlapping {
                controllers.remove(*id);
            }
            !overlapping
        });
        log::debug!(
            "ControllerRegistry: evicted {} controller(s) at {:?} in window {}",
            before - ids.len(),
            region,
            ui.current_window().raw()
        );
    }

    /// Drop every controller of a closed window.
    pub fn remove_controllers_for_window(&mut self, window: WindowId) {
        let Some(ids) = self.windows.remove(&window) else {
            return;
        };
        for id in &ids {
            self.controllers.remove(*id);
        }
        log::debug!(
            "ControllerRegistry: evicted {} controller(s) of window {}",
            ids.len(),
            window.raw()
        );
    }

    /// Active controllers of the window being drawn, in insertion order.
    pub fn active_controllers(&self, ui: &Ui, settings: &SliderSettings) -> Vec<ControllerId> {
        self.controllers_for_window(ui.current_window())
            .iter()
            .copied()
            .filter(|id| {
                self.controllers
                    .get(*id)
                    .is_some_and(|c| c.is_currently_active(ui, settings))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slider_ui::{Event, ManualClock};

    fn frame(ui: &mut Ui) {
        ui.begin_frame(Event::Repaint);
    }

    /// Resolve a controller and give it an entry rect, as a before-draw hook would.
    fn resolve(registry: &mut ControllerRegistry, ui: &mut Ui, region: Bounds) -> ControllerId {
        let id = registry.controller_for_position(ui, region);
        if let Some(c) = registry.get_mut(id) {
            c.set_minimum_entry_rect(Bounds::new(region.x, region.y, region.width / 4.0, 14.0));
        }
        id
    }

    #[test]
    fn test_same_slider_same_controller() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();
        let region = Bounds::new(10.0, 10.0, 200.0, 24.0);

        frame(&mut ui);
        let first = resolve(&mut registry, &mut ui, region);
        frame(&mut ui);
        // Sub-pixel shift still matches
        let second = resolve(&mut registry, &mut ui, Bounds::new(10.3, 10.2, 200.0, 24.0));
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_sliders_get_distinct_controllers() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();

        frame(&mut ui);
        let a = resolve(&mut registry, &mut ui, Bounds::new(0.0, 0.0, 200.0, 24.0));
        let b = resolve(&mut registry, &mut ui, Bounds::new(0.0, 40.0, 200.0, 24.0));
        assert_ne!(a, b);

        frame(&mut ui);
        assert_eq!(resolve(&mut registry, &mut ui, Bounds::new(0.0, 0.0, 200.0, 24.0)), a);
        assert_eq!(resolve(&mut registry, &mut ui, Bounds::new(0.0, 40.0, 200.0, 24.0)), b);
        assert_eq!(
            registry.controllers_for_window(WindowId::ROOT),
            &[a, b][..]
        );
    }

    #[test]
    fn test_different_group_gets_new_controller() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();
        let region = Bounds::new(0.0, 0.0, 200.0, 24.0);

        frame(&mut ui);
        let a = resolve(&mut registry, &mut ui, region);
        frame(&mut ui);
        // Burn an id so the same rectangle lands in another group
        ui.next_control_id();
        let b = resolve(&mut registry, &mut ui, region);
        assert_ne!(a, b);
    }

    #[test]
    fn test_windows_are_separate() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();
        let region = Bounds::new(0.0, 0.0, 200.0, 24.0);
        let window = ui.windows_mut().open("Options", false);

        frame(&mut ui);
        let root = resolve(&mut registry, &mut ui, region);
        ui.begin_window(window);
        let other = resolve(&mut registry, &mut ui, region);
        ui.end_window();
        assert_ne!(root, other);
        assert_eq!(registry.get(other).map(|c| c.window()), Some(window));

        registry.remove_controllers_for_window(window);
        assert!(registry.get(other).is_none());
        assert!(registry.controllers_for_window(window).is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_for_position() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();

        frame(&mut ui);
        let a = resolve(&mut registry, &mut ui, Bounds::new(0.0, 0.0, 200.0, 24.0));
        let b = resolve(&mut registry, &mut ui, Bounds::new(0.0, 40.0, 200.0, 24.0));

        registry.remove_controllers_for_position(&ui, Bounds::new(0.0, 0.0, 10.0, 10.0));
        assert!(registry.get(a).is_none());
        assert!(registry.get(b).is_some());
        assert_eq!(registry.controllers_for_window(WindowId::ROOT), &[b][..]);
    }

    #[test]
    fn test_active_controllers_skip_disabled() {
        let mut ui = Ui::new(ManualClock::new());
        let mut registry = ControllerRegistry::new();
        let settings = SliderSettings::default();

        frame(&mut ui);
        let a = resolve(&mut registry, &mut ui, Bounds::new(0.0, 0.0, 200.0, 24.0));
        let b = resolve(&mut registry, &mut ui, Bounds::new(0.0, 40.0, 200.0, 24.0));
        if let Some(c) = registry.get_mut(a) {
            c.effectively_disabled = true;
        }
        assert_eq!(registry.active_controllers(&ui, &settings), vec![b]);
    }
}
