//! Scripted headless session: one float range slider, driven by synthetic
//! input, with the overlay's decisions visible in the log.
//!
//! Settings may be passed as the path of a JSON settings file.

use better_sliders::{FloatRange, SettingsFile, SliderOverlay};
use slider_ui::{Bounds, Event, KeyCode, KeyModifiers, ManualClock, MouseButton, Point, Ui};

fn load_settings() -> SettingsFile {
    let Some(path) = std::env::args().nth(1) else {
        return SettingsFile::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match SettingsFile::from_json(&json) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to load settings from {}: {}", path, e);
                SettingsFile::default()
            }
        },
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            SettingsFile::default()
        }
    }
}

fn main() {
    let file = load_settings();
    env_logger::Builder::new()
        .filter_level(file.settings.log_level.to_level_filter())
        .init();

    let clock = ManualClock::new();
    let mut ui = Ui::new(clock.clone());
    let mut overlay = SliderOverlay::new(file.settings);

    let rect = Bounds::new(20.0, 20.0, 220.0, 30.0);
    let (lower, upper) = (0.0, 100.0);
    let mut range = FloatRange::new(10.0, 90.0);

    let script = [
        Event::MouseMove {
            position: Point::new(130.0, 300.0),
        },
        Event::MouseMove {
            position: Point::new(130.0, 80.0),
        },
        Event::MousePress {
            button: MouseButton::Left,
            position: Point::new(30.0, 25.0),
            modifiers: KeyModifiers::NONE,
        },
        Event::TextInput {
            text: "2".to_string(),
        },
        Event::TextInput {
            text: "5".to_string(),
        },
        Event::KeyPress {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        },
        Event::MouseMove {
            position: Point::new(130.0, 400.0),
        },
    ];

    for event in script {
        clock.advance(0.1);
        ui.begin_frame(event);

        let layout = overlay.before_float_range(&mut ui, rect, range, lower, upper);
        let (low, high) = ui.range_slider(layout.slider, (range.min, range.max), lower, upper);
        range = overlay.after_float_range(&mut ui, &layout, FloatRange::new(low, high), lower, upper);

        let commands = ui.end_frame();
        log::info!(
            "range {:.2}..{:.2} ({} draw command(s), focus {:?})",
            range.min,
            range.max,
            commands.len(),
            ui.focused_control()
        );
    }
}
