//! Event handler for the TUI
//!
//! Maps key presses onto calculator keys. `q` and `Esc` quit; Enter is `=`
//! and Delete/Backspace clear, since the keypad has no backspace.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calculator::Key;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Enter => app.press(Key::Equals),
        KeyCode::Delete | KeyCode::Backspace => app.press(Key::Clear),
        KeyCode::Char(c) => {
            match Key::from_char(c) {
                Some(calc_key) => app.press(calc_key),
                None => app.hint(format!("'{}' is not a calculator key", c)),
            }
        }
        _ => {}
    }
}
