//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::Duration;

use crate::calculator::{Calculator, Key};

use super::widgets::{Notification, NotificationQueue};

/// How long key hints stay on screen
const HINT_DURATION: Duration = Duration::from_millis(1500);

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// The calculator engine
    pub calculator: Calculator,

    /// Calculator notices waiting to be shown
    pub notifications: NotificationQueue,

    /// Most recent key, highlighted on the keypad
    pub last_key: Option<Key>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a calculator key, turning any notice into a notification
    pub fn press(&mut self, key: Key) {
        self.last_key = Some(key);
        if let Err(notice) = self.calculator.press(key) {
            self.notifications.clear();
            self.notifications.push(Notification::error(notice.to_string()));
        }
    }

    /// Show a short-lived hint, replacing whatever is on the notification line
    pub fn hint(&mut self, message: impl Into<String>) {
        self.notifications.clear();
        self.notifications
            .push(Notification::info(message).with_duration(HINT_DURATION));
    }

    /// Text for the calculator display
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Pending operator and running total, shown above the display
    pub fn memory_line(&self) -> String {
        match self.calculator.pending_operator() {
            Some(op) => format!(
                "{} {}",
                crate::calculator::format_number(self.calculator.accumulator()),
                op
            ),
            None => String::new(),
        }
    }

    /// Drop expired notifications
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_press_updates_display() {
        let mut app = App::new();
        app.press(Key::Digit('4'));
        app.press(Key::Operator(Operator::Mul));
        assert_eq!(app.memory_line(), "4 ×");

        app.press(Key::Digit('5'));
        app.press(Key::Equals);
        assert_eq!(app.display(), "20");
        assert_eq!(app.memory_line(), "");
        assert_eq!(app.last_key, Some(Key::Equals));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_notice_becomes_notification() {
        let mut app = App::new();
        for key in [
            Key::Digit('1'),
            Key::Operator(Operator::Div),
            Key::Digit('0'),
            Key::Equals,
        ] {
            app.press(key);
        }

        assert_eq!(app.display(), "0");
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Cannot divide by zero!"
        );
    }
}
