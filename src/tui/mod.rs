//! Terminal User Interface module
//!
//! A calculator keypad built with ratatui: a display line, the keypad grid
//! and a notification line for calculator notices.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
