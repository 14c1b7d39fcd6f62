//! Pocket calculator
//!
//! The [`Calculator`] engine holds all arithmetic state; [`Key`] maps keypad
//! presses onto it. The CLI feeds whole key sequences through
//! [`Calculator::press`], the TUI feeds one key per keystroke.

mod engine;
mod key;

pub use engine::{format_number, CalcError, CalcState, Calculator};
pub use key::{parse_keys, Key, Operator};
