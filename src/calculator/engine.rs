//! Calculator engine
//!
//! A pocket-calculator state machine: the operand being typed, a running
//! total and at most one pending operator. Operators are applied strictly
//! left to right; pressing an operator while another is pending evaluates the
//! pending one first.
//!
//! Failures never leave the engine half-updated. A failing operation resets
//! the engine to its initial state and returns the [`CalcError`] describing
//! why, which the caller shows as a notice.

use super::key::{Key, Operator};

/// Results are rounded to this many decimal places
const DECIMAL_PLACES: i32 = 8;

/// Above this magnitude every f64 is integral, so rounding is skipped
const ROUNDING_LIMIT: f64 = 1e15;

/// Notices raised by the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,
    #[error("Invalid input: '{0}'")]
    InvalidInput(String),
    #[error("Result is out of range")]
    OutOfRange,
}

/// Whether an operator is waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcState {
    NoOperatorPending,
    OperatorPending,
}

/// The calculator engine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Digits typed since the last operator or clear
    current_input: String,
    /// Running total
    accumulator: f64,
    pending: Option<Operator>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            accumulator: 0.0,
            pending: None,
        }
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn state(&self) -> CalcState {
        if self.pending.is_some() {
            CalcState::OperatorPending
        } else {
            CalcState::NoOperatorPending
        }
    }

    /// Text for the display
    ///
    /// Right after an operator the typed operand is empty, so the running
    /// total is shown instead.
    pub fn display(&self) -> String {
        if self.current_input.is_empty() {
            format_number(self.accumulator)
        } else {
            self.current_input.clone()
        }
    }

    /// Dispatch a single key press
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(d) => {
                self.input_digit(d);
                Ok(())
            }
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate(),
            Key::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Key::Percent => self.percent(),
            Key::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Append a digit or decimal point to the operand
    ///
    /// Anything other than `0`-`9` or `.` is ignored, as is a second decimal
    /// point.
    pub fn input_digit(&mut self, d: char) {
        match d {
            '.' => {
                if self.current_input.contains('.') {
                    return;
                }
                if self.current_input.is_empty() || self.current_input == "0" {
                    self.current_input = "0.".to_string();
                } else {
                    self.current_input.push('.');
                }
            }
            '0'..='9' => {
                if self.current_input == "0" {
                    self.current_input.clear();
                }
                self.current_input.push(d);
            }
            _ => {}
        }
    }

    /// Register `op` as the pending operator
    ///
    /// With an operator already pending and an operand typed, the pending
    /// operation is evaluated first. With nothing typed since the last
    /// operator, `op` simply replaces it.
    pub fn set_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if !self.current_input.is_empty() {
            match self.pending {
                Some(_) => self.evaluate()?,
                None => self.accumulator = self.parse_current()?,
            }
        }

        self.pending = Some(op);
        self.current_input.clear();
        Ok(())
    }

    /// Apply the pending operator to the running total and the operand
    ///
    /// A no-op unless an operator is pending and an operand has been typed.
    pub fn evaluate(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.pending else {
            return Ok(());
        };
        if self.current_input.is_empty() {
            return Ok(());
        }

        let operand = self.parse_current()?;
        if op == Operator::Div && operand == 0.0 {
            self.clear();
            return Err(CalcError::DivisionByZero);
        }

        let result = round_result(op.apply(self.accumulator, operand));
        if !result.is_finite() {
            self.clear();
            return Err(CalcError::OutOfRange);
        }

        self.accumulator = result;
        self.current_input = format_number(result);
        self.pending = None;
        Ok(())
    }

    /// Flip the sign of the operand
    pub fn toggle_sign(&mut self) {
        if self.current_input.is_empty() || self.current_input == "0" {
            return;
        }

        match self.current_input.strip_prefix('-') {
            Some(rest) => self.current_input = rest.to_string(),
            None => self.current_input.insert(0, '-'),
        }
    }

    /// Divide the operand by 100
    pub fn percent(&mut self) -> Result<(), CalcError> {
        if self.current_input.is_empty() {
            return Ok(());
        }

        let value = self.parse_current()?;
        self.current_input = format_number(round_result(value / 100.0));
        Ok(())
    }

    /// Reset to the initial state
    pub fn clear(&mut self) {
        self.current_input = "0".to_string();
        self.accumulator = 0.0;
        self.pending = None;
    }

    /// Parse the operand, resetting the engine if it is not a number
    fn parse_current(&mut self) -> Result<f64, CalcError> {
        match self.current_input.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => {
                let bad = std::mem::take(&mut self.current_input);
                self.clear();
                Err(CalcError::InvalidInput(bad))
            }
        }
    }
}

fn round_result(value: f64) -> f64 {
    if value.abs() >= ROUNDING_LIMIT || !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(DECIMAL_PLACES);
    (value * scale).round() / scale
}

/// Format a value for the display
///
/// Integral values print without a fractional part; everything else prints
/// its shortest round-trip form (results are rounded to eight places before
/// they get here).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    value.to_string()
}
