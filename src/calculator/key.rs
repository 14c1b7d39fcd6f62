//! Calculator keys
//!
//! Maps keypad glyphs and their keyboard aliases onto engine operations.

use std::fmt;

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Keypad glyph for this operator
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    pub(crate) fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One press on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    Operator(Operator),
    Equals,
    ToggleSign,
    Percent,
    Clear,
}

impl Key {
    /// Parse a keypad glyph or keyboard alias
    ///
    /// Returns `None` for characters that are not calculator keys.
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' | '.' => Self::Digit(c),
            '+' => Self::Operator(Operator::Add),
            '-' | '−' => Self::Operator(Operator::Sub),
            '*' | 'x' | 'X' | '×' => Self::Operator(Operator::Mul),
            '/' | '÷' => Self::Operator(Operator::Div),
            '=' | '\n' | '\r' => Self::Equals,
            '±' | '~' | 'n' | 'N' => Self::ToggleSign,
            '%' => Self::Percent,
            'C' | 'c' => Self::Clear,
            _ => return None,
        };
        Some(key)
    }

    /// Label shown on the keypad
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".into(),
            Self::ToggleSign => "±".into(),
            Self::Percent => "%".into(),
            Self::Clear => "C".into(),
        }
    }
}

/// Parse a whole key sequence, skipping whitespace
///
/// Unknown characters are returned as the error so the caller can report
/// exactly which key was rejected.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, char> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_glyphs() {
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Div)));
        assert_eq!(Key::from_char('×'), Some(Key::Operator(Operator::Mul)));
        assert_eq!(Key::from_char('±'), Some(Key::ToggleSign));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('?'), None);
    }

    #[test]
    fn test_parse_keys_skips_whitespace() {
        let keys = parse_keys("12 + 3 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Operator(Operator::Add),
                Key::Digit('3'),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_reports_bad_char() {
        assert_eq!(parse_keys("1 + a"), Err('a'));
    }
}
