//! Calculator command
//!
//! Feeds a key sequence to a fresh calculator and prints the display.
//! Notices are reported on stderr and the sequence carries on from the reset
//! state, as a keypad would.

use crate::calculator::{parse_keys, Calculator};
use crate::error::{TallyError, TallyResult};

/// Run a key sequence, returning the final display and any notices
pub fn run_keys(keys: &str) -> TallyResult<(String, Vec<String>)> {
    let keys = parse_keys(keys)
        .map_err(|c| TallyError::Validation(format!("Unknown calculator key '{}'", c)))?;

    let mut calc = Calculator::new();
    let mut notices = Vec::new();
    for key in keys {
        if let Err(notice) = calc.press(key) {
            notices.push(notice.to_string());
        }
    }

    Ok((calc.display(), notices))
}

pub fn handle_calc_command(keys: &[String]) -> TallyResult<()> {
    let (display, notices) = run_keys(&keys.join(" "))?;

    for notice in notices {
        eprintln!("{}", notice);
    }
    println!("{}", display);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_keys() {
        let (display, notices) = run_keys("12+7×2=").unwrap();
        assert_eq!(display, "38");
        assert!(notices.is_empty());
    }

    #[test]
    fn test_division_by_zero_continues() {
        let (display, notices) = run_keys("10/0= 4+1=").unwrap();
        assert_eq!(display, "5");
        assert_eq!(notices, vec!["Cannot divide by zero!".to_string()]);
    }

    #[test]
    fn test_unknown_key() {
        assert!(run_keys("1+a").unwrap_err().is_validation());
    }
}
