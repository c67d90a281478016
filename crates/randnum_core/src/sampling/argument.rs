//! Untyped generator arguments.
//!
//! Command-line tokens and configuration values reach the generator before
//! anyone has decided whether they are numbers. [`Argument`] carries them in
//! that state so the generator can report non-numeric input with the
//! dedicated type error instead of a parse failure somewhere upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generator argument whose type has not been checked yet.
///
/// Only a finite [`Argument::Number`] is numeric. Text is never coerced,
/// even if it happens to look like a number; use [`Argument::parse`] to
/// classify a raw token.
///
/// # Examples
/// ```
/// use randnum_core::sampling::Argument;
///
/// assert_eq!(Argument::parse("2.5"), Argument::Number(2.5));
/// assert_eq!(Argument::parse("five"), Argument::Text("five".to_string()));
/// assert_eq!(Argument::Text("5".to_string()).as_numeric(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    /// A numeric value.
    Number(f64),
    /// Anything else.
    Text(String),
}

impl Argument {
    /// Classifies a raw token, trimming surrounding whitespace.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Argument::Number(value),
            Err(_) => Argument::Text(trimmed.to_string()),
        }
    }

    /// Returns the value if this argument is a finite number.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Argument::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` if this argument is a finite number.
    pub fn is_numeric(&self) -> bool {
        self.as_numeric().is_some()
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Number(value)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Number(value as f64)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Number(f64::from(value))
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Number(value) => write!(f, "{}", value),
            Argument::Text(text) => write!(f, "{:?}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(Argument::parse("10"), Argument::Number(10.0));
        assert_eq!(Argument::parse(" -5 "), Argument::Number(-5.0));
        assert_eq!(Argument::parse("1e3"), Argument::Number(1000.0));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(Argument::parse("five"), Argument::Text("five".to_string()));
        assert_eq!(Argument::parse(""), Argument::Text(String::new()));
    }

    #[test]
    fn test_non_finite_is_not_numeric() {
        assert!(!Argument::Number(f64::NAN).is_numeric());
        assert!(!Argument::Number(f64::INFINITY).is_numeric());
        assert!(!Argument::parse("inf").is_numeric());
        assert!(Argument::Number(0.0).is_numeric());
    }

    #[test]
    fn test_text_is_never_coerced() {
        assert_eq!(Argument::from("42").as_numeric(), None);
        assert_eq!(Argument::from(42_i64).as_numeric(), Some(42.0));
        assert_eq!(Argument::from(-3_i32).as_numeric(), Some(-3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Argument::Number(2.5).to_string(), "2.5");
        assert_eq!(Argument::from("five").to_string(), "\"five\"");
    }

    #[test]
    fn test_untagged_deserialization() {
        let number: Argument = serde_json::from_str("5").unwrap();
        assert_eq!(number, Argument::Number(5.0));

        let text: Argument = serde_json::from_str("\"five\"").unwrap();
        assert_eq!(text, Argument::Text("five".to_string()));
    }
}
