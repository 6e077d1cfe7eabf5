//! Field value types and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
///
/// Records expose their fields through this enum so the list engine can
/// filter and sort without knowing the concrete record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, coercing integers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value as display text
    ///
    /// Used for exact-match predicates, where the selected facet value is
    /// always a string.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => String::new(),
        }
    }

    /// Compare two field values for sorting
    ///
    /// Numbers compare numerically, strings case-insensitively with a raw
    /// tie-break so equal-ignoring-case keys still order deterministically.
    /// Values of different kinds order by kind: numbers, strings, booleans,
    /// datetimes, null last.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => {
                let lowered = a.to_lowercase().cmp(&b.to_lowercase());
                if lowered == Ordering::Equal {
                    a.cmp(b)
                } else {
                    lowered
                }
            }
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => self.kind_rank().cmp(&other.kind_rank()),
            },
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Integer(_) | FieldValue::Float(_) => 0,
            FieldValue::String(_) => 1,
            FieldValue::Boolean(_) => 2,
            FieldValue::DateTime(_) => 3,
            FieldValue::Null => 4,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// Field format validators for automatic validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_number(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numbers_coerce() {
        assert_eq!(FieldValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(FieldValue::Float(2.5).as_number(), Some(2.5));
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_compare_numeric() {
        let a = FieldValue::Integer(10);
        let b = FieldValue::Float(30.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_compare_strings_case_insensitive() {
        let a = FieldValue::from("apple");
        let b = FieldValue::from("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_compare_equal_ignoring_case_is_deterministic() {
        let a = FieldValue::from("Shoe");
        let b = FieldValue::from("shoe");
        // Not Equal: raw tie-break keeps ordering stable across runs
        assert_eq!(a.compare(&b), "Shoe".cmp("shoe"));
    }

    #[test]
    fn test_compare_null_sorts_last() {
        let value = FieldValue::Integer(1);
        assert_eq!(value.compare(&FieldValue::Null), Ordering::Less);
        assert_eq!(FieldValue::Null.compare(&value), Ordering::Greater);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(FieldValue::from("beauty").display_text(), "beauty");
        assert_eq!(FieldValue::Integer(7).display_text(), "7");
        assert_eq!(FieldValue::Null.display_text(), "");
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate("test@example.com"));
        assert!(format.validate("user.name+tag@example.co.uk"));
        assert!(!format.validate("invalid-email"));
        assert!(!format.validate("@example.com"));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}\d{3}$").unwrap());

        assert!(format.validate("ABC123"));
        assert!(!format.validate("abc123"));
    }
}
