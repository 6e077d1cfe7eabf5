//! Filter predicates over record fields
//!
//! Predicates compose with logical AND. An exact-match predicate whose
//! selected value equals its wildcard token ("All", "All Brands", ...) is
//! skipped entirely, so a freshly mounted view with default facet selections
//! filters nothing.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// A single filter condition applied to a named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Exact match against the field's display text.
    ///
    /// Skipped when `value == wildcard`.
    Equals {
        field: String,
        value: String,
        wildcard: Option<String>,
    },

    /// Case-insensitive substring match against the field's display text.
    ///
    /// An empty query matches every record.
    Contains { field: String, query: String },
}

impl Predicate {
    /// Exact-match predicate with no wildcard token
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
            wildcard: None,
        }
    }

    /// Facet predicate: skipped while the selected value equals `wildcard`
    pub fn facet(
        field: impl Into<String>,
        value: impl Into<String>,
        wildcard: impl Into<String>,
    ) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
            wildcard: Some(wildcard.into()),
        }
    }

    /// Free-text search predicate
    pub fn contains(field: impl Into<String>, query: impl Into<String>) -> Self {
        Predicate::Contains {
            field: field.into(),
            query: query.into(),
        }
    }

    /// The field this predicate applies to
    pub fn field(&self) -> &str {
        match self {
            Predicate::Equals { field, .. } => field,
            Predicate::Contains { field, .. } => field,
        }
    }

    /// Whether this predicate is currently a no-op
    pub fn is_wildcard(&self) -> bool {
        match self {
            Predicate::Equals {
                value,
                wildcard: Some(wildcard),
                ..
            } => value == wildcard,
            _ => false,
        }
    }

    /// Evaluate the predicate against one field value.
    ///
    /// `None` (the record lacks the field) never matches.
    fn matches(&self, value: Option<FieldValue>) -> bool {
        if self.is_wildcard() {
            return true;
        }

        let Some(value) = value else {
            return false;
        };

        match self {
            Predicate::Equals { value: expected, .. } => value.display_text() == *expected,
            Predicate::Contains { query, .. } => value
                .display_text()
                .to_lowercase()
                .contains(&query.to_lowercase()),
        }
    }
}

/// Apply filter predicates to a collection of records
///
/// The result is a new vector; the input is untouched and relative order is
/// preserved, so the output is always a subsequence of the input.
pub fn apply_filters<R: Record>(records: &[R], predicates: &[Predicate]) -> Vec<R> {
    records
        .iter()
        .filter(|record| {
            predicates
                .iter()
                .all(|p| p.matches(record.field_value(p.field())))
        })
        .cloned()
        .collect()
}
