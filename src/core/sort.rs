//! Stable sorting over record fields

use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sort key: field name plus direction
///
/// `None` in the places a `SortSpec` is optional means "preserve the
/// collection order", which keeps pagination deterministic for views that
/// never sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse a sort expression (e.g. "price:asc", "title:desc", "price")
    ///
    /// A bare field name sorts ascending. Returns `None` for an empty
    /// expression.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return None;
        }
        match expr.split_once(':') {
            Some((field, "desc")) => Some(Self::descending(field)),
            Some((field, _)) => Some(Self::ascending(field)),
            None => Some(Self::ascending(expr)),
        }
    }
}

/// Apply a sort spec to a collection of records
///
/// The sort is stable: records with equal keys keep their prior relative
/// order, so re-rendering with identical inputs always yields the same
/// pages. Records missing the sort field order last in either direction.
/// `None` returns the input order unchanged.
pub fn apply_sort<R: Record>(mut records: Vec<R>, spec: Option<&SortSpec>) -> Vec<R> {
    let Some(spec) = spec else {
        return records;
    };

    records.sort_by(|a, b| {
        // Null and absent are the same thing to the sort: no key
        let left = a.field_value(&spec.field).filter(|v| !v.is_null());
        let right = b.field_value(&spec.field).filter(|v| !v.is_null());
        match (left, right) {
            (Some(l), Some(r)) => {
                let ordering = l.compare(&r);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            // Missing fields sink to the end regardless of direction
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    records
}
