//! Record trait defining the core abstraction for all list items

use crate::core::field::FieldValue;

/// Base trait for every record the list engine can display.
///
/// A record is an opaque bag of named fields with a stable numeric id. The
/// engine never touches concrete struct fields; filtering and sorting go
/// through [`Record::field_value`], so a missing field simply yields `None`
/// and degrades gracefully (non-matching for filters, sorted last).
pub trait Record: Clone + Send + Sync + 'static {
    /// The JSON payload key this record's collection lives under
    /// (e.g. "products", "orders"). Endpoints that answer with a bare
    /// array are accepted too.
    fn collection_key() -> &'static str;

    /// Stable identifier, used as the rendering key
    fn id(&self) -> i64;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// Implements [`Record`] for a struct by mapping field names to values.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Product, "products", {
///     "title" => |p| FieldValue::from(p.title.clone()),
///     "price" => |p| FieldValue::Float(p.price),
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $key:literal, { $($field:literal => |$self_:ident| $value:expr),* $(,)? }) => {
        impl $crate::core::record::Record for $type {
            fn collection_key() -> &'static str {
                $key
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    $($field => { let $self_ = self; Some($value) },)*
                    _ => None,
                }
            }
        }
    };
}
