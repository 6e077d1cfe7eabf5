//! Data source contract
//!
//! The remote API is an opaque collaborator that answers with JSON
//! collections. [`RecordSource`] is the seam views fetch through; payload
//! decoding into typed records happens on this side of the seam so every
//! implementation (HTTP, in-memory fixtures) shares the same shape rules.

pub mod http;
pub mod in_memory;

pub use http::HttpSource;
pub use in_memory::InMemorySource;

use crate::core::error::{BazaarResult, SourceError};
use crate::core::record::Record;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A source of JSON payloads, addressed by endpoint path
///
/// One fetch per view mount; implementations do not retry or de-duplicate.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the raw payload behind `path` (e.g. "/products")
    async fn fetch(&self, path: &str) -> BazaarResult<Value>;

    /// Whether this source carries an authentication token.
    ///
    /// Token-gated views check this before fetching and surface an error
    /// state instead of issuing an anonymous request.
    fn is_authenticated(&self) -> bool {
        false
    }
}

/// Extract and decode a record collection from a payload
///
/// Endpoints answer either with a bare JSON array or with an object
/// carrying the array under [`Record::collection_key`]; any other shape is
/// a [`SourceError::MissingCollection`]. Elements that fail to decode are
/// skipped with a warning rather than failing the whole collection.
pub fn decode_collection<R>(payload: &Value) -> BazaarResult<Vec<R>>
where
    R: Record + DeserializeOwned,
{
    let key = R::collection_key();
    let elements = match payload {
        Value::Array(elements) => elements,
        Value::Object(object) => match object.get(key) {
            Some(Value::Array(elements)) => elements,
            _ => {
                return Err(SourceError::MissingCollection {
                    key: key.to_string(),
                }
                .into());
            }
        },
        _ => {
            return Err(SourceError::MissingCollection {
                key: key.to_string(),
            }
            .into());
        }
    };

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        match serde_json::from_value::<R>(element.clone()) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(collection = key, error = %err, "skipping malformed record");
            }
        }
    }

    Ok(records)
}

/// Fetch `path` from a source and decode the collection in one step
pub async fn fetch_collection<R>(source: &dyn RecordSource, path: &str) -> BazaarResult<Vec<R>>
where
    R: Record + DeserializeOwned,
{
    let payload = source.fetch(path).await?;
    decode_collection(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BazaarError;
    use crate::core::field::FieldValue;
    use crate::impl_record;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Clone, Deserialize, Debug)]
    struct Fruit {
        id: i64,
        name: String,
    }

    impl_record!(Fruit, "fruits", {
        "name" => |f| FieldValue::from(f.name.clone()),
    });

    #[test]
    fn test_decode_named_collection() {
        let payload = json!({"fruits": [{"id": 1, "name": "apple"}, {"id": 2, "name": "pear"}]});
        let fruits: Vec<Fruit> = decode_collection(&payload).unwrap();
        assert_eq!(fruits.len(), 2);
        assert_eq!(fruits[0].name, "apple");
    }

    #[test]
    fn test_decode_bare_array() {
        let payload = json!([{"id": 1, "name": "apple"}]);
        let fruits: Vec<Fruit> = decode_collection(&payload).unwrap();
        assert_eq!(fruits.len(), 1);
    }

    #[test]
    fn test_missing_collection_key() {
        let payload = json!({"vegetables": []});
        let err = decode_collection::<Fruit>(&payload).unwrap_err();
        assert!(matches!(
            err,
            BazaarError::Source(SourceError::MissingCollection { .. })
        ));
    }

    #[test]
    fn test_non_collection_payload() {
        let payload = json!("nope");
        assert!(decode_collection::<Fruit>(&payload).is_err());
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let payload = json!({"fruits": [
            {"id": 1, "name": "apple"},
            {"id": "not-a-number"},
            {"id": 3, "name": "plum"}
        ]});
        let fruits: Vec<Fruit> = decode_collection(&payload).unwrap();
        let ids: Vec<i64> = fruits.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
