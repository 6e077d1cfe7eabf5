//! In-memory implementation of RecordSource for testing and development

use crate::core::error::{BazaarError, BazaarResult, SourceError};
use crate::source::RecordSource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An in-memory payload map, addressed by endpoint path
///
/// Useful for tests and the demo binary. Uses RwLock for thread-safe
/// access; paths with no seeded payload answer like a 404.
#[derive(Clone, Default)]
pub struct InMemorySource {
    payloads: Arc<RwLock<HashMap<String, Value>>>,
    authenticated: bool,
}

impl InMemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(RwLock::new(HashMap::new())),
            authenticated: false,
        }
    }

    /// Pretend the source carries an authentication token
    pub fn with_auth(mut self) -> Self {
        self.authenticated = true;
        self
    }

    /// Seed the payload behind a path
    pub fn seed(&self, path: impl Into<String>, payload: Value) {
        self.payloads
            .write()
            .unwrap()
            .insert(normalize(&path.into()), payload);
    }

    /// Builder-style seeding for test setup
    pub fn with(self, path: impl Into<String>, payload: Value) -> Self {
        self.seed(path, payload);
        self
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

#[async_trait]
impl RecordSource for InMemorySource {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    async fn fetch(&self, path: &str) -> BazaarResult<Value> {
        let payloads = self
            .payloads
            .read()
            .map_err(|e| BazaarError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        payloads.get(&normalize(path)).cloned().ok_or_else(|| {
            SourceError::Status {
                url: normalize(path),
                status: 404,
            }
            .into()
        })
    }
}
