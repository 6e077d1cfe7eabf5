//! Admin notification inbox
//!
//! The admin navbar shows the newest unreplied customer messages. Which
//! messages count as "replied" is persisted outside this crate (the host
//! application's local storage) behind the [`ProcessedStore`] seam, and
//! the actual e-mail dispatch lives behind
//! [`ReplyTransport`]. The inbox itself only decides what is visible and
//! what a valid reply is.

use crate::config::AppConfig;
use crate::core::error::{BazaarError, BazaarResult, ValidationError};
use crate::core::field::{FieldFormat, FieldValue};
use crate::impl_record;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// One customer message from the `/admin/messages` endpoint (keyed
/// `messages`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "name", default)]
    pub sender_name: Option<String>,
    #[serde(rename = "email")]
    pub sender_email: String,
    #[serde(rename = "message")]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl_record!(Message, "messages", {
    "email" => |m| FieldValue::from(m.sender_email.clone()),
    "message" => |m| FieldValue::from(m.body.clone()),
});

/// A reply about to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub to: String,
    pub from: String,
    pub body: String,
}

/// Persisted set of message ids that have already been handled
pub trait ProcessedStore: Send + Sync {
    /// Load the full processed-id set
    fn load(&self) -> BazaarResult<HashSet<i64>>;

    /// Record one more processed id
    fn mark(&self, id: i64) -> BazaarResult<()>;
}

/// In-memory processed-id store for testing and development
#[derive(Clone, Default)]
pub struct InMemoryProcessedStore {
    ids: Arc<RwLock<HashSet<i64>>>,
}

impl InMemoryProcessedStore {
    pub fn new() -> Self {
        Self {
            ids: Arc::new(RwLock::new(HashSet::new())),
        }
    }
}

impl ProcessedStore for InMemoryProcessedStore {
    fn load(&self) -> BazaarResult<HashSet<i64>> {
        let ids = self
            .ids
            .read()
            .map_err(|e| BazaarError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(ids.clone())
    }

    fn mark(&self, id: i64) -> BazaarResult<()> {
        let mut ids = self
            .ids
            .write()
            .map_err(|e| BazaarError::Internal(format!("Failed to acquire write lock: {}", e)))?;
        ids.insert(id);
        Ok(())
    }
}

/// Outbound reply dispatch
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    async fn send(&self, reply: &Reply) -> BazaarResult<()>;
}

/// The bell-icon notification widget
pub struct AdminInbox {
    phase: ViewPhase,
    visible: Vec<Message>,
    expanded: Option<i64>,
    max_visible: usize,
}

impl AdminInbox {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            phase: ViewPhase::Loading,
            visible: Vec::new(),
            expanded: None,
            max_visible: config.notifications_visible,
        }
    }

    /// Fetch messages and keep the first unprocessed ones
    pub async fn refresh(&mut self, source: &dyn RecordSource, store: &dyn ProcessedStore) {
        let processed = match store.load() {
            Ok(processed) => processed,
            Err(err) => {
                self.phase = ViewPhase::Error(err.to_string());
                return;
            }
        };

        match fetch_collection::<Message>(source, "/admin/messages").await {
            Ok(messages) => {
                self.visible = messages
                    .into_iter()
                    .filter(|m| !processed.contains(&m.id))
                    .take(self.max_visible)
                    .collect();
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "notification fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Currently visible (unprocessed) messages
    pub fn messages(&self) -> &[Message] {
        &self.visible
    }

    pub fn unread_count(&self) -> usize {
        self.visible.len()
    }

    /// Expand one message ("view more"); any other collapses
    pub fn expand(&mut self, id: i64) {
        if self.visible.iter().any(|m| m.id == id) {
            self.expanded = Some(id);
        }
    }

    /// Collapse the expanded message ("view less")
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<i64> {
        self.expanded
    }

    /// Reply to a visible message
    ///
    /// Validates the recipient address and the reply body, dispatches via
    /// the transport, marks the message processed and removes it from the
    /// inbox. A failed send leaves the message visible and unprocessed.
    pub async fn reply(
        &mut self,
        transport: &dyn ReplyTransport,
        store: &dyn ProcessedStore,
        message_id: i64,
        from: &str,
        body: &str,
    ) -> BazaarResult<()> {
        let message = self
            .visible
            .iter()
            .find(|m| m.id == message_id)
            .ok_or_else(|| {
                BazaarError::Internal(format!("message {} is not visible", message_id))
            })?;

        if body.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }
        if !FieldFormat::Email.validate(&message.sender_email) {
            return Err(ValidationError::InvalidEmail {
                value: message.sender_email.clone(),
            }
            .into());
        }

        let reply = Reply {
            to: message.sender_email.clone(),
            from: from.to_string(),
            body: body.trim().to_string(),
        };
        transport.send(&reply).await?;

        store.mark(message_id)?;
        self.visible.retain(|m| m.id != message_id);
        if self.expanded == Some(message_id) {
            self.expanded = None;
        }

        tracing::info!(message_id, to = %reply.to, "reply sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingTransport {
        sent: Mutex<Vec<Reply>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ReplyTransport for RecordingTransport {
        async fn send(&self, reply: &Reply) -> BazaarResult<()> {
            if self.fail {
                return Err(BazaarError::Internal("dispatch down".to_string()));
            }
            self.sent.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }

    fn messages_payload() -> serde_json::Value {
        json!({"messages": [
            {"id": 1, "name": "Asha", "email": "asha@example.com", "message": "Where is my order?"},
            {"id": 2, "name": "Ben", "email": "ben@example.com", "message": "Do you restock hats?"},
            {"id": 3, "email": "broken-address", "message": "hi"},
            {"id": 4, "email": "dee@example.com", "message": "Refund please"},
            {"id": 5, "email": "eve@example.com", "message": "Great shop"},
            {"id": 6, "email": "fin@example.com", "message": "Sixth message"},
            {"id": 7, "email": "gus@example.com", "message": "Seventh message"}
        ]})
    }

    fn inbox() -> AdminInbox {
        AdminInbox::new(&AppConfig::default_config())
    }

    #[tokio::test]
    async fn test_refresh_caps_visible_messages() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        assert!(inbox.phase().is_ready());
        assert_eq!(inbox.unread_count(), 5);
        let ids: Vec<i64> = inbox.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_refresh_skips_processed_ids() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        store.mark(1).unwrap();
        store.mark(4).unwrap();

        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        let ids: Vec<i64> = inbox.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_reply_marks_processed_and_removes() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let transport = RecordingTransport::new();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        inbox.expand(2);
        inbox
            .reply(&transport, &store, 2, "admin@urbanbazaar.com", "Yes, next week.")
            .await
            .unwrap();

        assert!(store.load().unwrap().contains(&2));
        assert!(inbox.messages().iter().all(|m| m.id != 2));
        assert_eq!(inbox.expanded(), None);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ben@example.com");
    }

    #[tokio::test]
    async fn test_reply_rejects_empty_body() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let transport = RecordingTransport::new();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        let err = inbox
            .reply(&transport, &store, 1, "admin@urbanbazaar.com", "   ")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_MESSAGE");
        assert_eq!(inbox.unread_count(), 5);
    }

    #[tokio::test]
    async fn test_reply_rejects_invalid_recipient() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let transport = RecordingTransport::new();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        let err = inbox
            .reply(&transport, &store, 3, "admin@urbanbazaar.com", "hello")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_failed_send_keeps_message_unprocessed() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let transport = RecordingTransport::failing();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        let err = inbox
            .reply(&transport, &store, 1, "admin@urbanbazaar.com", "hello")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(!store.load().unwrap().contains(&1));
        assert_eq!(inbox.unread_count(), 5);
    }

    #[tokio::test]
    async fn test_expand_requires_visible_message() {
        let source = InMemorySource::new().with("/admin/messages", messages_payload());
        let store = InMemoryProcessedStore::new();
        let mut inbox = inbox();
        inbox.refresh(&source, &store).await;

        inbox.expand(99);
        assert_eq!(inbox.expanded(), None);

        inbox.expand(1);
        assert_eq!(inbox.expanded(), Some(1));
        inbox.collapse();
        assert_eq!(inbox.expanded(), None);
    }
}
