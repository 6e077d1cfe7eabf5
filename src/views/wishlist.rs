//! Wishlist view (token-gated)

use crate::core::error::SourceError;
use crate::core::field::FieldValue;
use crate::impl_record;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use serde::{Deserialize, Serialize};

/// One saved item from the `/wishlist` endpoint (keyed `wishlist`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl_record!(WishlistItem, "wishlist", {
    "title" => |w| FieldValue::from(w.title.clone()),
    "price" => |w| FieldValue::Float(w.price),
});

impl WishlistItem {
    /// Price after the discount, rounded to whole currency units
    pub fn discounted_price(&self) -> i64 {
        ((self.price * (100.0 - self.discount_percentage)) / 100.0).round() as i64
    }
}

/// The signed-in user's wishlist
///
/// Mounting without an authenticated source never issues a request: the
/// view goes straight to its error state so the surrounding application
/// can show its login prompt.
pub struct WishlistView {
    phase: ViewPhase,
    items: Vec<WishlistItem>,
}

impl WishlistView {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            items: Vec::new(),
        }
    }

    pub async fn mount(&mut self, source: &dyn RecordSource) {
        if !source.is_authenticated() {
            let err = SourceError::Unauthorized {
                path: "/wishlist".to_string(),
            };
            self.phase = ViewPhase::Error(err.to_string());
            return;
        }

        match fetch_collection::<WishlistItem>(source, "/wishlist").await {
            Ok(items) => {
                self.items = items;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "wishlist fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop an item from the in-memory list.
    ///
    /// The server-side removal is the surrounding application's call; the
    /// view only mirrors it. Returns whether the item was present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

impl Default for WishlistView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use serde_json::json;

    fn wishlist_payload() -> serde_json::Value {
        json!({"wishlist": [
            {"id": 1, "title": "Red Shoe", "price": 120.0, "discount_percentage": 10.0, "image": "shoe.jpg"},
            {"id": 2, "title": "Blue Hat", "price": 40.0}
        ]})
    }

    #[tokio::test]
    async fn test_unauthenticated_mount_never_fetches() {
        // No seeded payload: a fetch would fail with a 404, but the auth
        // gate trips first
        let source = InMemorySource::new();
        let mut view = WishlistView::new();
        view.mount(&source).await;

        assert!(view.phase().is_error());
        assert!(
            view.phase()
                .error_message()
                .unwrap()
                .contains("authentication")
        );
    }

    #[tokio::test]
    async fn test_authenticated_mount() {
        let source = InMemorySource::new()
            .with("/wishlist", wishlist_payload())
            .with_auth();
        let mut view = WishlistView::new();
        view.mount(&source).await;

        assert!(view.phase().is_ready());
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.items()[0].discounted_price(), 108);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let source = InMemorySource::new()
            .with("/wishlist", wishlist_payload())
            .with_auth();
        let mut view = WishlistView::new();
        view.mount(&source).await;

        assert!(view.remove(1));
        assert!(!view.remove(1));
        assert_eq!(view.items().len(), 1);
        assert!(!view.is_empty());
    }
}
