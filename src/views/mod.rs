//! Per-view state machines over the list engine
//!
//! Every view follows the same lifecycle: it is created in `Loading`,
//! `mount` performs the single fetch for that view's lifetime and moves it
//! to `Ready` or `Error`, and every later interaction (filters, search,
//! sort, page changes) recomputes the visible page synchronously from the
//! in-memory collection. A failed fetch is not retried; the view stays in
//! `Error` until the surrounding application mounts a fresh instance.

pub mod offers;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod showcase;
pub mod wishlist;

pub use offers::WeeklyOffersView;
pub use orders::{Order, OrdersView};
pub use payments::{Payment, PaymentsView};
pub use products::{Product, ProductListView, ProductSort};
pub use reviews::{Review, ReviewsView};
pub use showcase::{CategoryShowcase, CategoryTile};
pub use wishlist::{WishlistItem, WishlistView};

/// Lifecycle state of a mounted view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    /// Initial fetch in flight
    Loading,

    /// Collection fetched and held in memory
    Ready,

    /// Fetch failed; terminal until a fresh mount
    Error(String),
}

impl ViewPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewPhase::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewPhase::Error(_))
    }

    /// The error message, if the view failed to mount
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}
