//! # UrbanBazaar
//!
//! The view-model core of an e-commerce storefront and lightweight admin
//! console, driven by a remote JSON API.
//!
//! ## Features
//!
//! - **List View Engine**: pure filtering, sorting and pagination over an
//!   in-memory collection, shared by every list view
//! - **Facet Predicates**: "match all" tokens ("All", "All Brands") skip a
//!   filter without special-casing call sites
//! - **Deterministic Pages**: stable sort and uniform page clamping keep
//!   re-renders identical for identical inputs
//! - **Page Windows**: centered, ellipsis-aware page-button ranges
//! - **Per-View State Machines**: `Loading → Ready | Error`, one fetch per
//!   mount, no retries
//! - **Source Seam**: HTTP and in-memory implementations of the same
//!   data-source contract
//! - **Admin Inbox**: unread-message filtering against a persisted
//!   processed-id set, reply dispatch behind a transport seam
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bazaar::prelude::*;
//!
//! let config = AppConfig::default_config();
//! let source = HttpSource::new(&config.api.base_url);
//!
//! let mut view = ProductListView::new(&config.views.products);
//! view.mount(&source).await;
//!
//! view.set_category("mens-shoes");
//! view.set_sort(ProductSort::PriceAsc);
//! let page = view.current_page()?;
//! for product in &page.items {
//!     println!("{} — {}", product.title, product.discounted_price());
//! }
//! ```

pub mod config;
pub mod core;
pub mod notifications;
pub mod source;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Engine ===
    pub use crate::core::{
        BazaarError, BazaarResult, ConfigError, FieldFormat, FieldValue, ListQuery, PageRequest,
        PageResult, PageWindow, Predicate, QueryError, Record, SortDirection, SortSpec,
        SourceError, ValidationError, apply_filters, apply_sort, page_window, paginate,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Source ===
    pub use crate::source::{
        HttpSource, InMemorySource, RecordSource, decode_collection, fetch_collection,
    };

    // === Views ===
    pub use crate::views::{
        CategoryShowcase, CategoryTile, Order, OrdersView, Payment, PaymentsView, Product,
        ProductListView, ProductSort, Review, ReviewsView, ViewPhase, WeeklyOffersView,
        WishlistItem, WishlistView,
    };

    // === Notifications ===
    pub use crate::notifications::{
        AdminInbox, InMemoryProcessedStore, Message, ProcessedStore, Reply, ReplyTransport,
    };

    // === Config ===
    pub use crate::config::{ApiConfig, AppConfig, ListSettings, ViewsConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
