//! Admin orders table

use crate::config::ListSettings;
use crate::core::error::BazaarResult;
use crate::core::field::FieldValue;
use crate::core::page::{PageResult, PageWindow};
use crate::core::query::ListQuery;
use crate::impl_record;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One order row as returned by the `/order` endpoint
///
/// The endpoint answers with a bare array rather than a keyed object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    pub shipping_address: String,
    pub payment_method: String,
    pub order_total: f64,
    pub status: String,
}

impl_record!(Order, "orders", {
    "shipping_address" => |o| FieldValue::from(o.shipping_address.clone()),
    "payment_method" => |o| FieldValue::from(o.payment_method.clone()),
    "order_total" => |o| FieldValue::Float(o.order_total),
    "status" => |o| FieldValue::from(o.status.clone()),
    "order_date" => |o| match o.order_date {
        Some(date) => FieldValue::DateTime(date),
        None => FieldValue::Null,
    },
});

/// The admin orders table: plain pagination, no filters or sort
pub struct OrdersView {
    phase: ViewPhase,
    orders: Vec<Order>,
    query: ListQuery,
}

impl OrdersView {
    pub fn new(settings: &ListSettings) -> Self {
        Self {
            phase: ViewPhase::Loading,
            orders: Vec::new(),
            query: ListQuery::new(settings.per_page, settings.window),
        }
    }

    pub async fn mount(&mut self, source: &dyn RecordSource) {
        match fetch_collection::<Order>(source, "/order").await {
            Ok(orders) => {
                self.orders = orders;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "orders fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn previous_page(&mut self) {
        self.query.previous_page();
    }

    pub fn next_page(&mut self) {
        self.query.next_page();
    }

    pub fn current_page(&self) -> BazaarResult<PageResult<Order>> {
        Ok(self.query.run(&self.orders)?)
    }

    pub fn page_window(&self) -> BazaarResult<PageWindow> {
        let result = self.current_page()?;
        Ok(self.query.window(&result))
    }

    /// The "Showing X to Y of Z entries" line under the table
    pub fn entry_range(&self) -> BazaarResult<Option<(usize, usize, usize)>> {
        let result = self.current_page()?;
        Ok(result
            .first_index()
            .zip(result.last_index())
            .map(|(first, last)| (first, last, result.total_items)))
    }
}
