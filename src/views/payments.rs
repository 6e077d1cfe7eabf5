//! Admin payments table

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

/// One payment row from the `/admin/orders` endpoint (keyed `orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub shipping_address: String,
    pub payment_method: String,
    pub order_total: f64,
    pub status: String,
}

impl_record!(Payment, "orders", {
    "user_email" => |p| match &p.user_email {
        Some(email) => FieldValue::from(email.clone()),
        None => FieldValue::Null,
    },
    "payment_method" => |p| FieldValue::from(p.payment_method.clone()),
    "order_total" => |p| FieldValue::Float(p.order_total),
    "status" => |p| FieldValue::from(p.status.clone()),
});

/// The admin payments table, with a running total for the visible page
pub struct PaymentsView {
    phase: ViewPhase,
    payments: Vec<Payment>,
    query: ListQuery,
}

impl PaymentsView {
    pub fn new(settings: &ListSettings) -> Self {
        Self {
            phase: ViewPhase::Loading,
            payments: Vec::new(),
            query: ListQuery::new(settings.per_page, settings.window),
        }
    }

    pub async fn mount(&mut self, source: &dyn RecordSource) {
        match fetch_collection::<Payment>(source, "/admin/orders").await {
            Ok(payments) => {
                self.payments = payments;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "payments fetch failed");
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

    pub fn current_page(&self) -> BazaarResult<PageResult<Payment>> {
        Ok(self.query.run(&self.payments)?)
    }

    pub fn page_window(&self) -> BazaarResult<PageWindow> {
        let result = self.current_page()?;
        Ok(self.query.window(&result))
    }

    /// Sum of `order_total` over the visible page (the table footer)
    pub fn page_total(&self) -> BazaarResult<f64> {
        let result = self.current_page()?;
        Ok(result.items.iter().map(|p| p.order_total).sum())
    }
}
