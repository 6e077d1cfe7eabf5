//! Product reviews grid

use crate::config::ListSettings;
use crate::core::error::BazaarResult;
use crate::core::field::FieldValue;
use crate::core::page::{PageResult, PageWindow};
use crate::core::query::ListQuery;
use crate::impl_record;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One review from the `/review` endpoint (keyed `reviews`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: Option<String>,
    pub rating: f64,
    pub comment: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl_record!(Review, "reviews", {
    "reviewer_name" => |r| FieldValue::from(r.reviewer_name.clone()),
    "rating" => |r| FieldValue::Float(r.rating),
    "comment" => |r| FieldValue::from(r.comment.clone()),
});

/// The reviews grid: six cards a page, five page buttons in the window
pub struct ReviewsView {
    phase: ViewPhase,
    reviews: Vec<Review>,
    query: ListQuery,
}

impl ReviewsView {
    pub fn new(settings: &ListSettings) -> Self {
        Self {
            phase: ViewPhase::Loading,
            reviews: Vec::new(),
            query: ListQuery::new(settings.per_page, settings.window),
        }
    }

    pub async fn mount(&mut self, source: &dyn RecordSource) {
        match fetch_collection::<Review>(source, "/review").await {
            Ok(reviews) => {
                self.reviews = reviews;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reviews fetch failed");
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

    pub fn current_page(&self) -> BazaarResult<PageResult<Review>> {
        Ok(self.query.run(&self.reviews)?)
    }

    pub fn page_window(&self) -> BazaarResult<PageWindow> {
        let result = self.current_page()?;
        Ok(self.query.window(&result))
    }
}
