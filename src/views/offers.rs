//! Weekly offers: one product per category, searchable and paged

use crate::config::ListSettings;
use crate::core::error::BazaarResult;
use crate::core::filter::Predicate;
use crate::core::page::{PageResult, PageWindow};
use crate::core::query::ListQuery;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use crate::views::products::Product;
use indexmap::IndexMap;

/// The weekly-offers grid
///
/// Shows the first product of every category, in the order categories
/// first appear in the catalog. Title search and pagination run over that
/// reduced collection; there is no sort bar.
pub struct WeeklyOffersView {
    phase: ViewPhase,
    offers: Vec<Product>,
    query: ListQuery,
}

impl WeeklyOffersView {
    pub fn new(settings: &ListSettings) -> Self {
        Self {
            phase: ViewPhase::Loading,
            offers: Vec::new(),
            query: ListQuery::new(settings.per_page, settings.window),
        }
    }

    /// Fetch the catalog and keep one product per category
    pub async fn mount(&mut self, source: &dyn RecordSource) {
        match fetch_collection::<Product>(source, "/products").await {
            Ok(products) => {
                self.offers = first_per_category(products);
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "weekly offers fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Update the title search; resets to page 1
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query.set_predicate(Predicate::contains("title", query));
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn current_page(&self) -> BazaarResult<PageResult<Product>> {
        Ok(self.query.run(&self.offers)?)
    }

    pub fn page_window(&self) -> BazaarResult<PageWindow> {
        let result = self.current_page()?;
        Ok(self.query.window(&result))
    }
}

/// Reduce a catalog to its first product per category, insertion-ordered
fn first_per_category(products: Vec<Product>) -> Vec<Product> {
    let mut by_category: IndexMap<String, Product> = IndexMap::new();
    for product in products {
        by_category
            .entry(product.category.clone())
            .or_insert(product);
    }
    by_category.into_values().collect()
}
