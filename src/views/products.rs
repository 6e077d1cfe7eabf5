//! Product catalog view: category/brand facets, search, sort, pagination

use crate::config::ListSettings;
use crate::core::error::BazaarResult;
use crate::core::field::FieldValue;
use crate::core::filter::Predicate;
use crate::core::page::{PageResult, PageWindow};
use crate::core::query::ListQuery;
use crate::core::sort::SortSpec;
use crate::impl_record;
use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Facet token that disables the category filter
pub const ALL_CATEGORIES: &str = "All";

/// Facet token that disables the brand filter
pub const ALL_BRANDS: &str = "All Brands";

/// One catalog product as returned by the `/products` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl_record!(Product, "products", {
    "title" => |p| FieldValue::from(p.title.clone()),
    "brand" => |p| match &p.brand {
        Some(brand) => FieldValue::from(brand.clone()),
        None => FieldValue::Null,
    },
    "category" => |p| FieldValue::from(p.category.clone()),
    "price" => |p| FieldValue::Float(p.price),
});

impl Product {
    /// Price after the discount, rounded to whole currency units
    pub fn discounted_price(&self) -> i64 {
        ((self.price * (100.0 - self.discount_percentage)) / 100.0).round() as i64
    }
}

/// Sort options offered by the catalog's sort bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Preserve source order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl ProductSort {
    fn to_spec(self) -> Option<SortSpec> {
        match self {
            ProductSort::Default => None,
            ProductSort::PriceAsc => Some(SortSpec::ascending("price")),
            ProductSort::PriceDesc => Some(SortSpec::descending("price")),
            ProductSort::TitleAsc => Some(SortSpec::ascending("title")),
            ProductSort::TitleDesc => Some(SortSpec::descending("title")),
        }
    }
}

/// The main product list
///
/// Facets (category, brand) are derived from the fetched collection in
/// first-seen order, with the "match all" token prepended so the default
/// selection filters nothing.
pub struct ProductListView {
    phase: ViewPhase,
    products: Vec<Product>,
    categories: Vec<String>,
    brands: Vec<String>,
    query: ListQuery,
}

impl ProductListView {
    pub fn new(settings: &ListSettings) -> Self {
        Self {
            phase: ViewPhase::Loading,
            products: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            query: ListQuery::new(settings.per_page, settings.window),
        }
    }

    /// Fetch the catalog; one fetch per view lifetime
    pub async fn mount(&mut self, source: &dyn RecordSource) {
        match fetch_collection::<Product>(source, "/products").await {
            Ok(products) => {
                self.categories = facet_values(
                    ALL_CATEGORIES,
                    products.iter().map(|p| p.category.as_str()),
                );
                self.brands = facet_values(
                    ALL_BRANDS,
                    products.iter().filter_map(|p| p.brand.as_deref()),
                );
                self.products = products;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "product fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Category facet values, "All" first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Brand facet values, "All Brands" first
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Select a category; resets to page 1
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query
            .set_predicate(Predicate::facet("category", category, ALL_CATEGORIES));
    }

    /// Select a brand; resets to page 1
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.query
            .set_predicate(Predicate::facet("brand", brand, ALL_BRANDS));
    }

    /// Update the free-text title search; resets to page 1
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query.set_predicate(Predicate::contains("title", query));
    }

    /// Change the sort option; the current page is kept
    pub fn set_sort(&mut self, sort: ProductSort) {
        self.query.set_sort(sort.to_spec());
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

    /// The visible page under the current filters, sort and page number
    pub fn current_page(&self) -> BazaarResult<PageResult<Product>> {
        Ok(self.query.run(&self.products)?)
    }

    /// Page buttons to render for the current result
    pub fn page_window(&self) -> BazaarResult<PageWindow> {
        let result = self.current_page()?;
        Ok(self.query.window(&result))
    }
}

/// Unique facet values in first-seen order, wildcard token first
fn facet_values<'a>(wildcard: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: IndexSet<String> = IndexSet::new();
    unique.insert(wildcard.to_string());
    for value in values {
        unique.insert(value.to_string());
    }
    unique.into_iter().collect()
}
