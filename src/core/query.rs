//! Transient list-view state: predicates, sort and page request
//!
//! [`ListQuery`] is the serializable view state every list view holds. It
//! composes the three pure engine operations in a fixed order
//! (filter → sort → paginate) and owns the one stateful rule of the
//! engine: changing a predicate or the search query resets the current
//! page to 1, while changing only the sort spec does not.

use crate::core::error::QueryError;
use crate::core::filter::{Predicate, apply_filters};
use crate::core::page::{PageRequest, PageResult, PageWindow, page_window, paginate};
use crate::core::record::Record;
use crate::core::sort::{SortSpec, apply_sort};
use serde::{Deserialize, Serialize};

/// Filter, sort and page state for one list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    predicates: Vec<Predicate>,
    sort: Option<SortSpec>,
    request: PageRequest,
    window_size: usize,
}

impl ListQuery {
    /// A query with no predicates, no sort, page 1
    pub fn new(per_page: usize, window_size: usize) -> Self {
        Self {
            predicates: Vec::new(),
            sort: None,
            request: PageRequest::first(per_page),
            window_size,
        }
    }

    // === Predicates ===

    /// Install or replace the predicate for `predicate.field()`.
    ///
    /// Resets the current page to 1.
    pub fn set_predicate(&mut self, predicate: Predicate) {
        self.predicates.retain(|p| p.field() != predicate.field());
        self.predicates.push(predicate);
        self.request.page = 1;
    }

    /// Remove the predicate on `field`, if any.
    ///
    /// Resets the current page to 1.
    pub fn clear_predicate(&mut self, field: &str) {
        self.predicates.retain(|p| p.field() != field);
        self.request.page = 1;
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    // === Sort ===

    /// Change the sort spec. The current page is kept.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    // === Page ===

    /// Jump to a page (clamping happens at evaluation time)
    pub fn set_page(&mut self, page: usize) {
        self.request.page = page.max(1);
    }

    /// Step one page back, saturating at 1
    pub fn previous_page(&mut self) {
        self.request.page = self.request.page().saturating_sub(1).max(1);
    }

    /// Step one page forward (evaluation clamps to the last page)
    pub fn next_page(&mut self) {
        self.request.page = self.request.page() + 1;
    }

    pub fn page(&self) -> usize {
        self.request.page()
    }

    pub fn per_page(&self) -> usize {
        self.request.per_page
    }

    // === Evaluation ===

    /// Compute the visible page from a source collection.
    ///
    /// Pure with respect to the collection: the input is never mutated and
    /// identical inputs always produce the identical page.
    pub fn run<R: Record>(&self, records: &[R]) -> Result<PageResult<R>, QueryError> {
        let filtered = apply_filters(records, &self.predicates);
        let sorted = apply_sort(filtered, self.sort.as_ref());
        paginate(&sorted, self.request)
    }

    /// The window of page buttons for a computed result
    pub fn window<R>(&self, result: &PageResult<R>) -> PageWindow {
        page_window(result.page, result.display_pages(), self.window_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::impl_record;

    #[derive(Clone)]
    struct Item {
        id: i64,
        title: String,
        category: String,
        price: f64,
    }

    impl_record!(Item, "items", {
        "title" => |i| FieldValue::from(i.title.clone()),
        "category" => |i| FieldValue::from(i.category.clone()),
        "price" => |i| FieldValue::Float(i.price),
    });

    fn catalog() -> Vec<Item> {
        (1..=30)
            .map(|id| Item {
                id,
                title: format!("Item {}", id),
                category: if id % 2 == 0 { "even" } else { "odd" }.to_string(),
                price: (31 - id) as f64,
            })
            .collect()
    }

    #[test]
    fn test_filter_sort_paginate_composition() {
        let mut query = ListQuery::new(5, 3);
        query.set_predicate(Predicate::facet("category", "even", "All"));
        query.set_sort(Some(SortSpec::ascending("price")));

        let result = query.run(&catalog()).unwrap();
        assert_eq!(result.total_items, 15);
        assert_eq!(result.total_pages, 3);
        // Cheapest even-category items first: ids 30, 28, 26, ...
        let ids: Vec<i64> = result.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![30, 28, 26, 24, 22]);
    }

    #[test]
    fn test_changing_predicate_resets_page() {
        let mut query = ListQuery::new(5, 3);
        query.set_page(3);
        assert_eq!(query.page(), 3);

        query.set_predicate(Predicate::facet("category", "odd", "All"));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_changing_search_resets_page() {
        let mut query = ListQuery::new(5, 3);
        query.set_page(2);
        query.set_predicate(Predicate::contains("title", "Item 1"));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_changing_sort_keeps_page() {
        let mut query = ListQuery::new(5, 3);
        query.set_page(4);
        query.set_sort(Some(SortSpec::descending("price")));
        assert_eq!(query.page(), 4);
    }

    #[test]
    fn test_replacing_predicate_on_same_field() {
        let mut query = ListQuery::new(5, 3);
        query.set_predicate(Predicate::facet("category", "even", "All"));
        query.set_predicate(Predicate::facet("category", "odd", "All"));
        assert_eq!(query.predicates().len(), 1);

        let result = query.run(&catalog()).unwrap();
        assert!(result.items.iter().all(|i| i.category == "odd"));
    }

    #[test]
    fn test_page_stepping_clamps() {
        let mut query = ListQuery::new(8, 3);
        query.previous_page();
        assert_eq!(query.page(), 1);

        // 30 items / 8 per page = 4 pages; step far beyond
        for _ in 0..10 {
            query.next_page();
        }
        let result = query.run(&catalog()).unwrap();
        assert_eq!(result.page, 4);
    }

    #[test]
    fn test_window_follows_result() {
        let mut query = ListQuery::new(3, 3);
        query.set_page(5);
        let result = query.run(&catalog()).unwrap();
        assert_eq!(result.total_pages, 10);
        let window = query.window(&result);
        assert_eq!((window.start, window.end), (4, 6));
    }
}
