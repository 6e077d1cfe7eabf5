//! Home-page category showcase

use crate::source::{RecordSource, fetch_collection};
use crate::views::ViewPhase;
use crate::views::products::Product;
use indexmap::IndexMap;

/// One showcase tile: a category and its representative image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub category: String,
    pub image_url: Option<String>,
}

/// The featured-categories strip on the home page
///
/// Configured with a fixed category list; each tile shows the first
/// product image found for that category. Categories with no product in
/// the catalog are simply absent.
pub struct CategoryShowcase {
    phase: ViewPhase,
    tiles: Vec<CategoryTile>,
}

impl CategoryShowcase {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            tiles: Vec::new(),
        }
    }

    /// Fetch the catalog and build one tile per featured category
    pub async fn mount(&mut self, source: &dyn RecordSource, featured: &[String]) {
        match fetch_collection::<Product>(source, "/products").await {
            Ok(products) => {
                self.tiles = build_tiles(products, featured);
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "showcase fetch failed");
                self.phase = ViewPhase::Error(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn tiles(&self) -> &[CategoryTile] {
        &self.tiles
    }
}

impl Default for CategoryShowcase {
    fn default() -> Self {
        Self::new()
    }
}

fn build_tiles(products: Vec<Product>, featured: &[String]) -> Vec<CategoryTile> {
    let mut by_category: IndexMap<String, Product> = IndexMap::new();
    for product in products {
        if featured.contains(&product.category) {
            by_category
                .entry(product.category.clone())
                .or_insert(product);
        }
    }

    by_category
        .into_iter()
        .map(|(category, product)| CategoryTile {
            category,
            image_url: product.images.first().cloned(),
        })
        .collect()
}
