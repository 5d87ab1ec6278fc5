use std::collections::BTreeMap;

use orderdesk_core::{Entity, ProductId};
use orderdesk_products::Product;

use crate::store::entity_store::{EntityStore, InMemoryEntityStore};

/// Catalogue of products, fixed at construction apart from availability.
pub trait CatalogueStore: Send + Sync {
    fn lookup(&self, product_id: &ProductId) -> Option<Product>;
    /// Idempotent; unknown ids are ignored.
    fn mark_unavailable(&self, product_id: &ProductId);
    /// Point-in-time copy, ordered by product id.
    fn snapshot(&self) -> BTreeMap<ProductId, Product>;
}

#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    products: InMemoryEntityStore<Product>,
}

impl InMemoryCatalogue {
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }
}

impl CatalogueStore for InMemoryCatalogue {
    fn lookup(&self, product_id: &ProductId) -> Option<Product> {
        self.products.get(product_id)
    }

    fn mark_unavailable(&self, product_id: &ProductId) {
        self.products
            .modify(product_id, &mut |p: &mut Product| p.mark_unavailable());
    }

    fn snapshot(&self) -> BTreeMap<ProductId, Product> {
        self.products
            .list()
            .into_iter()
            .map(|p| (p.id().clone(), p))
            .collect()
    }
}
