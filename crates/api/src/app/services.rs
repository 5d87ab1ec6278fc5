use orderdesk_infra::{InMemoryCatalogue, InMemoryOrderStore, OrderService};
use orderdesk_products::seed_products;

/// Services shared by every handler.
pub type AppServices = OrderService<InMemoryCatalogue, InMemoryOrderStore>;

/// In-memory service over the seed catalogue.
pub fn build_services() -> AppServices {
    let products = seed_products();
    tracing::info!(products = products.len(), "catalogue seeded");
    OrderService::in_memory(products)
}
