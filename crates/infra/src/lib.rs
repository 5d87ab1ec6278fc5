//! Infrastructure layer: in-memory stores and the order service that ties
//! them to the domain engines.

pub mod order_service;
pub mod store;

pub use order_service::OrderService;
pub use store::{
    CatalogueStore, EntityStore, InMemoryCatalogue, InMemoryEntityStore, InMemoryOrderStore,
    OrderStore,
};
