//! In-memory storage for catalogue products and orders.

pub mod catalogue;
pub mod entity_store;
pub mod orders;

pub use catalogue::{CatalogueStore, InMemoryCatalogue};
pub use entity_store::{EntityStore, InMemoryEntityStore};
pub use orders::{InMemoryOrderStore, OrderStore};
