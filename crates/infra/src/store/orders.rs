use orderdesk_core::OrderId;
use orderdesk_sales::Order;

use crate::store::entity_store::{EntityStore, InMemoryEntityStore};

/// Order records keyed by order id.
pub trait OrderStore: Send + Sync {
    /// Last write wins: an existing order with the same id is replaced and
    /// returned.
    fn insert(&self, order: Order) -> Option<Order>;
    fn lookup(&self, order_id: &OrderId) -> Option<Order>;
    /// Overwrite the stored record with the same id.
    fn update(&self, order: Order);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: InMemoryEntityStore<Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: Order) -> Option<Order> {
        self.orders.upsert(order)
    }

    fn lookup(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.get(order_id)
    }

    fn update(&self, order: Order) {
        self.orders.upsert(order);
    }

    fn len(&self) -> usize {
        self.orders.len()
    }
}
