//! Order execution pipeline (application-level orchestration).
//!
//! ```text
//! place:       catalogue lookup -> placement engine -> order insert -> availability flip
//! transition:  order lookup -> transition engine -> order update
//! ```
//!
//! The engines in `orderdesk-sales` are pure. This module supplies their
//! inputs from the stores and applies their results. Each operation runs
//! under one service-wide lock, so a lookup and the writes that follow it
//! are never interleaved with another operation.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use orderdesk_core::{Entity, KindedError, OrderId, ProductId};
use orderdesk_products::Product;
use orderdesk_sales::{Order, PlaceOrder, PlacementError, TransitionError, placement, transition};

use crate::store::{CatalogueStore, InMemoryCatalogue, InMemoryOrderStore, OrderStore};

#[derive(Debug)]
pub struct OrderService<C, O> {
    catalogue: C,
    orders: O,
    op_lock: Mutex<()>,
}

impl<C, O> OrderService<C, O> {
    pub fn new(catalogue: C, orders: O) -> Self {
        Self {
            catalogue,
            orders,
            op_lock: Mutex::new(()),
        }
    }

    pub fn into_parts(self) -> (C, O) {
        (self.catalogue, self.orders)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.op_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrderService<InMemoryCatalogue, InMemoryOrderStore> {
    /// In-memory service over the given catalogue with no orders.
    pub fn in_memory(products: impl IntoIterator<Item = Product>) -> Self {
        Self::new(
            InMemoryCatalogue::from_products(products),
            InMemoryOrderStore::new(),
        )
    }
}

impl<C, O> OrderService<C, O>
where
    C: CatalogueStore,
    O: OrderStore,
{
    /// Place an order.
    ///
    /// On success the order is stored (replacing any order with the same id)
    /// and its product is marked unavailable. On failure nothing is written.
    pub fn place(&self, cmd: PlaceOrder) -> Result<Order, PlacementError> {
        let _guard = self.lock();

        let order = placement::place(&cmd, |id| self.catalogue.lookup(id)).inspect_err(|e| {
            tracing::debug!(
                order_id = %cmd.order_id,
                product_id = %cmd.product_id,
                kind = %e.kind(),
                "order placement rejected: {e}"
            );
        })?;

        if let Some(previous) = self.orders.insert(order.clone()) {
            tracing::warn!(
                order_id = %order.id(),
                previous_status = %previous.status(),
                "order id reused; previous order overwritten"
            );
        }
        self.catalogue.mark_unavailable(order.product_id());

        tracing::info!(
            order_id = %order.id(),
            product_id = %order.product_id(),
            quantity = order.quantity().get(),
            order_value = %order.order_value(),
            premium = order.is_premium(),
            "order placed"
        );
        Ok(order)
    }

    /// Move an order to `requested` status.
    ///
    /// `dispatch_date` is recorded only by the `Dispatched` transition. On
    /// failure the stored order is left as it was.
    pub fn transition(
        &self,
        order_id: &OrderId,
        requested: &str,
        dispatch_date: Option<String>,
    ) -> Result<Order, TransitionError> {
        let _guard = self.lock();

        let next = self
            .orders
            .lookup(order_id)
            .ok_or_else(|| TransitionError::OrderNotFound(order_id.clone()))
            .and_then(|current| transition::transition(&current, requested, dispatch_date))
            .inspect_err(|e| {
                tracing::debug!(
                    order_id = %order_id,
                    requested,
                    kind = %e.kind(),
                    "order transition rejected: {e}"
                );
            })?;

        self.orders.update(next.clone());

        tracing::info!(
            order_id = %next.id(),
            status = %next.status(),
            dispatch_date = next.dispatch_date(),
            "order status updated"
        );
        Ok(next)
    }

    pub fn catalogue(&self) -> BTreeMap<ProductId, Product> {
        let _guard = self.lock();
        self.catalogue.snapshot()
    }

    pub fn order(&self, order_id: &OrderId) -> Option<Order> {
        let _guard = self.lock();
        self.orders.lookup(order_id)
    }
}
