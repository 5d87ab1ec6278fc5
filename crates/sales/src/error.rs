use thiserror::Error;

use orderdesk_core::{ErrorKind, KindedError, OrderId, ProductId};

use crate::order::OrderStatus;

/// Why an order could not be placed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid product quantity: {0} (must be between 1 and 10)")]
    InvalidQuantity(i64),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Why an order's status could not be changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("invalid order status: {0:?}")]
    InvalidStatusValue(String),

    #[error("invalid order status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

impl KindedError for PlacementError {
    fn kind(&self) -> ErrorKind {
        match self {
            PlacementError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            PlacementError::ProductNotFound(_) => ErrorKind::ProductNotFound,
        }
    }
}

impl KindedError for TransitionError {
    fn kind(&self) -> ErrorKind {
        match self {
            TransitionError::OrderNotFound(_) => ErrorKind::OrderNotFound,
            TransitionError::InvalidStatusValue(_) => ErrorKind::InvalidStatusValue,
            TransitionError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
        }
    }
}
