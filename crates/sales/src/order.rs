use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderdesk_core::{Entity, Money, OrderId, ProductId, ValueObject};

/// Number of units requested by an order, always within `1..=10`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    /// Returns `None` when `raw` is outside `MIN..=MAX`.
    pub fn new(raw: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            u32::try_from(raw).ok().map(Self)
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

/// Order status lifecycle.
///
/// `Placed` is set only by placement. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Dispatched,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Dispatched,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// An order against one catalogue product.
///
/// Only placement creates orders and only the transition engine changes
/// them; value, quantity and product reference are fixed at placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    product_id: ProductId,
    order_value: Money,
    dispatch_date: Option<String>,
    status: OrderStatus,
    quantity: Quantity,
    premium: bool,
}

impl Order {
    pub(crate) fn placed(
        id: OrderId,
        product_id: ProductId,
        quantity: Quantity,
        order_value: Money,
        premium: bool,
    ) -> Self {
        Self {
            id,
            product_id,
            order_value,
            dispatch_date: None,
            status: OrderStatus::Placed,
            quantity,
            premium,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn order_value(&self) -> Money {
        self.order_value
    }

    pub fn dispatch_date(&self) -> Option<&str> {
        self.dispatch_date.as_deref()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub(crate) fn set_dispatch_date(&mut self, dispatch_date: Option<String>) {
        self.dispatch_date = dispatch_date;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
