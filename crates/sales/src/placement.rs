//! Order placement: quantity validation, product resolution, pricing.
//!
//! Placement never checks the product's availability flag. The caller marks
//! the product unavailable after every successful placement, whatever the
//! quantity, so one order exhausts a product.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use orderdesk_core::{Money, OrderId, ProductId};
use orderdesk_products::Product;

use crate::error::PlacementError;
use crate::order::{Order, Quantity};

/// Multiplier applied to the order value of `Premium` products.
pub const PREMIUM_DISCOUNT_FACTOR: Decimal = dec!(0.9);

/// Command: PlaceOrder.
///
/// `quantity` is the raw requested value; it is validated by [`place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Order value and premium flag for `quantity` units of `product`.
pub fn price(product: &Product, quantity: Quantity) -> (Money, bool) {
    let gross = product.unit_price() * quantity.get();
    if product.category().is_premium() {
        (gross.scaled(PREMIUM_DISCOUNT_FACTOR), true)
    } else {
        (gross, false)
    }
}

/// Validate `cmd` and build the resulting `Placed` order.
///
/// Checks run in order and stop at the first failure: quantity, then product
/// lookup. `lookup` is not called when the quantity is invalid.
pub fn place<F>(cmd: &PlaceOrder, lookup: F) -> Result<Order, PlacementError>
where
    F: FnOnce(&ProductId) -> Option<Product>,
{
    let quantity =
        Quantity::new(cmd.quantity).ok_or(PlacementError::InvalidQuantity(cmd.quantity))?;

    let product = lookup(&cmd.product_id)
        .ok_or_else(|| PlacementError::ProductNotFound(cmd.product_id.clone()))?;

    let (order_value, premium) = price(&product, quantity);

    Ok(Order::placed(
        cmd.order_id.clone(),
        cmd.product_id.clone(),
        quantity,
        order_value,
        premium,
    ))
}
