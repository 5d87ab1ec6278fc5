//! The fixed catalogue the service boots with.

use orderdesk_core::Money;
use rust_decimal_macros::dec;

use crate::product::{Product, ProductCategory};

/// Three products, all available: `"1"` Premium at 10.0, `"2"` Regular at
/// 5.0, `"3"` Budget at 3.0.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Product 1", Money::new(dec!(10.0)).unwrap_or_default(), ProductCategory::Premium),
        Product::new("2", "Product 2", Money::new(dec!(5.0)).unwrap_or_default(), ProductCategory::Regular),
        Product::new("3", "Product 3", Money::new(dec!(3.0)).unwrap_or_default(), ProductCategory::Budget),
    ]
}
