//! Error classification shared by every layer.
//!
//! Domain crates define their own `thiserror` enums; each variant maps to one
//! [`ErrorKind`], which is what the transport layer turns into a response.

use serde::Serialize;

/// Every failure a single request can end with.
///
/// All kinds are terminal to the request: no retry, no partial state change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Requested quantity outside `1..=10`.
    InvalidQuantity,
    /// Product identifier is not in the catalogue.
    ProductNotFound,
    /// Order identifier is not in the order store.
    OrderNotFound,
    /// Requested status string is not an order status.
    InvalidStatusValue,
    /// Requested status is not reachable from the current one.
    InvalidTransition,
    /// The request could not be parsed at all.
    MalformedInput,
}

impl ErrorKind {
    /// Stable, machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidQuantity => "invalid_quantity",
            ErrorKind::ProductNotFound => "product_not_found",
            ErrorKind::OrderNotFound => "order_not_found",
            ErrorKind::InvalidStatusValue => "invalid_status_value",
            ErrorKind::InvalidTransition => "invalid_transition",
            ErrorKind::MalformedInput => "malformed_input",
        }
    }

    pub fn is_not_found(self) -> bool {
        matches!(self, ErrorKind::ProductNotFound | ErrorKind::OrderNotFound)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// An error that can report which [`ErrorKind`] it belongs to.
pub trait KindedError: std::error::Error {
    fn kind(&self) -> ErrorKind;
}
