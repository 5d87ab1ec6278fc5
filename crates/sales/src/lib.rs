//! Sales Orders domain module.
//!
//! This crate contains business rules for orders (pricing at placement and
//! the status state machine), implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod error;
pub mod order;
pub mod placement;
pub mod transition;

pub use error::{PlacementError, TransitionError};
pub use order::{Order, OrderStatus, Quantity, UnknownStatus};
pub use orderdesk_core::OrderId;
pub use placement::{PREMIUM_DISCOUNT_FACTOR, PlaceOrder, place, price};
pub use transition::{Effect, TRANSITIONS, Transition, find_transition, transition};
