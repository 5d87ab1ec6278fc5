//! Order status state machine.
//!
//! Every legal move is a row of [`TRANSITIONS`]; any pair not listed is an
//! invalid transition. Nothing leaves `Completed` or `Cancelled`.

use crate::error::TransitionError;
use crate::order::{Order, OrderStatus};

/// What applying a transition changes besides the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Status only.
    Status,
    /// Status plus the dispatch date from the request.
    StatusAndDispatchDate,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub effect: Effect,
}

pub const TRANSITIONS: &[Transition] = &[
    Transition {
        from: OrderStatus::Placed,
        to: OrderStatus::Dispatched,
        effect: Effect::StatusAndDispatchDate,
    },
    Transition {
        from: OrderStatus::Dispatched,
        to: OrderStatus::Completed,
        effect: Effect::Status,
    },
    Transition {
        from: OrderStatus::Placed,
        to: OrderStatus::Cancelled,
        effect: Effect::Status,
    },
    Transition {
        from: OrderStatus::Dispatched,
        to: OrderStatus::Cancelled,
        effect: Effect::Status,
    },
];

pub fn find_transition(from: OrderStatus, to: OrderStatus) -> Option<&'static Transition> {
    TRANSITIONS.iter().find(|t| t.from == from && t.to == to)
}

/// Compute the order that results from moving `order` to `requested`.
///
/// `order` itself is never modified, so a failure leaves the caller's copy
/// as it was. `dispatch_date` is only read for the `Dispatched` move.
pub fn transition(
    order: &Order,
    requested: &str,
    dispatch_date: Option<String>,
) -> Result<Order, TransitionError> {
    let to: OrderStatus = requested
        .parse()
        .map_err(|_| TransitionError::InvalidStatusValue(requested.to_string()))?;

    let from = order.status();
    let row = find_transition(from, to).ok_or(TransitionError::InvalidTransition { from, to })?;

    let mut next = order.clone();
    next.set_status(row.to);
    if row.effect == Effect::StatusAndDispatchDate {
        next.set_dispatch_date(dispatch_date);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{PlaceOrder, place};
    use orderdesk_core::{Entity, OrderId, ProductId};
    use orderdesk_products::seed_products;

    fn placed_order() -> Order {
        let cmd = PlaceOrder {
            order_id: OrderId::new("o-1"),
            product_id: ProductId::new("1"),
            quantity: 2,
        };
        place(&cmd, |id| seed_products().into_iter().find(|p| p.id() == id)).unwrap()
    }

    fn order_in(status: OrderStatus) -> Order {
        let mut order = placed_order();
        order.set_status(status);
        order
    }

    #[test]
    fn placed_dispatched_completed() {
        let order = placed_order();
        let dispatched =
            transition(&order, "Dispatched", Some("2024-05-01".to_string())).unwrap();
        assert_eq!(dispatched.status(), OrderStatus::Dispatched);
        assert_eq!(dispatched.dispatch_date(), Some("2024-05-01"));

        let completed = transition(&dispatched, "Completed", None).unwrap();
        assert_eq!(completed.status(), OrderStatus::Completed);
        assert_eq!(completed.dispatch_date(), Some("2024-05-01"));
    }

    #[test]
    fn placed_to_completed_is_invalid() {
        let err = transition(&placed_order(), "Completed", None).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                from: OrderStatus::Placed,
                to: OrderStatus::Completed,
            }
        );
    }

    #[test]
    fn cancelled_to_dispatched_is_invalid() {
        let cancelled = transition(&placed_order(), "Cancelled", None).unwrap();
        let err = transition(&cancelled, "Dispatched", Some("x".to_string())).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn unrecognized_status_string() {
        let err = transition(&placed_order(), "Shipped", None).unwrap_err();
        assert_eq!(err, TransitionError::InvalidStatusValue("Shipped".to_string()));
    }

    #[test]
    fn dispatch_date_ignored_outside_dispatch() {
        let cancelled = transition(&placed_order(), "Cancelled", Some("2024-01-01".to_string()))
            .unwrap();
        assert_eq!(cancelled.dispatch_date(), None);
    }

    #[test]
    fn only_status_and_dispatch_date_change() {
        let order = placed_order();
        let next = transition(&order, "Dispatched", Some("d".to_string())).unwrap();
        assert_eq!(next.order_value(), order.order_value());
        assert_eq!(next.quantity(), order.quantity());
        assert_eq!(next.product_id(), order.product_id());
        assert_eq!(next.is_premium(), order.is_premium());
        assert_eq!(next.id(), order.id());
    }

    #[test]
    fn terminal_states_have_no_outgoing_rows() {
        for row in TRANSITIONS {
            assert!(!row.from.is_terminal(), "row leaves terminal state: {row:?}");
            assert_ne!(row.to, OrderStatus::Placed);
        }
    }

    #[test]
    fn every_pair_matches_the_table() {
        let expected_allowed = [
            (OrderStatus::Placed, OrderStatus::Dispatched),
            (OrderStatus::Dispatched, OrderStatus::Completed),
            (OrderStatus::Placed, OrderStatus::Cancelled),
            (OrderStatus::Dispatched, OrderStatus::Cancelled),
        ];

        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let order = order_in(from);
                let result = transition(&order, to.as_str(), None);
                if expected_allowed.contains(&(from, to)) {
                    assert_eq!(result.map(|o| o.status()), Ok(to), "{from} -> {to}");
                } else {
                    assert_eq!(
                        result,
                        Err(TransitionError::InvalidTransition { from, to }),
                        "{from} -> {to}"
                    );
                }
            }
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = OrderStatus> {
            prop::sample::select(OrderStatus::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a failed transition never yields a changed order.
            #[test]
            fn failure_leaves_order_unchanged(from in any_status(), requested in "[A-Za-z]{0,12}") {
                let order = order_in(from);
                let before = order.clone();
                let result = transition(&order, &requested, Some("d".to_string()));
                prop_assert_eq!(&order, &before);
                match result {
                    Ok(next) => prop_assert!(find_transition(from, next.status()).is_some()),
                    Err(TransitionError::InvalidStatusValue(s)) => {
                        prop_assert!(s.parse::<OrderStatus>().is_err())
                    }
                    Err(TransitionError::InvalidTransition { from: f, to }) => {
                        prop_assert_eq!(f, from);
                        prop_assert!(find_transition(f, to).is_none());
                    }
                    Err(e) => prop_assert!(false, "unexpected error {e:?}"),
                }
            }

            /// Property: walking random requests never leaves a terminal state.
            #[test]
            fn terminal_states_are_absorbing(path in prop::collection::vec(any_status(), 0..8)) {
                let mut order = placed_order();
                for requested in path {
                    let was_terminal = order.status().is_terminal();
                    if let Ok(next) = transition(&order, requested.as_str(), None) {
                        prop_assert!(!was_terminal);
                        order = next;
                    }
                }
            }
        }
    }
}
