use axum::{
    routing::{get, post},
    Router,
};

pub mod catalogue;
pub mod orders;
pub mod system;

/// Router for the catalogue and order endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/catalogue", get(catalogue::get_catalogue))
        .route("/order", post(orders::place_order))
        .route(
            "/order/status",
            post(orders::update_order_status).put(orders::update_order_status),
        )
}
