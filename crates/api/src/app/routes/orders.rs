use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app::dto::{self, OrderResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: dto::PlaceOrderRequest = dto::decode(&body).map_err(ApiError::malformed)?;

    let order = services.place(req.into())?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))).into_response())
}

/// The order is resolved before the body is parsed, so an unknown order is
/// reported as not found even when the body is unreadable.
pub async fn update_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<OrderResponse>, ApiError> {
    let query = dto::StatusUpdateQuery::from_pairs(pairs);
    let req: dto::StatusUpdateRequest = match dto::decode(&body) {
        Ok(req) => req,
        Err(e) => {
            if services.order(&query.order_id).is_none() {
                return Err(orderdesk_sales::TransitionError::OrderNotFound(query.order_id).into());
            }
            return Err(ApiError::malformed(e));
        }
    };

    let order = services.transition(&query.order_id, &req.status, req.dispatch_date())?;

    Ok(Json(OrderResponse::from(order)))
}
