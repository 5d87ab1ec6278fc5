use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn get_catalogue(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<std::collections::BTreeMap<orderdesk_core::ProductId, dto::ProductResponse>> {
    Json(dto::catalogue_to_json(services.catalogue()))
}
