use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use orderdesk_core::{ErrorKind, KindedError};
use orderdesk_sales::{PlacementError, TransitionError};

/// Every error a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ApiError {
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedInput(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Placement(e) => e.kind(),
            ApiError::Transition(e) => e.kind(),
            ApiError::MalformedInput(_) => ErrorKind::MalformedInput,
        }
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    if kind.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        json_error(status_for(kind), kind.code(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
