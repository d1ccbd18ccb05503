use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use amity_graph::GraphError;

/// HTTP-facing errors, serialized as a JSON `error` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Facade failures surface as 500 with the failure message. The API keeps
/// no distinct 4xx mapping for domain errors such as a missing user in a
/// relationship operation.
impl From<GraphError> for ApiError {
    fn from(err: GraphError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
