use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use aegis_core::error::{AegisError, ClientCode};

/// `AegisError` rendered as `{ "code": ..., "msg": ... }`.
#[derive(Debug)]
pub struct ApiError(pub AegisError);

impl From<AegisError> for ApiError {
    fn from(e: AegisError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::ProbeFailed => StatusCode::BAD_GATEWAY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = json!({
            "code": self.0.client_code().as_str(),
            "msg": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
