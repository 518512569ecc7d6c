use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.to_string();

        let status = match self {
            AppError::ActivityNotFound | AppError::NotSignedUp => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::ActivityFull | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
            return error_resp(status, code, None);
        }

        tracing::warn!(error = ?self, "Request rejected");
        error_resp(status, code, Some(message))
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
