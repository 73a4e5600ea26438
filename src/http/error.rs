use crate::domain::payment::{ErrorEnvelope, ErrorPayload};
use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn status_for(e: &Error) -> StatusCode {
    match e {
        Error::Validation(_) | Error::Malformed(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::GatewayRejected { .. } => StatusCode::PAYMENT_REQUIRED,
        Error::Transport(t) if t.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        Error::Transport(_) | Error::Decode(_) => StatusCode::BAD_GATEWAY,
        Error::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        Error::Config(_) | Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(e: &Error) -> Response {
    let details = match e {
        Error::Validation(errs) => serde_json::to_value(&errs.0).ok(),
        _ => None,
    };

    (
        status_for(e),
        Json(ErrorEnvelope {
            error: ErrorPayload {
                code: e.code().to_string(),
                message: e.to_string(),
                details,
            },
        }),
    )
        .into_response()
}

/// Extractor rejections (bad JSON, bad query string, bad path) in the same
/// envelope as service errors.
pub fn rejection_response(rejection: impl std::fmt::Display) -> Response {
    error_response(&Error::Malformed(rejection.to_string()))
}
