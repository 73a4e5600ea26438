use crate::domain::transaction::CheckoutForm;
use crate::http::error::{error_response, rejection_response};
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn checkout(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
    form: Result<Json<CheckoutForm>, JsonRejection>,
) -> impl IntoResponse {
    let Path(user_id) = match user_id {
        Ok(p) => p,
        Err(e) => return rejection_response(e),
    };
    let Json(form) = match form {
        Ok(f) => f,
        Err(e) => return rejection_response(e),
    };

    match state.payment_service.checkout(user_id, &form).await {
        Ok(tx) => (axum::http::StatusCode::OK, Json(tx)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn verify(
    State(state): State<AppState>,
    Path(tx_ref): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.verify(&tx_ref).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
