use crate::domain::payment::BankTransfer;
use crate::http::error::{error_response, rejection_response};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn transfer_to_bank(
    State(state): State<AppState>,
    req: Result<Json<BankTransfer>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match req {
        Ok(r) => r,
        Err(e) => return rejection_response(e),
    };
    match state.payment_service.transfer_to_bank(&req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(&e),
    }
}
