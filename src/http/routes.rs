use crate::http::handlers::{payments, transactions, transfers};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/users/:user_id/checkout", post(payments::checkout))
        .route("/transactions", get(transactions::list_transactions))
        .route(
            "/transactions/:tx_ref/verification",
            get(payments::verify),
        )
        .route("/transfers", post(transfers::transfer_to_bank))
        .with_state(state)
}
