use crate::http::error::{error_response, rejection_response};
use crate::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

pub const DEFAULT_PAGE_SIZE: i64 = 10;

pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(q) = match query {
        Ok(q) => q,
        Err(e) => return rejection_response(e),
    };
    let page = q.page.unwrap_or(1).max(1) as usize;
    let page_size = q.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;

    match state
        .payment_service
        .list_payment_transactions(page, page_size)
        .await
    {
        Ok(list) => (axum::http::StatusCode::OK, Json(list)).into_response(),
        Err(e) => error_response(&e),
    }
}
