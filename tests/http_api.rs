use addispay::gateways::mock::MockGateway;
use addispay::repo::transactions_repo::InMemoryTransactionsRepo;
use addispay::repo::users_repo::InMemoryUsersRepo;
use addispay::service::payment_service::PaymentService;
use addispay::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

async fn serve(behavior: &str) -> String {
    let state = AppState {
        payment_service: PaymentService {
            gateway: Arc::new(MockGateway::new(behavior)),
            users_repo: Arc::new(InMemoryUsersRepo::seeded()),
            transactions_repo: Arc::new(InMemoryTransactionsRepo::new()),
            callback_url: "https://merchant.example/callback".to_string(),
        },
    };
    let app = addispay::http::routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_is_ok() {
    let base = serve("ALWAYS_SUCCESS").await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn checkout_then_list() {
    let base = serve("ALWAYS_SUCCESS").await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{base}/users/1002/checkout"))
        .json(&json!({"amount": 10, "currency": "ETB"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let tx: Value = resp.json().await.unwrap();
    assert_eq!(tx["status"], "pending");
    assert_eq!(tx["currency"], "ETB");
    assert_eq!(tx["user"]["id"], 1002);

    let list: Value = http
        .get(format!("{base}/transactions?page=1&page_size=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(list["transactions"][0]["transaction_id"], tx["transaction_id"]);
}

#[tokio::test]
async fn list_defaults_and_clamps() {
    let base = serve("ALWAYS_SUCCESS").await;

    let list: Value = reqwest::get(format!("{base}/transactions?page=-3&page_size=0"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["page"], 1);
    assert_eq!(list["page_size"], 1);
    assert_eq!(list["total"], 0);

    let list: Value = reqwest::get(format!("{base}/transactions"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["page_size"], 10);
}

#[tokio::test]
async fn invalid_form_is_bad_request() {
    let base = serve("ALWAYS_SUCCESS").await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/users/1002/checkout"))
        .json(&json!({"amount": 0, "currency": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["details"][0]["field"], "amount");
    assert_eq!(body["error"]["details"][1]["field"], "currency");
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let base = serve("ALWAYS_SUCCESS").await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/users/9/checkout"))
        .json(&json!({"amount": 10, "currency": "ETB"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn declined_checkout_is_payment_required() {
    let base = serve("ALWAYS_DECLINE").await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/users/1002/checkout"))
        .json(&json!({"amount": 10, "currency": "ETB"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 402);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "GATEWAY_REJECTED");
    assert_eq!(body["error"]["message"], "failed to checkout: mock decline");

    let list: Value = reqwest::get(format!("{base}/transactions"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn verify_and_transfer_pass_through() {
    let base = serve("ALWAYS_SUCCESS").await;
    let http = reqwest::Client::new();

    let verified: Value = http
        .get(format!("{base}/transactions/abc123/verification"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(verified["status"], "success");

    let resp = http
        .post(format!("{base}/transfers"))
        .json(&json!({
            "account_name": "Yinebeb Tariku",
            "account_number": "34264263",
            "amount": 10,
            "beneficiary_name": "Yinebeb Tariku",
            "currency": "ETB",
            "reference": "3264063st01",
            "bank_code": "32735b19-bb36-4cd7-b226-fb7451cd98f0"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], "mock_transfer_3264063st01");

    let resp = http
        .post(format!("{base}/transfers"))
        .json(&json!({
            "account_name": "",
            "account_number": "34264263",
            "amount": 10,
            "currency": "ETB",
            "reference": "3264063st01",
            "bank_code": "x"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() {
    let base = serve("ALWAYS_SUCCESS").await;
    let http = reqwest::Client::new();

    let missing_amount = http
        .post(format!("{base}/users/1002/checkout"))
        .json(&json!({"currency": "ETB"}))
        .send()
        .await
        .unwrap();
    let not_json = http
        .post(format!("{base}/transfers"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let bad_page = http
        .get(format!("{base}/transactions?page=abc"))
        .send()
        .await
        .unwrap();
    let bad_user = http
        .post(format!("{base}/users/jon/checkout"))
        .json(&json!({"amount": 10, "currency": "ETB"}))
        .send()
        .await
        .unwrap();

    for resp in [missing_amount, not_json, bad_page, bad_user] {
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"]["code"], "MALFORMED_REQUEST");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }
}
