use addispay::config::AppConfig;
use addispay::gateways::addispay::AddisPayClient;
use addispay::gateways::mock::MockGateway;
use addispay::gateways::PaymentGatewayApi;
use addispay::repo::transactions_repo::InMemoryTransactionsRepo;
use addispay::repo::users_repo::{InMemoryUsersRepo, UserStore};
use addispay::service::payment_service::PaymentService;
use addispay::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load .env first so RUST_LOG set there reaches the filter
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match dotenv {
        Ok(p) => tracing::info!(path = %p.display(), "loaded environment from .env"),
        Err(e) => tracing::debug!("no .env loaded: {e}"),
    };

    let cfg = AppConfig::from_env();
    if cfg.api_key.is_empty() {
        tracing::warn!("API_KEY is not set, gateway calls will be unauthorized");
    }

    let gateway: Arc<dyn PaymentGatewayApi> = if cfg.gateway_adapter == "MOCK" {
        Arc::new(MockGateway::new(cfg.mock_behavior.clone()))
    } else {
        Arc::new(AddisPayClient::from_config(&cfg)?)
    };
    tracing::info!(adapter = gateway.name(), "gateway adapter selected");

    let users_repo = InMemoryUsersRepo::seeded();
    let jon = users_repo
        .get_by_id(1002)
        .await?
        .ok_or_else(|| anyhow::anyhow!("demo user 1002 missing"))?;
    let mary = users_repo
        .get_by_id(1032)
        .await?
        .ok_or_else(|| anyhow::anyhow!("demo user 1032 missing"))?;
    let transactions_repo = InMemoryTransactionsRepo::seeded(jon, mary);

    let state = AppState {
        payment_service: PaymentService {
            gateway,
            users_repo: Arc::new(users_repo),
            transactions_repo: Arc::new(transactions_repo),
            callback_url: cfg.callback_url.clone(),
        },
    };

    let app = addispay::http::routes::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
