use crate::config::AppConfig;
use crate::domain::payment::{
    BankTransfer, BankTransferResponse, PaymentRequest, PaymentResponse, VerifyResponse,
};
use crate::error::{Error, Result};
use crate::gateways::{mask, PaymentGatewayApi};
use reqwest::header::{CONNECTION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const INIT_PAYMENT_PATH: &str = "/api/v1/payments/init";
pub const VERIFY_PAYMENT_PATH: &str = "/api/v1/transaction/verify";
pub const TRANSFER_PATH: &str = "/api/v1/transfers";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the AddisPay API.
///
/// Payments are initiated and verified on the checkout host, bank transfers
/// go to the API host.
pub struct AddisPayClient {
    pub checkout_base_url: String,
    pub api_base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub client: reqwest::Client,
}

impl AddisPayClient {
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        Self::new(
            &cfg.checkout_base_url,
            &cfg.api_base_url,
            &cfg.api_key,
            REQUEST_TIMEOUT,
        )
    }

    pub fn new(
        checkout_base_url: &str,
        api_base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self> {
        for base in [checkout_base_url, api_base_url] {
            reqwest::Url::parse(base).map_err(|e| Error::Config(format!("base url {base}: {e}")))?;
        }

        // every call gets a fresh connection
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            checkout_base_url: checkout_base_url.trim_end_matches('/').to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout,
            client,
        })
    }

    fn request<U: reqwest::IntoUrl>(&self, method: Method, url: U) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(CONNECTION, "close")
            .timeout(self.timeout)
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req.send().await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        tracing::debug!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body),
            "AddisPay API response"
        );

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl PaymentGatewayApi for AddisPayClient {
    fn name(&self) -> &'static str {
        "addispay"
    }

    async fn payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %e, tx_ref = %request.transaction_ref, "rejecting payment request");
            return Err(e.into());
        }

        let url = format!("{}{}", self.checkout_base_url, INIT_PAYMENT_PATH);
        tracing::debug!(%url, data = %mask::secure_serializable(request), "AddisPay payment init request");
        self.send(self.request(Method::POST, url).json(request)).await
    }

    async fn verify(&self, transaction_ref: &str) -> Result<VerifyResponse> {
        let base = format!("{}{}", self.checkout_base_url, VERIFY_PAYMENT_PATH);
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| Error::Config(format!("verify url {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("verify url {base} cannot take a path")))?
            .push(transaction_ref);
        tracing::debug!(%url, "AddisPay verify request");
        self.send(self.request(Method::GET, url)).await
    }

    async fn transfer_to_bank(&self, request: &BankTransfer) -> Result<BankTransferResponse> {
        if let Err(e) = request.validate() {
            tracing::warn!(
                error = %e,
                data = %mask::secure_serializable(request),
                "rejecting bank transfer"
            );
            return Err(e.into());
        }

        let url = format!("{}{}", self.api_base_url, TRANSFER_PATH);
        tracing::debug!(%url, data = %mask::secure_serializable(request), "AddisPay transfer request");
        self.send(self.request(Method::POST, url).json(request)).await
    }
}
