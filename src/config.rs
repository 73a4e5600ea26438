#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_key: String,
    pub callback_url: String,
    pub checkout_base_url: String,
    pub api_base_url: String,
    pub gateway_adapter: String,
    pub mock_behavior: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            api_key: std::env::var("API_KEY").unwrap_or_default(),
            callback_url: std::env::var("ADDISPAY_CALLBACK_URL").unwrap_or_default(),
            checkout_base_url: std::env::var("ADDISPAY_CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| "https://checkouts.addispay.et".to_string()),
            api_base_url: std::env::var("ADDISPAY_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.addispay.et".to_string()),
            gateway_adapter: std::env::var("GATEWAY_ADAPTER")
                .map(|s| s.to_uppercase())
                .unwrap_or_else(|_| "ADDISPAY".to_string()),
            mock_behavior: std::env::var("MOCK_GATEWAY_BEHAVIOR")
                .unwrap_or_else(|_| "ALWAYS_SUCCESS".to_string()),
        }
    }
}

// AppConfig carries the API key, keep it out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_key", &"***")
            .field("callback_url", &self.callback_url)
            .field("checkout_base_url", &self.checkout_base_url)
            .field("api_base_url", &self.api_base_url)
            .field("gateway_adapter", &self.gateway_adapter)
            .field("mock_behavior", &self.mock_behavior)
            .finish()
    }
}
