use crate::domain::payment::{
    BankTransfer, BankTransferResponse, CheckoutData, PaymentRequest, PaymentResponse, VerifyData,
    VerifyResponse,
};
use crate::error::Result;
use crate::gateways::PaymentGatewayApi;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process stand-in for the gateway.
///
/// `behavior` is `ALWAYS_DECLINE` to reject every call, anything else
/// accepts it.
pub struct MockGateway {
    pub behavior: String,
    calls: AtomicUsize,
}

impl MockGateway {
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls that got past local validation.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn declines(&self) -> bool {
        self.behavior == "ALWAYS_DECLINE"
    }
}

#[async_trait::async_trait]
impl PaymentGatewayApi for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        request.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.declines() {
            return Ok(PaymentResponse {
                status: "failed".to_string(),
                message: "mock decline".to_string(),
                data: CheckoutData::default(),
            });
        }

        Ok(PaymentResponse {
            status: "success".to_string(),
            message: "Hosted Link".to_string(),
            data: CheckoutData {
                checkout_url: format!(
                    "https://checkout.mock.local/checkout/payment/{}",
                    request.transaction_ref
                ),
            },
        })
    }

    async fn verify(&self, _transaction_ref: &str) -> Result<VerifyResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.declines() {
            return Ok(VerifyResponse {
                status: "failed".to_string(),
                message: "Invalid transaction or transaction not found".to_string(),
                data: VerifyData::default(),
            });
        }

        Ok(VerifyResponse {
            status: "success".to_string(),
            message: "Payment details fetched successfully".to_string(),
            data: VerifyData {
                transaction_fee: Some(Decimal::ZERO),
            },
        })
    }

    async fn transfer_to_bank(&self, request: &BankTransfer) -> Result<BankTransferResponse> {
        request.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.declines() {
            return Ok(BankTransferResponse {
                status: "failed".to_string(),
                message: "mock decline".to_string(),
                data: String::new(),
            });
        }

        Ok(BankTransferResponse {
            status: "success".to_string(),
            message: "Transfer queued successfully in Test Mode.".to_string(),
            data: format!("mock_transfer_{}", request.reference),
        })
    }
}
