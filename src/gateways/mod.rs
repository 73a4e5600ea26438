use crate::domain::payment::{
    BankTransfer, BankTransferResponse, PaymentRequest, PaymentResponse, VerifyResponse,
};
use crate::error::{Error, Result};
use std::future::Future;

pub mod addispay;
pub mod mask;
pub mod mock;

/// Remote operations offered by the payment gateway.
///
/// Implementations validate input locally before any I/O and hand back the
/// decoded response as-is: a response whose `status` is not `"success"` is
/// still `Ok`, interpreting it is up to the caller.
#[async_trait::async_trait]
pub trait PaymentGatewayApi: Send + Sync {
    fn name(&self) -> &'static str;

    async fn payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse>;

    async fn verify(&self, transaction_ref: &str) -> Result<VerifyResponse>;

    async fn transfer_to_bank(&self, request: &BankTransfer) -> Result<BankTransferResponse>;
}

/// Runs `op` until it finishes or `signal` resolves, whichever comes first.
///
/// When the signal wins the in-flight request is dropped, which aborts the
/// underlying connection.
pub async fn with_cancellation<T, S, F>(signal: S, op: F) -> Result<T>
where
    S: Future<Output = ()>,
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        res = op => res,
        _ = signal => {
            tracing::warn!("gateway request cancelled by caller");
            Err(Error::Cancelled)
        }
    }
}
