use crate::domain::payment::{
    BankTransfer, BankTransferResponse, Customization, PaymentRequest, VerifyResponse,
};
use crate::domain::transaction::{
    CheckoutForm, PaymentTransaction, TransactionList, TransactionStatus,
};
use crate::error::{Error, Result};
use crate::gateways::PaymentGatewayApi;
use crate::repo::transactions_repo::TransactionStore;
use crate::repo::users_repo::UserStore;
use crate::service::reference::{random_string, TRANSACTION_REF_LEN};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn PaymentGatewayApi>,
    pub users_repo: Arc<dyn UserStore>,
    pub transactions_repo: Arc<dyn TransactionStore>,
    pub callback_url: String,
}

impl PaymentService {
    /// Starts a hosted checkout for `user_id` and records it as pending.
    ///
    /// Nothing is stored unless the gateway answers with `status == "success"`.
    pub async fn checkout(&self, user_id: i64, form: &CheckoutForm) -> Result<PaymentTransaction> {
        if let Err(e) = form.validate() {
            tracing::warn!(user_id, error = %e, "invalid checkout form");
            return Err(e.into());
        }

        let user = self
            .users_repo
            .get_by_id(user_id)
            .await?
            .ok_or(Error::NotFound(user_id))?;

        let invoice = PaymentRequest {
            amount: form.amount,
            currency: form.currency.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: None,
            callback_url: self.callback_url.clone(),
            transaction_ref: random_string(TRANSACTION_REF_LEN),
            customization: Customization::new(),
        };

        let response = self.gateway.payment_request(&invoice).await?;
        if !response.is_success() {
            tracing::error!(
                user_id,
                tx_ref = %invoice.transaction_ref,
                status = %response.status,
                message = %response.message,
                "gateway rejected checkout"
            );
            return Err(Error::GatewayRejected {
                message: response.message,
            });
        }

        let transaction = PaymentTransaction {
            transaction_id: invoice.transaction_ref,
            user,
            amount: form.amount,
            currency: form.currency.clone(),
            merchant_fee: Decimal::ZERO,
            status: TransactionStatus::Pending,
            txn_date: chrono::Utc::now(),
        };
        self.transactions_repo.append(transaction.clone()).await?;

        tracing::info!(
            user_id,
            tx_ref = %transaction.transaction_id,
            checkout_url = %response.data.checkout_url,
            "checkout pending on gateway"
        );
        Ok(transaction)
    }

    /// One page of transactions, most recent first. `page` is 1-indexed;
    /// zero values for `page` and `page_size` are treated as 1.
    pub async fn list_payment_transactions(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<TransactionList> {
        let page = page.max(1);
        let page_size = page_size.max(1);

        let total = self.transactions_repo.count().await?;
        let start = (page - 1).saturating_mul(page_size);
        let transactions = if start >= total {
            Vec::new()
        } else {
            let end = start.saturating_add(page_size).min(total);
            self.transactions_repo.slice(start, end).await?
        };

        Ok(TransactionList {
            transactions,
            page,
            page_size,
            total,
        })
    }

    pub async fn verify(&self, transaction_ref: &str) -> Result<VerifyResponse> {
        self.gateway.verify(transaction_ref).await
    }

    pub async fn transfer_to_bank(&self, request: &BankTransfer) -> Result<BankTransferResponse> {
        self.gateway.transfer_to_bank(request).await
    }
}
