use crate::domain::validation::{ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .positive("amount", self.amount, "invalid amount: must be greater than 0")
            .required("currency", &self.currency, "currency is required")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub transaction_id: String,
    pub user: Arc<User>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub merchant_fee: Decimal,
    pub status: TransactionStatus,
    #[serde(rename = "transaction_date")]
    pub txn_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<PaymentTransaction>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}
