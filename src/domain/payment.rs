use crate::domain::validation::{ValidationErrors, Validator};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Free-form checkout page settings (title, description, logo, ...).
pub type Customization = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub currency: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub callback_url: String,
    #[serde(rename = "tx_ref")]
    pub transaction_ref: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub customization: Customization,
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required(
                "tx_ref",
                &self.transaction_ref,
                "transaction reference is required",
            )
            .required("currency", &self.currency, "currency is required")
            .positive("amount", self.amount, "amount is required")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    #[serde(default)]
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: CheckoutData,
}

impl PaymentResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyData {
    #[serde(
        rename = "charge",
        default,
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub transaction_fee: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: VerifyData,
}

impl VerifyResponse {
    /// Zero until the transaction has been paid.
    pub fn transaction_fee(&self) -> Decimal {
        self.data.transaction_fee.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransfer {
    pub account_name: String,
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default)]
    pub beneficiary_name: String,
    pub currency: String,
    pub reference: String,
    pub bank_code: String,
}

impl BankTransfer {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("account_name", &self.account_name, "account name is required")
            .required(
                "account_number",
                &self.account_number,
                "account number is required",
            )
            .positive("amount", self.amount, "amount is required")
            .required("currency", &self.currency, "currency is required")
            .required("reference", &self.reference, "reference is required")
            .required("bank_code", &self.bank_code, "bank code is required")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransferResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
