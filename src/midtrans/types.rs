//! Wire types for the gateway charge call.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Bank, PaymentMethod};

#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub payment_type: PaymentMethod,
    pub transaction_details: TransactionDetails,
    pub customer_details: CustomerDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transfer: Option<BankTransferDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echannel: Option<EchannelDetails>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetails {
    pub order_id: String,
    pub gross_amount: BigDecimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerDetails {
    pub first_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankTransferDetails {
    pub bank: Bank,
}

#[derive(Debug, Clone, Serialize)]
pub struct EchannelDetails {
    pub bill_info1: String,
    pub bill_info2: String,
}

/// Charge response. Typed fields cover what the charge flow reads; the
/// flattened remainder keeps the payload intact so it can be stored
/// verbatim as `payment_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResponse {
    pub status_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub va_numbers: Option<Vec<VaNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permata_va_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biller_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaNumber {
    pub bank: String,
    pub va_number: String,
}

impl ChargeResponse {
    /// Resolves the customer-facing payment reference for a method.
    /// Each channel reports it under a different field, so the response
    /// is treated as a union keyed by the payment method.
    pub fn payment_reference(&self, method: PaymentMethod) -> Option<&str> {
        match method {
            PaymentMethod::BankTransfer => self
                .va_numbers
                .as_ref()
                .and_then(|numbers| numbers.first())
                .map(|entry| entry.va_number.as_str()),
            PaymentMethod::Permata => self.permata_va_number.as_deref(),
            PaymentMethod::Echannel => self.bill_key.as_deref(),
        }
    }

    /// Full payload as JSON, for verbatim persistence.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
