//! Transaction domain entity.
//! One record per top-up attempt, correlated with the gateway by order id.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bank::{Bank, PaymentMethod};

/// Lifecycle state of a top-up. Starts at `Pending`; `Success` and
/// `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(TransactionStatus::Pending),
            "success" => Some(TransactionStatus::Success),
            "failed" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TransactionStatus::Success | TransactionStatus::Failed)
    }
}

/// Domain entity representing a top-up attempt.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: Uuid,
    pub order_id: String,
    pub nouid: String,
    pub amount: BigDecimal,
    pub bank: Bank,
    pub payment_method: PaymentMethod,
    pub phone: String,
    pub status: TransactionStatus,
    pub payment_data: Option<serde_json::Value>,
    pub va_number: Option<String>,
    pub expiry_time: Option<String>,
    pub failure_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a pending transaction for a fresh charge attempt. The
    /// payment method is always derived from the bank, never supplied.
    pub fn new(
        nouid: String,
        order_id: String,
        amount: BigDecimal,
        bank: Bank,
        phone: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_id,
            nouid,
            amount,
            bank,
            payment_method: bank.payment_method(),
            phone,
            status: TransactionStatus::Pending,
            payment_data: None,
            va_number: None,
            expiry_time: None,
            failure_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
