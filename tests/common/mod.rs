//! Shared in-memory test doubles for the service and API tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use serde_json::json;
use std::str::FromStr;

use topup_core::domain::{Bank, Student, Transaction, TransactionStatus};
use topup_core::midtrans::{ChargeRequest, ChargeResponse, GatewayError, PaymentGateway};
use topup_core::ports::{
    PaymentAttachment, StoreResult, StudentDirectory, TransactionStore,
};

/// Transaction store backed by a map keyed on order id. Mirrors the SQL
/// adapter's guarded status update so state-machine tests exercise the
/// same semantics.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<HashMap<String, Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, order_id: &str) -> Option<Transaction> {
        self.rows.lock().unwrap().get(order_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn seed(&self, tx: Transaction) {
        self.rows.lock().unwrap().insert(tx.order_id.clone(), tx);
    }
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn insert(&self, tx: &Transaction) -> StoreResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(tx.order_id.clone(), tx.clone());
        Ok(())
    }

    async fn attach_payment(
        &self,
        order_id: &str,
        attachment: &PaymentAttachment,
    ) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(tx) = rows.get_mut(order_id) {
            tx.payment_data = Some(attachment.payment_data.clone());
            tx.va_number = attachment.va_number.clone();
            tx.expiry_time = attachment.expiry_time.clone();
            tx.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn mark_failed(&self, order_id: &str, message: &str) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(tx) = rows.get_mut(order_id) {
            tx.status = TransactionStatus::Failed;
            tx.failure_message = Some(message.to_string());
            tx.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn apply_status(&self, order_id: &str, status: TransactionStatus) -> StoreResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(order_id) {
            Some(tx) if tx.status == TransactionStatus::Pending || tx.status == status => {
                tx.status = status;
                tx.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_order_id(&self, order_id: &str) -> StoreResult<Option<Transaction>> {
        Ok(self.rows.lock().unwrap().get(order_id).cloned())
    }

    async fn find_owned(&self, nouid: &str, order_id: &str) -> StoreResult<Option<Transaction>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(order_id)
            .filter(|tx| tx.nouid == nouid)
            .cloned())
    }

    async fn list_for_account(
        &self,
        nouid: &str,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>> {
        let mut rows: Vec<Transaction> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|tx| tx.nouid == nouid)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// Fixed student lookup.
#[derive(Default)]
pub struct StaticDirectory {
    students: HashMap<String, Student>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.insert(student.nouid.clone(), student);
        self
    }
}

#[async_trait]
impl StudentDirectory for StaticDirectory {
    async fn find_by_nouid(&self, nouid: &str) -> StoreResult<Option<Student>> {
        Ok(self.students.get(nouid).cloned())
    }
}

/// Gateway double returning a canned outcome and recording the last
/// request it saw.
pub struct StubGateway {
    outcome: StubOutcome,
    pub last_request: Mutex<Option<ChargeRequest>>,
}

pub enum StubOutcome {
    Success(ChargeResponse),
    Reject,
}

impl StubGateway {
    pub fn succeeding_with(response: ChargeResponse) -> Self {
        Self {
            outcome: StubOutcome::Success(response),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: StubOutcome::Reject,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, GatewayError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            StubOutcome::Success(response) => Ok(response.clone()),
            StubOutcome::Reject => Err(GatewayError::Rejected {
                status_code: "500".to_string(),
                message: "Internal server error".to_string(),
            }),
        }
    }
}

pub fn charge_response(body: serde_json::Value) -> ChargeResponse {
    serde_json::from_value(body).expect("valid charge response fixture")
}

pub fn bank_transfer_response(va_number: &str) -> ChargeResponse {
    charge_response(json!({
        "status_code": "201",
        "status_message": "Success, Bank Transfer transaction is created",
        "va_numbers": [{"bank": "bca", "va_number": va_number}],
        "transaction_status": "pending",
        "expiry_time": "2025-06-13 10:00:00"
    }))
}

pub fn student(nouid: &str, name: Option<&str>, full_name: Option<&str>) -> Student {
    Student {
        nouid: nouid.to_string(),
        name: name.map(str::to_string),
        full_name: full_name.map(str::to_string),
    }
}

pub fn pending_transaction(nouid: &str, order_id: &str, amount: &str) -> Transaction {
    Transaction::new(
        nouid.to_string(),
        order_id.to_string(),
        BigDecimal::from_str(amount).expect("valid amount"),
        Bank::Bca,
        "08123456789".to_string(),
    )
}
