//! Port traits between the services and their collaborators.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Student, Transaction, TransactionStatus};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Gateway charge-response fields persisted onto a pending transaction.
#[derive(Debug, Clone)]
pub struct PaymentAttachment {
    pub payment_data: serde_json::Value,
    pub va_number: Option<String>,
    pub expiry_time: Option<String>,
}

/// Durable record of top-up attempts.
///
/// `apply_status` must be a single atomic write keyed by order id: it may
/// transition a pending row or rewrite the same value, but never regress
/// a terminal status. Returns whether a row actually changed.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, tx: &Transaction) -> StoreResult<()>;

    async fn attach_payment(
        &self,
        order_id: &str,
        attachment: &PaymentAttachment,
    ) -> StoreResult<()>;

    async fn mark_failed(&self, order_id: &str, message: &str) -> StoreResult<()>;

    async fn apply_status(&self, order_id: &str, status: TransactionStatus) -> StoreResult<bool>;

    /// Global lookup, used by gateway callbacks.
    async fn find_by_order_id(&self, order_id: &str) -> StoreResult<Option<Transaction>>;

    /// Scoped lookup for user-facing queries.
    async fn find_owned(&self, nouid: &str, order_id: &str) -> StoreResult<Option<Transaction>>;

    async fn list_for_account(
        &self,
        nouid: &str,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>>;
}

/// Read-only student identity lookup.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn find_by_nouid(&self, nouid: &str) -> StoreResult<Option<Student>>;
}
