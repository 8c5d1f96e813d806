//! Postgres implementation of the transaction store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Bank, PaymentMethod, Transaction, TransactionStatus};
use crate::ports::{PaymentAttachment, StoreError, StoreResult, TransactionStore};

#[derive(Clone)]
pub struct PostgresTransactionStore {
    pool: PgPool,
}

impl PostgresTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PostgresTransactionStore {
    async fn insert(&self, tx: &Transaction) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, order_id, nouid, amount, bank, payment_method, phone, status,
                payment_data, va_number, expiry_time, failure_message, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(tx.id)
        .bind(&tx.order_id)
        .bind(&tx.nouid)
        .bind(&tx.amount)
        .bind(tx.bank.code())
        .bind(tx.payment_method.code())
        .bind(&tx.phone)
        .bind(tx.status.code())
        .bind(&tx.payment_data)
        .bind(&tx.va_number)
        .bind(&tx.expiry_time)
        .bind(&tx.failure_message)
        .bind(tx.created_at)
        .bind(tx.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn attach_payment(
        &self,
        order_id: &str,
        attachment: &PaymentAttachment,
    ) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE transactions
            SET payment_data = $2, va_number = $3, expiry_time = $4, updated_at = NOW()
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .bind(&attachment.payment_data)
        .bind(&attachment.va_number)
        .bind(&attachment.expiry_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn mark_failed(&self, order_id: &str, message: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE transactions
            SET status = 'failed', failure_message = $2, updated_at = NOW()
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .bind(message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn apply_status(&self, order_id: &str, status: TransactionStatus) -> StoreResult<bool> {
        // Single guarded statement: a pending row can move anywhere,
        // a terminal row only accepts a rewrite of the same value. Racing
        // callbacks therefore cannot regress success/failed, and replays
        // are no-ops.
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET status = $2, updated_at = NOW()
            WHERE order_id = $1 AND (status = 'pending' OR status = $2)
            "#,
        )
        .bind(order_id)
        .bind(status.code())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_order_id(&self, order_id: &str) -> StoreResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM transactions WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TransactionRow::into_domain).transpose()
    }

    async fn find_owned(&self, nouid: &str, order_id: &str) -> StoreResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM transactions WHERE order_id = $1 AND nouid = $2",
        )
        .bind(order_id)
        .bind(nouid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TransactionRow::into_domain).transpose()
    }

    async fn list_for_account(
        &self,
        nouid: &str,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT * FROM transactions
            WHERE nouid = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(nouid)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }
}

/// Internal row type for SQLx. Not exposed outside the adapter.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    order_id: String,
    nouid: String,
    amount: bigdecimal::BigDecimal,
    bank: String,
    payment_method: String,
    phone: String,
    status: String,
    payment_data: Option<serde_json::Value>,
    va_number: Option<String>,
    expiry_time: Option<String>,
    failure_message: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TransactionRow {
    fn into_domain(self) -> StoreResult<Transaction> {
        let bank = Bank::from_code(&self.bank)
            .ok_or_else(|| StoreError::Database(format!("unknown bank code in row: {}", self.bank)))?;
        let payment_method = PaymentMethod::from_code(&self.payment_method).ok_or_else(|| {
            StoreError::Database(format!(
                "unknown payment method in row: {}",
                self.payment_method
            ))
        })?;
        let status = TransactionStatus::from_code(&self.status)
            .ok_or_else(|| StoreError::Database(format!("unknown status in row: {}", self.status)))?;

        Ok(Transaction {
            id: self.id,
            order_id: self.order_id,
            nouid: self.nouid,
            amount: self.amount,
            bank,
            payment_method,
            phone: self.phone,
            status,
            payment_data: self.payment_data,
            va_number: self.va_number,
            expiry_time: self.expiry_time,
            failure_message: self.failure_message,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
