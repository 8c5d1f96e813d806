//! Applies asynchronous gateway notifications to stored transactions.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{resolve_status, FraudStatus, NotificationStatus};
use crate::error::AppError;
use crate::midtrans::signature;
use crate::ports::TransactionStore;

/// Gateway notification body. `order_id`, `status_code` and
/// `gross_amount` stay raw strings because the signature is computed
/// over them exactly as sent. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackPayload {
    pub order_id: String,
    pub status_code: String,
    pub gross_amount: String,
    pub signature_key: String,
    pub transaction_status: NotificationStatus,
    #[serde(default)]
    pub fraud_status: Option<FraudStatus>,
}

pub struct CallbackReconciler {
    store: Arc<dyn TransactionStore>,
    server_key: String,
}

impl CallbackReconciler {
    pub fn new(store: Arc<dyn TransactionStore>, server_key: String) -> Self {
        Self { store, server_key }
    }

    /// Verifies and applies one notification. Safe to call repeatedly
    /// with the same payload: re-applying a mapped status is a no-op.
    pub async fn apply(&self, payload: &CallbackPayload) -> Result<(), AppError> {
        // Authentication comes first, before any lookup or mutation.
        if !signature::verify_signature(
            &payload.order_id,
            &payload.status_code,
            &payload.gross_amount,
            &self.server_key,
            &payload.signature_key,
        ) {
            tracing::warn!("callback rejected: order_id={} invalid signature", payload.order_id);
            return Err(AppError::InvalidSignature);
        }

        let tx = self
            .store
            .find_by_order_id(&payload.order_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Transaction {} not found", payload.order_id))
            })?;

        match resolve_status(payload.transaction_status, payload.fraud_status) {
            Some(next) => {
                let changed = self.store.apply_status(&payload.order_id, next).await?;
                tracing::info!(
                    "callback applied: order_id={} {} -> {} (changed={})",
                    payload.order_id,
                    tx.status.code(),
                    next.code(),
                    changed
                );
            }
            None => {
                tracing::info!(
                    "callback ignored: order_id={} status left at {}",
                    payload.order_id,
                    tx.status.code()
                );
            }
        }

        Ok(())
    }
}
