mod common;

use std::sync::Arc;

use common::{pending_transaction, InMemoryStore};
use topup_core::domain::{FraudStatus, NotificationStatus, TransactionStatus};
use topup_core::error::AppError;
use topup_core::midtrans::signature::callback_signature;
use topup_core::services::{CallbackPayload, CallbackReconciler};

const SERVER_KEY: &str = "SB-Mid-server-test";

fn reconciler(store: Arc<InMemoryStore>) -> CallbackReconciler {
    CallbackReconciler::new(store, SERVER_KEY.to_string())
}

fn signed_payload(
    order_id: &str,
    transaction_status: NotificationStatus,
    fraud_status: Option<FraudStatus>,
) -> CallbackPayload {
    let status_code = "200";
    let gross_amount = "50000.00";
    CallbackPayload {
        order_id: order_id.to_string(),
        status_code: status_code.to_string(),
        gross_amount: gross_amount.to_string(),
        signature_key: callback_signature(order_id, status_code, gross_amount, SERVER_KEY),
        transaction_status,
        fraud_status,
    }
}

#[tokio::test]
async fn settlement_marks_transaction_success() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Settlement, None))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Success
    );
}

#[tokio::test]
async fn replayed_settlement_is_idempotent() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());
    let payload = signed_payload("topup-o1", NotificationStatus::Settlement, None);

    reconciler.apply(&payload).await.unwrap();
    reconciler.apply(&payload).await.unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Success
    );
}

#[tokio::test]
async fn capture_with_accepted_fraud_check_succeeds() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload(
            "topup-o1",
            NotificationStatus::Capture,
            Some(FraudStatus::Accept),
        ))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Success
    );
}

#[tokio::test]
async fn capture_with_challenged_fraud_check_changes_nothing() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload(
            "topup-o1",
            NotificationStatus::Capture,
            Some(FraudStatus::Challenge),
        ))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Pending
    );
}

#[tokio::test]
async fn expire_marks_transaction_failed() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Expire, None))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Failed
    );
}

#[tokio::test]
async fn pending_notification_keeps_transaction_pending() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Pending, None))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Pending
    );
}

#[tokio::test]
async fn late_pending_notification_cannot_regress_success() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Settlement, None))
        .await
        .unwrap();
    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Pending, None))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Success
    );
}

#[tokio::test]
async fn tampered_signature_is_rejected_before_any_mutation() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    let mut payload = signed_payload("topup-o1", NotificationStatus::Settlement, None);
    let mut corrupted: Vec<char> = payload.signature_key.chars().collect();
    corrupted[0] = if corrupted[0] == 'a' { 'b' } else { 'a' };
    payload.signature_key = corrupted.into_iter().collect();

    let err = reconciler.apply(&payload).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidSignature));
    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Pending
    );
}

#[tokio::test]
async fn unknown_order_id_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let reconciler = reconciler(store);

    let err = reconciler
        .apply(&signed_payload("topup-ghost", NotificationStatus::Settlement, None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn unrecognized_status_is_acknowledged_without_change() {
    let store = Arc::new(InMemoryStore::new());
    store.seed(pending_transaction("S1", "topup-o1", "50000"));
    let reconciler = reconciler(store.clone());

    reconciler
        .apply(&signed_payload("topup-o1", NotificationStatus::Unknown, None))
        .await
        .unwrap();

    assert_eq!(
        store.row("topup-o1").unwrap().status,
        TransactionStatus::Pending
    );
}
