//! Gateway notification statuses and the status resolution table.

use serde::Deserialize;

use super::transaction::TransactionStatus;

/// `transaction_status` values the gateway reports. Unrecognized values
/// fold into `Unknown` and resolve to a no-op rather than failing the
/// whole notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NotificationStatus {
    Capture,
    Settlement,
    Pending,
    Deny,
    Expire,
    Cancel,
    Unknown,
}

impl NotificationStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "capture" => NotificationStatus::Capture,
            "settlement" => NotificationStatus::Settlement,
            "pending" => NotificationStatus::Pending,
            "deny" => NotificationStatus::Deny,
            "expire" => NotificationStatus::Expire,
            "cancel" => NotificationStatus::Cancel,
            _ => NotificationStatus::Unknown,
        }
    }
}

impl From<String> for NotificationStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// Fraud screening outcome attached to card-style captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FraudStatus {
    Accept,
    Challenge,
    Unknown,
}

impl FraudStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "accept" => FraudStatus::Accept,
            "challenge" => FraudStatus::Challenge,
            _ => FraudStatus::Unknown,
        }
    }
}

impl From<String> for FraudStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// Maps a notification onto the transaction status it should produce.
/// `None` means the notification is acknowledged but changes nothing.
///
/// A capture with any fraud status other than `accept` is left alone,
/// matching the gateway's documented fraud-handling contract.
pub fn resolve_status(
    transaction_status: NotificationStatus,
    fraud_status: Option<FraudStatus>,
) -> Option<TransactionStatus> {
    match transaction_status {
        NotificationStatus::Capture => match fraud_status {
            Some(FraudStatus::Accept) => Some(TransactionStatus::Success),
            _ => None,
        },
        NotificationStatus::Settlement => Some(TransactionStatus::Success),
        NotificationStatus::Pending => Some(TransactionStatus::Pending),
        NotificationStatus::Deny | NotificationStatus::Expire | NotificationStatus::Cancel => {
            Some(TransactionStatus::Failed)
        }
        NotificationStatus::Unknown => None,
    }
}
