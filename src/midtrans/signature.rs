//! Callback signature verification.
//!
//! The gateway signs notifications with
//! `sha512(order_id + status_code + gross_amount + server_key)`,
//! hex-encoded. The inputs are the raw string fields from the payload,
//! not re-rendered values.

use sha2::{Digest, Sha512};

pub fn callback_signature(
    order_id: &str,
    status_code: &str,
    gross_amount: &str,
    server_key: &str,
) -> String {
    let mut hasher = Sha512::new();
    hasher.update(order_id.as_bytes());
    hasher.update(status_code.as_bytes());
    hasher.update(gross_amount.as_bytes());
    hasher.update(server_key.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_signature(
    order_id: &str,
    status_code: &str,
    gross_amount: &str,
    server_key: &str,
    supplied: &str,
) -> bool {
    callback_signature(order_id, status_code, gross_amount, server_key) == supplied
}
