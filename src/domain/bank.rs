//! Supported banks and their gateway payment methods.

use serde::{Deserialize, Serialize};

/// Banks the top-up flow accepts. Anything else is rejected before a
/// transaction row is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Bca,
    Bri,
    Bni,
    Cimb,
    Permata,
    Mandiri,
}

impl Bank {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bca" => Some(Bank::Bca),
            "bri" => Some(Bank::Bri),
            "bni" => Some(Bank::Bni),
            "cimb" => Some(Bank::Cimb),
            "permata" => Some(Bank::Permata),
            "mandiri" => Some(Bank::Mandiri),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Bank::Bca => "bca",
            Bank::Bri => "bri",
            Bank::Bni => "bni",
            Bank::Cimb => "cimb",
            Bank::Permata => "permata",
            Bank::Mandiri => "mandiri",
        }
    }

    /// Fixed bank -> payment method table. Exhaustive on purpose: a new
    /// bank variant fails to compile until it is mapped here.
    pub fn payment_method(self) -> PaymentMethod {
        match self {
            Bank::Bca | Bank::Bri | Bank::Bni | Bank::Cimb => PaymentMethod::BankTransfer,
            Bank::Permata => PaymentMethod::Permata,
            Bank::Mandiri => PaymentMethod::Echannel,
        }
    }
}

/// Gateway charge channel, serialized as the `payment_type` wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Permata,
    Echannel,
}

impl PaymentMethod {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "permata" => Some(PaymentMethod::Permata),
            "echannel" => Some(PaymentMethod::Echannel),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Permata => "permata",
            PaymentMethod::Echannel => "echannel",
        }
    }
}
