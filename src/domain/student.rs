//! Student identity record, resolved from the external account id.

use serde::{Deserialize, Serialize};

/// Read-only student record behind a `nouid`. Names are optional; the
/// charge flow falls back to a generic customer label when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub nouid: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
}

impl Student {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Customer")
    }

    pub fn display_full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Customer")
    }
}
