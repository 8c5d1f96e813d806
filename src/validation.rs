use bigdecimal::BigDecimal;
use std::fmt;

/// Minimum top-up, in currency units.
pub const MIN_TOPUP_AMOUNT: u32 = 10_000;

pub const PHONE_MAX_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_topup_amount(amount: &BigDecimal) -> ValidationResult {
    if amount < &BigDecimal::from(MIN_TOPUP_AMOUNT) {
        return Err(ValidationError::new(
            "amount",
            format!("must be at least {}", MIN_TOPUP_AMOUNT),
        ));
    }

    Ok(())
}

pub fn validate_phone(phone: &str) -> ValidationResult {
    validate_required("phone", phone)?;

    if phone.len() > PHONE_MAX_LEN {
        return Err(ValidationError::new(
            "phone",
            format!("must be at most {} characters", PHONE_MAX_LEN),
        ));
    }

    if !phone.chars().all(|ch| ch.is_ascii_digit() || ch == '+') {
        return Err(ValidationError::new(
            "phone",
            "must contain only digits and an optional leading '+'",
        ));
    }

    Ok(())
}
