//! Midtrans core-API gateway integration.

pub mod client;
pub mod signature;
pub mod types;

use async_trait::async_trait;

pub use client::{GatewayError, MidtransClient};
pub use types::{
    BankTransferDetails, ChargeRequest, ChargeResponse, CustomerDetails, EchannelDetails,
    TransactionDetails, VaNumber,
};

/// Charge transport boundary. The production implementation is
/// [`MidtransClient`]; tests substitute their own.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, GatewayError>;
}
