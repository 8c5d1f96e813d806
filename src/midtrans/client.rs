use async_trait::async_trait;
use failsafe::futures::CircuitBreaker as FuturesCircuitBreaker;
use failsafe::{backoff, failure_policy, Config, Error as FailsafeError, StateMachine};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use super::types::{ChargeRequest, ChargeResponse};
use super::PaymentGateway;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("charge rejected by gateway: {status_code} {message}")]
    Rejected { status_code: String, message: String },
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
    #[error("gateway circuit breaker open")]
    CircuitOpen,
}

/// HTTP client for the Midtrans core API charge endpoint.
#[derive(Clone)]
pub struct MidtransClient {
    client: Client,
    base_url: String,
    server_key: String,
    circuit_breaker: StateMachine<failure_policy::ConsecutiveFailures<backoff::EqualJittered>, ()>,
}

impl MidtransClient {
    pub fn new(base_url: String, server_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let backoff = backoff::equal_jittered(Duration::from_secs(60), Duration::from_secs(120));
        let policy = failure_policy::consecutive_failures(3, backoff);
        let circuit_breaker = Config::new().failure_policy(policy).build();

        MidtransClient {
            client,
            base_url,
            server_key,
            circuit_breaker,
        }
    }

    pub fn circuit_state(&self) -> &'static str {
        if self.circuit_breaker.is_call_permitted() {
            "closed"
        } else {
            "open"
        }
    }

    async fn send_charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, GatewayError> {
        let url = format!("{}/v2/charge", self.base_url.trim_end_matches('/'));
        let client = self.client.clone();
        let server_key = self.server_key.clone();
        let request = request.clone();

        let result = self
            .circuit_breaker
            .call(async move {
                let response = client
                    .post(&url)
                    .basic_auth(&server_key, Some(""))
                    .json(&request)
                    .send()
                    .await?;

                // The gateway reports most charge errors inside a 200 body,
                // so the embedded status_code is authoritative.
                let charge = response.json::<ChargeResponse>().await?;

                let code: u16 = charge.status_code.parse().map_err(|_| {
                    GatewayError::InvalidResponse(format!(
                        "non-numeric status_code {:?}",
                        charge.status_code
                    ))
                })?;

                if code >= 300 {
                    return Err(GatewayError::Rejected {
                        status_code: charge.status_code.clone(),
                        message: charge
                            .status_message
                            .clone()
                            .unwrap_or_else(|| "no status message".to_string()),
                    });
                }

                Ok(charge)
            })
            .await;

        match result {
            Ok(charge) => Ok(charge),
            Err(FailsafeError::Rejected) => Err(GatewayError::CircuitOpen),
            Err(FailsafeError::Inner(e)) => Err(e),
        }
    }
}

#[async_trait]
impl PaymentGateway for MidtransClient {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, GatewayError> {
        self.send_charge(request).await
    }
}
