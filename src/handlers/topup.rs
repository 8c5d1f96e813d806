use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Json,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::services::TopupInput;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TopupRequest {
    pub bank: String,
    pub amount: BigDecimal,
    pub phone: String,
}

/// POST /topup/:nouid — runs a charge and redirects to the payment
/// instruction resource for the new order.
pub async fn charge(
    State(state): State<AppState>,
    Path(nouid): Path<String>,
    Json(body): Json<TopupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state
        .topup
        .charge(
            &nouid,
            TopupInput {
                bank: body.bank,
                amount: body.amount,
                phone: body.phone,
            },
        )
        .await?;

    Ok(Redirect::to(&format!(
        "/topup/{}/instruction/{}",
        nouid, outcome.order_id
    )))
}

/// GET /topup/:nouid/instruction/:order_id — the data behind the payment
/// instruction view: amount, bank, VA number, expiry.
pub async fn payment_instruction(
    State(state): State<AppState>,
    Path((nouid, order_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state
        .store
        .find_owned(&nouid, &order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", order_id)))?;

    Ok(Json(tx))
}
