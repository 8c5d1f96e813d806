use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::TransactionStatus;
use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: TransactionStatus,
    pub updated_at: DateTime<Utc>,
}

/// GET /topup/:nouid/transactions — account history, newest first.
pub async fn history(
    State(state): State<AppState>,
    Path(nouid): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let limit = pagination.limit.unwrap_or(10);
    let offset = pagination.offset.unwrap_or(0);

    let transactions = state.store.list_for_account(&nouid, limit, offset).await?;

    Ok(Json(transactions))
}

/// GET /topup/:nouid/transactions/:order_id — full owned record.
pub async fn detail(
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

/// GET /topup/:nouid/transactions/:order_id/status — polling fallback
/// for clients waiting on a callback.
pub async fn check_status(
    State(state): State<AppState>,
    Path((nouid, order_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state
        .store
        .find_owned(&nouid, &order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", order_id)))?;

    Ok(Json(StatusResponse {
        status: tx.status,
        updated_at: tx.updated_at,
    }))
}
