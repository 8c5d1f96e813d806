use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::error::AppError;
use crate::services::CallbackPayload;
use crate::AppState;

/// POST /payment/callback — gateway notification endpoint. Acknowledges
/// with 200 whether or not the status actually changed; signature or
/// lookup failures surface as 403/404.
pub async fn callback(
    State(state): State<AppState>,
    Json(payload): Json<CallbackPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.callbacks.apply(&payload).await?;

    Ok(Json(json!({ "message": "Callback processed" })))
}
