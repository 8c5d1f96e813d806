pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod midtrans;
pub mod ports;
pub mod services;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::ports::TransactionStore;
use crate::services::{CallbackReconciler, TopupService};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub store: Arc<dyn TransactionStore>,
    pub topup: Arc<TopupService>,
    pub callbacks: Arc<CallbackReconciler>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/topup/:nouid", post(handlers::topup::charge))
        .route(
            "/topup/:nouid/instruction/:order_id",
            get(handlers::topup::payment_instruction),
        )
        .route(
            "/topup/:nouid/transactions",
            get(handlers::transactions::history),
        )
        .route(
            "/topup/:nouid/transactions/:order_id",
            get(handlers::transactions::detail),
        )
        .route(
            "/topup/:nouid/transactions/:order_id/status",
            get(handlers::transactions::check_status),
        )
        .route("/payment/callback", post(handlers::callback::callback))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
