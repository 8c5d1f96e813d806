use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use sqlx::migrate::Migrator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topup_core::adapters::{PostgresStudentDirectory, PostgresTransactionStore};
use topup_core::midtrans::{MidtransClient, PaymentGateway};
use topup_core::ports::{StudentDirectory, TransactionStore};
use topup_core::services::{CallbackReconciler, TopupService};
use topup_core::{config, create_app, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database pool
    let pool = db::create_pool(&config).await?;

    // Run migrations
    let migrator = Migrator::new(Path::new("./migrations")).await?;
    migrator.run(&pool).await?;
    tracing::info!("Database migrations completed");

    let gateway: Arc<dyn PaymentGateway> = Arc::new(MidtransClient::new(
        config.midtrans_base_url.clone(),
        config.midtrans_server_key.clone(),
    ));
    tracing::info!(
        "Midtrans client initialized with URL: {}",
        config.midtrans_base_url
    );

    let store: Arc<dyn TransactionStore> = Arc::new(PostgresTransactionStore::new(pool.clone()));
    let students: Arc<dyn StudentDirectory> =
        Arc::new(PostgresStudentDirectory::new(pool.clone()));

    let state = AppState {
        db: pool,
        store: store.clone(),
        topup: Arc::new(TopupService::new(store.clone(), students, gateway)),
        callbacks: Arc::new(CallbackReconciler::new(
            store,
            config.midtrans_server_key.clone(),
        )),
    };

    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
