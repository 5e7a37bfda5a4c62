//! Rights Ledger Server Binary

use std::env;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rights_server::{create_router, AppState, LifecycleEngine, MemoryLedger};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("RIGHTS_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let port: u16 = env::var("RIGHTS_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("RIGHTS_PORT must be a valid port number");

    // Initialize the ledger backend
    // TODO: Swap in the distributed-ledger client when its endpoint is
    // configured; MemoryLedger is the single-instance default.
    let ledger: Arc<dyn rights_server::Ledger> = Arc::new(MemoryLedger::new());
    let engine = LifecycleEngine::new(ledger);

    let state = Arc::new(AppState { engine });
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "Rights ledger server listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
