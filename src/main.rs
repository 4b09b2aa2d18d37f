use std::sync::Arc;
use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{error, info};
use yard_control::api::build_router;
use yard_control::init;

/// The main entry point of the yard-control service
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

/// Runs the service until Ctrl-C
///
/// 1. Loads settings, starts logging, seeds the directory and connects the optional audit database
/// 2. Serves the HTTP and push channel routes
/// 3. On Ctrl-C stops accepting connections, drains in-flight requests and flushes the audit mirror
async fn run() -> Result<()> {
    let context = init::initialize().await?;
    let app = build_router(context.app_state());

    let bind_address = context.settings.server.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("yard-control listening on {}", bind_address);

    let lifecycle = Arc::clone(&context.lifecycle);
    tokio::spawn(async move {
        match ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal. Shutting down gracefully...");
                lifecycle.trigger_shutdown();
            }
            Err(e) => error!("Unable to listen for the shutdown signal: {}", e),
        }
    });

    let lifecycle = Arc::clone(&context.lifecycle);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { lifecycle.wait_for_shutdown().await })
        .await?;

    context.lifecycle.cleanup().await?;
    Ok(())
}
