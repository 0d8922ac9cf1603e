//! RCC Server Emulator — a private server for Riding Club Championships.
//!
//! Speaks the game's TCP card/login protocol, serves a Flash cross-domain
//! policy file, and exposes an HTTP/WebSocket surface for health checks,
//! debugging, and real-time chat relay.

mod common;
mod config;
mod http;
mod identity;
mod protocol;
mod server;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};

use config::env::get_config_path;
use config::load_and_validate;
use identity::IdentityStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("RCC Server Emulator v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please ensure {} exists and is properly formatted.", config_path);
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  Host: {}", config.host);
    info!("  TCP port: {}", config.tcp_port);
    info!("  Policy port: {}", config.policy_port);
    info!("  HTTP port: {}", config.http_port);
    info!("  Database: {}", config.db_path);

    let identity_store = IdentityStore::open(&config.db_path)?;
    let tcp_clients = Arc::new(AtomicUsize::new(0));

    let tcp_task = {
        let host = config.host.clone();
        let port = config.tcp_port;
        let identity_store = identity_store.clone();
        let tcp_clients = tcp_clients.clone();
        tokio::spawn(async move {
            if let Err(e) = server::listener::run(&host, port, identity_store, tcp_clients).await {
                error!("game TCP listener failed: {}", e);
            }
        })
    };

    let policy_task = {
        let host = config.host.clone();
        let port = config.policy_port;
        tokio::spawn(async move {
            if let Err(e) = server::policy::run(&host, port).await {
                error!("policy listener failed: {}", e);
            }
        })
    };

    let http_task = {
        let host = config.host.clone();
        let port = config.http_port;
        let state = http::AppState::new(identity_store, tcp_clients);
        tokio::spawn(async move {
            let app = http::routes::router(state);
            let addr = format!("{host}:{port}");
            match tokio::net::TcpListener::bind(&addr).await {
                Ok(listener) => {
                    info!("HTTP server listening on {}", addr);
                    if let Err(e) = axum::serve(listener, app).await {
                        error!("HTTP server failed: {}", e);
                    }
                }
                Err(e) => error!("failed to bind HTTP listener on {}: {}", addr, e),
            }
        })
    };

    tokio::select! {
        biased;
        _ = shutdown_signal() => {
            info!("Shutdown signal received, exiting...");
        }
        _ = tcp_task => error!("game TCP listener task ended unexpectedly"),
        _ = policy_task => error!("policy listener task ended unexpectedly"),
        _ = http_task => error!("HTTP server task ended unexpectedly"),
    }

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
