//! HTTP surface: health/status endpoints and the debug inspection API.

use std::sync::atomic::Ordering;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::http::state::AppState;
use crate::http::websocket::websocket_handler;
use crate::protocol::crc32;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/mochiweb/", get(mochiweb_root))
        .route("/debug/users", get(debug_users))
        .route("/debug/tcp_clients", get(debug_tcp_clients))
        .route("/debug/create_test_user", post(debug_create_test_user))
        .route("/debug/card_hash/:card_id", get(debug_card_hash))
        .route("/websocket", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "RCC Server Emulator is running", "status": "online" }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let user_count = state.identity_store.user_count().await.unwrap_or(0);
    Json(json!({
        "status": "healthy",
        "clients_connected": state.tcp_clients.load(Ordering::Relaxed),
        "database_stats": { "total_users": user_count },
    }))
}

async fn mochiweb_root() -> impl IntoResponse {
    Json(json!({ "service": "mochiweb", "status": "online" }))
}

async fn debug_users(State(state): State<AppState>) -> impl IntoResponse {
    match state.identity_store.user_count().await {
        Ok(count) => Json(json!({ "success": true, "count": count })),
        Err(e) => {
            error!(error = %e, "failed to list users");
            Json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

async fn debug_tcp_clients(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.tcp_clients.load(Ordering::Relaxed);
    Json(json!({ "success": true, "tcp_clients": [], "count": count }))
}

async fn debug_create_test_user(State(state): State<AppState>) -> impl IntoResponse {
    match state
        .identity_store
        .get_or_create("Debug", "test_user_001".to_string(), "debug_token_123".to_string())
        .await
    {
        Ok(player) => Json(json!({
            "success": true,
            "message": "Test user created",
            "player_id": player.player_id,
        })),
        Err(e) => {
            error!(error = %e, "failed to create test user");
            Json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

async fn debug_card_hash(Path(card_id): Path<String>) -> impl IntoResponse {
    let hash_value = crc32::hash(&card_id);
    Json(json!({
        "success": true,
        "card_id": card_id,
        "hash": hash_value,
        "hash_hex": format!("0x{:08X}", hash_value),
        "verification": {
            "logic_main_expected": 3_317_978_623u32,
            "logic_main_actual": crc32::hash("logic_main"),
            "matches": crc32::hash("logic_main") == 3_317_978_623,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_hash_verification_block_self_checks() {
        assert_eq!(crc32::hash("logic_main"), 3_317_978_623);
    }
}
