//! HTTP and WebSocket surface (health checks, debug endpoints, and the
//! real-time `/websocket` channel).

pub mod routes;
pub mod state;
pub mod websocket;

pub use state::AppState;
