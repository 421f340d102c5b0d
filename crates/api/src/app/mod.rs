//! HTTP API application wiring (Axum router + gateway wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (the gateway's fixed route table)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use userdesk_directory::UserDirectory;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// `directory` is the single collaborator client handle; it is shared
/// read-only by every request.
pub fn build_app(admin_key: String, directory: Arc<dyn UserDirectory>) -> Router {
    let auth_state = middleware::AdminKeyState {
        admin_key: admin_key.into(),
    };

    Router::new()
        .nest("/api", routes::router(auth_state, directory))
        .layer(CorsLayer::permissive())
}
