//! breachx
//!
//! An HTTP proxy that answers "has this email, phone number or username
//! shown up in a known data breach?" by asking the LeakCheck public API and
//! relaying a normalized result:
//!
//! - `POST /api/breaches/check` `{ "type": "email", "value": "a@b.c" }`
//!   → `{ "breached": bool, "details": object | null }`
//! - `GET /api/healthchecker`
//!
//! Nothing is stored between requests.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod response;
pub mod services;
pub mod state;
pub mod validation;

use axum::{Router, http::Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Browsers call the check endpoint cross-origin from the lookup form.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Build the full application router around an explicit state.
pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    api::create_routes().layer(middleware).with_state(state)
}

pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "breachx=info,tower_http=info".into());

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
