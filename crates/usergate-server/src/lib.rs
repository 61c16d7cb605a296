//! UserGate server library logic.
//!
//! A read-only HTTP gateway over the `users` table: a bounded listing
//! endpoint, a status-equality filter endpoint, and an embedded test page.
//! Database failures degrade into well-formed 200 envelopes (see
//! [`api_users`]); only bad input and unknown routes produce error statuses.

pub mod api_users;
pub mod config;
pub mod envelope;
pub mod error;
pub mod middleware;

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use usergate_db::DbPool;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Built once at startup; handlers clone the
    /// handle per request.
    pub pool: DbPool,
}

/// Handler for `GET /` — the embedded test page, served verbatim.
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Builds the application router with all routes and cross-cutting layers.
///
/// The route table is fixed: the index page, the two data endpoints, and a
/// fallback that answers anything else — wrong path or wrong method — with
/// the 404 endpoint listing. Every response carries a permissive
/// cross-origin allow and a no-cache directive; `OPTIONS` on any path is
/// answered with an empty 200 before route dispatch.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/data", get(api_users::list_users_handler))
        .route("/api/data/filter", get(api_users::filter_users_handler))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(axum::middleware::from_fn(middleware::preflight_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(Extension(Arc::new(state)))
}
