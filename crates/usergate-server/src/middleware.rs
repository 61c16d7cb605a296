//! Cross-cutting HTTP middleware.

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Short-circuits `OPTIONS` on any path with an empty `200 OK`.
///
/// Browsers probe with preflight requests before cross-origin fetches; the
/// gateway answers them uniformly without consulting the route table. Real
/// preflights (those carrying `Access-Control-Request-Method`) are already
/// answered by the CORS layer; this catches every other `OPTIONS` so none
/// fall through to the 404 fallback.
pub async fn preflight_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
