//! Read-only user data handlers.
//!
//! Provides:
//! - `GET /api/data` — bounded listing of the users table
//! - `GET /api/data/filter?status=X` — exact-match filter on the status column
//!
//! Both routes apply the degraded-mode policy: executor failures are logged
//! and collapsed into the unavailable envelope rather than surfaced as HTTP
//! errors. Input validation happens before any database interaction.

use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;
use usergate_db::{fetch_rows, filter_query, list_query, QueryDescriptor, Record, StoreError};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::AppState;

/// Query parameters for `GET /api/data/filter`.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    /// Status value the rows must match exactly.
    pub status: Option<String>,
}

/// Handler for `GET /api/data`.
///
/// Returns up to the fixed row cap, or the unavailable envelope when the
/// database cannot be reached.
pub async fn list_users_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Envelope>, ApiError> {
    let envelope = match run_degraded(&state, list_query()).await? {
        Some(rows) => Envelope::success(rows, None),
        None => Envelope::unavailable(None),
    };
    Ok(Json(envelope))
}

/// Handler for `GET /api/data/filter`.
///
/// Requires a non-empty `status` parameter; rejects the request with a 400
/// before touching the database otherwise. The supplied value is echoed back
/// verbatim in the `filter` field.
pub async fn filter_users_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Envelope>, ApiError> {
    let status = params.status.unwrap_or_default();
    let query = filter_query(&status).map_err(|_| ApiError::MissingStatus)?;

    let envelope = match run_degraded(&state, query).await? {
        Some(rows) => Envelope::success(rows, Some(status)),
        None => Envelope::unavailable(Some(status)),
    };
    Ok(Json(envelope))
}

/// Executes a query on the blocking pool and applies the degraded-mode
/// policy: connection and query failures are logged at `warn` and collapse
/// into `None`, which callers shape as the unavailable envelope. The only
/// hard failure is the blocking task itself dying.
async fn run_degraded(
    state: &AppState,
    query: QueryDescriptor,
) -> Result<Option<Vec<Record>>, ApiError> {
    let pool = state.pool.clone();

    let outcome = tokio::task::spawn_blocking(move || fetch_rows(&pool, &query))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "query task failed to complete");
            ApiError::Internal
        })?;

    match outcome {
        Ok(rows) => Ok(Some(rows)),
        Err(e @ StoreError::Acquire(_)) => {
            tracing::warn!(error = %e, "database connection unavailable, serving degraded response");
            Ok(None)
        }
        Err(e @ StoreError::Query(_)) => {
            tracing::warn!(error = %e, "query execution failed, serving degraded response");
            Ok(None)
        }
    }
}
