//! Query construction for the read-only user endpoints.
//!
//! Every query the gateway can run is built here as a [`QueryDescriptor`]:
//! SQL text plus an ordered list of named bind parameters. Externally
//! supplied values (the `status` filter) go into the parameter list and are
//! bound at execution time; they never appear in the SQL text. This is a
//! hard invariant, not a style choice.

use thiserror::Error;

/// Row cap on the unfiltered listing. Bounds response size and keeps a full
/// table scan off the executor.
pub const MAX_LIST_ROWS: i64 = 100;

/// A fully specified read query: SQL text plus named bind parameters.
///
/// This is the only shape handed to the executor. Parameter names include
/// the leading `:` so they can be bound directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// The SQL text. Contains placeholders, never caller-supplied values.
    pub sql: String,
    /// Ordered (name, value) pairs bound at execution time.
    pub params: Vec<(&'static str, String)>,
}

/// Errors from validating filter input while building a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The status value was absent or empty.
    #[error("status value must be non-empty")]
    EmptyStatus,
}

/// Builds the fixed listing query.
///
/// Parameterless and capped at [`MAX_LIST_ROWS`] rows. The cap is part of
/// the endpoint contract, not a pagination mechanism.
pub fn list_query() -> QueryDescriptor {
    QueryDescriptor {
        sql: format!("SELECT * FROM users LIMIT {MAX_LIST_ROWS}"),
        params: Vec::new(),
    }
}

/// Builds the status-equality filter query.
///
/// `status` must be non-empty; it is carried as the `:status` bound
/// parameter. Matching is exact equality — no other operators exist.
///
/// # Errors
///
/// Returns [`FilterError::EmptyStatus`] when `status` is empty.
pub fn filter_query(status: &str) -> Result<QueryDescriptor, FilterError> {
    if status.is_empty() {
        return Err(FilterError::EmptyStatus);
    }

    Ok(QueryDescriptor {
        sql: "SELECT * FROM users WHERE status = :status".to_string(),
        params: vec![(":status", status.to_string())],
    })
}
