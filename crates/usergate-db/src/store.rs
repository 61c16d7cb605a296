//! Descriptor execution against the pooled database.
//!
//! [`fetch_rows`] is the single executor seam: it acquires a connection,
//! binds the descriptor's parameters, and materializes every row as an
//! opaque column-name → JSON-value mapping. One execution attempt per call;
//! retries are a caller policy and do not exist here.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rusqlite::types::ValueRef;
use rusqlite::ToSql;
use serde_json::Value;
use thiserror::Error;

use crate::pool::DbPool;
use crate::query::QueryDescriptor;

/// One database row, keyed by column name. Owned by the request/response
/// cycle that fetched it; never cached.
pub type Record = serde_json::Map<String, Value>;

/// Errors from executing a descriptor.
///
/// The two variants are kept apart so the caller can log connection
/// establishment failures distinctly from query failures; both read as
/// "database unavailable" at the policy layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not acquire a pooled connection.
    #[error("failed to acquire a pooled connection: {0}")]
    Acquire(#[from] r2d2::Error),

    /// The query itself failed to prepare or execute.
    #[error("query execution failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Executes a [`QueryDescriptor`] and returns all matching rows.
///
/// The statement is prepared per call, so concurrent executions cannot see
/// each other's parameter bindings.
///
/// # Errors
///
/// Returns [`StoreError::Acquire`] when no connection can be obtained and
/// [`StoreError::Query`] when preparation or execution fails.
pub fn fetch_rows(pool: &DbPool, query: &QueryDescriptor) -> Result<Vec<Record>, StoreError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(&query.sql)?;

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let params: Vec<(&str, &dyn ToSql)> = query
        .params
        .iter()
        .map(|(name, value)| (*name, value as &dyn ToSql))
        .collect();

    let mut rows = stmt.query(params.as_slice())?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        let mut record = Record::new();
        for (idx, column) in columns.iter().enumerate() {
            record.insert(column.clone(), value_to_json(row.get_ref(idx)?));
        }
        records.push(record);
    }

    Ok(records)
}

/// Converts a SQLite value into its JSON representation.
///
/// Text is taken lossily (invalid UTF-8 cannot fail the whole response) and
/// BLOBs are base64-encoded since JSON has no binary form.
fn value_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(BASE64.encode(b)),
    }
}
