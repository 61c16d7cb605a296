//! Database layer for the UserGate gateway.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! embedded SQL migrations, and the read-only query path over the `users`
//! table. The query path is split into two seams:
//!
//! - [`query`] builds [`QueryDescriptor`]s — SQL text plus bound parameters.
//!   Externally supplied values are never concatenated into the text.
//! - [`store`] executes a descriptor against a pooled connection and
//!   materializes rows as opaque column-name → JSON-value mappings, so the
//!   gateway never assumes a schema beyond the `status` column it filters on.

mod migrations;
mod pool;
mod query;
mod store;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
pub use query::{filter_query, list_query, FilterError, QueryDescriptor, MAX_LIST_ROWS};
pub use store::{fetch_rows, Record, StoreError};
