//! Response envelope shaping for the data endpoints.
//!
//! Every data endpoint returns the same fixed-shape object. The two
//! constructors are the only way to build one, which keeps the invariants
//! (`count == data.len()`, `data` never null) true by construction.

use serde::Serialize;
use usergate_db::Record;

/// Marker for rows that came from the live database.
const SOURCE_DATABASE: &str = "database";

/// Message carried by the degraded-mode envelope.
const UNAVAILABLE_MESSAGE: &str = "Database not connected";

/// The fixed-shape response body of the data endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// Whether a working data source produced this response.
    pub success: bool,

    /// Where the rows came from. Present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,

    /// Degraded-mode explanation. Present on unavailability only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,

    /// The status value the rows were filtered by, echoed verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// The rows. Empty, never null, when nothing matched.
    pub data: Vec<Record>,

    /// Always equals `data.len()`.
    pub count: usize,
}

impl Envelope {
    /// Wraps rows from a successful execution, including zero rows.
    pub fn success(data: Vec<Record>, filter: Option<String>) -> Self {
        let count = data.len();
        Self {
            success: true,
            source: Some(SOURCE_DATABASE),
            message: None,
            filter,
            data,
            count,
        }
    }

    /// The degraded-mode envelope: a well-formed, success-status response
    /// signalling the absence of a working data source.
    pub fn unavailable(filter: Option<String>) -> Self {
        Self {
            success: false,
            source: None,
            message: Some(UNAVAILABLE_MESSAGE),
            filter,
            data: Vec::new(),
            count: 0,
        }
    }
}
