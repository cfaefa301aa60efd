//! Wire types shared by the transport client and the session.
//!
//! Every backend-supplied field except `id` may be absent; the types decode
//! with defaults so a sparse body never fails deserialization (missing fields
//! become `None`, not a parse error).

use serde::{Deserialize, Serialize};

/// Structured classification result for one submitted draft.
///
/// Replaced wholesale on each successful submission; never merged with a
/// prior result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedReport {
    #[serde(default)]
    pub drug: Option<String>,
    #[serde(default)]
    pub adverse_events: Option<Vec<String>>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
}

impl ProcessedReport {
    /// Adverse events as a comma-joined display string (empty when absent).
    pub fn events_joined(&self) -> String {
        join_events(self.adverse_events.as_deref())
    }
}

/// One persisted report as returned by the backend's listing endpoint.
///
/// Immutable once received; `id` is the render identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub drug: Option<String>,
    #[serde(default)]
    pub adverse_events: Option<Vec<String>>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    pub fn events_joined(&self) -> String {
        join_events(self.adverse_events.as_deref())
    }
}

/// Join an optional event list for display, preserving order.
pub fn join_events(events: Option<&[String]>) -> String {
    match events {
        Some(list) => list.join(", "),
        None => String::new(),
    }
}

/// Render an optional string cell as its value or blank.
pub fn field_or_blank(field: Option<&str>) -> &str {
    field.unwrap_or("")
}
