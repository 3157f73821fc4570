use thiserror::Error;

/// Errors returned by the statistics service and the schema setup
#[derive(Debug, Error)]
pub enum StatsError {
    /// The store is unreachable, the statement is malformed, or the engine failed
    #[error("query execution failed: {0}")]
    QueryExecution(#[from] rusqlite::Error),

    /// A caller-supplied filter value failed validation; the store was not touched
    #[error("invalid value for filter `{field}`: {reason}")]
    InvalidFilter { field: &'static str, reason: String },

    #[error("schema migration failed: {0}")]
    Migration(String),
}

impl StatsError {
    pub fn invalid_filter(field: &'static str, reason: impl Into<String>) -> Self {
        StatsError::InvalidFilter {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, StatsError::InvalidFilter { .. })
    }

    pub fn is_query_execution(&self) -> bool {
        matches!(self, StatsError::QueryExecution(_))
    }
}
