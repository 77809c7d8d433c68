//! Error Types
//!
//! Errors raised inside the dashboard. None of them reach the user: callers
//! log and fall back, but the typed error keeps the failure testable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("browser API error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Serialization(e.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
