//! Error types for widget ingestion and store mutations.

use crate::widget::WidgetKind;
use thiserror::Error;

/// Widget errors.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Unknown widget type: {0}")]
    UnknownType(String),
    #[error("Duplicate widget id: {0}")]
    DuplicateId(String),
    #[error("Invalid props for {kind}: {source}")]
    InvalidProps {
        kind: WidgetKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
