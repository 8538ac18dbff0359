//! Error types for card composition.

use starcard_canvas::CanvasError;
use thiserror::Error;

/// Result type alias using CardError.
pub type CardResult<T> = Result<T, CardError>;

/// Coarse failure category, stable enough for callers to map to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input data is missing a field or holds an unsupported value.
    DataShape,
    /// An asset could not be produced or decoded.
    AssetMissing,
    /// Character selection is out of range.
    Range,
    /// The drawing backend failed.
    Render,
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Invalid card data: {0}")]
    DataShape(String),

    #[error("Asset {key} is unavailable: {reason}")]
    AssetMissing { key: String, reason: String },

    #[error("Asset {key} could not be decoded: {source}")]
    AssetDecode {
        key: String,
        #[source]
        source: CanvasError,
    },

    #[error("No characters are displayed on this profile, display one in-game first")]
    EmptyShowcase,

    #[error("Character index {index} is out of range, this profile only has {available} characters")]
    CharacterIndex { index: usize, available: usize },

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error("Malformed showcase payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl CardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CardError::DataShape(_) | CardError::Payload(_) => ErrorKind::DataShape,
            CardError::AssetMissing { .. } | CardError::AssetDecode { .. } => {
                ErrorKind::AssetMissing
            }
            CardError::EmptyShowcase | CardError::CharacterIndex { .. } => ErrorKind::Range,
            CardError::Canvas(_) => ErrorKind::Render,
        }
    }

    pub(crate) fn data_shape(msg: impl Into<String>) -> Self {
        CardError::DataShape(msg.into())
    }
}
