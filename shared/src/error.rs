use thiserror::Error;

use crate::state::Surface;

/// Local input rejections. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter text to analyze")]
    EmptyText,
    #[error("Select an image to analyze")]
    NoImage,
    #[error("Enter site URL")]
    EmptyUrl,
    #[error("Please upload an image")]
    NotAnImage,
}

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("request rejected by the service")]
    Rejected { detail: Option<String> },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Text shown to the user after "Error: ".
    ///
    /// Server-supplied detail wins; everything else falls back to `fallback`.
    /// Transport and decode errors only reach the log.
    pub fn describe(&self, fallback: &str) -> String {
        match self {
            ClientError::Status { detail: Some(detail), .. }
            | ClientError::Rejected { detail: Some(detail) } => detail.clone(),
            ClientError::Status { status, detail: None } => format!("{fallback} (HTTP {status})"),
            ClientError::Rejected { detail: None }
            | ClientError::Network(_)
            | ClientError::Malformed(_) => fallback.to_string(),
        }
    }
}

/// Why an orchestrated operation did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
    #[error("{0:?} surface already has a request in flight")]
    Busy(Surface),
    #[error(transparent)]
    Failed(#[from] ClientError),
    #[error("cancelled by user")]
    Cancelled,
}
