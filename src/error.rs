//! Error types for the generation pipeline and the history store.

/// Failure talking to the generation backend.
///
/// Produced only by the client layer and passed through the orchestrator
/// untouched. The HTTP boundary maps every variant to 503.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamFailure {
    // connection refused, DNS, timeout, broken body
    #[error("upstream unreachable: {detail}")]
    Unreachable { detail: String },

    // backend answered with a non-success status
    #[error("upstream error: {detail}")]
    UpstreamError { detail: String },
}

impl UpstreamFailure {
    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self::Unreachable { detail: detail.into() }
    }

    pub fn upstream_error(detail: impl Into<String>) -> Self {
        Self::UpstreamError { detail: detail.into() }
    }

    /// Stable tag used in responses and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "unreachable",
            Self::UpstreamError { .. } => "upstream-error",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Unreachable { detail } | Self::UpstreamError { detail } => detail,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("invalid history record: {0}")]
    InvalidRecord(String),
}
