use thiserror::Error;

/// Unified error type for the ricerca workspace.
///
/// This wraps input validation errors, source-tagged failures and timeouts,
/// registration-time unavailability, and an aggregate for requests where no
/// source produced an outcome.
#[derive(Debug, Error)]
pub enum RicercaError {
    /// Invalid input argument (empty topic, malformed configuration).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An individual source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
    },

    /// A source could not be constructed (missing credential, bad endpoint).
    ///
    /// Registration-time only; the orchestrator omits the source and proceeds.
    #[error("source unavailable: {source_name}: {reason}")]
    SourceUnavailable {
        /// Source name that is unavailable.
        source_name: String,
        /// Why the source cannot be used.
        reason: String,
    },

    /// Every source failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<RicercaError>),

    /// Issues with returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl RicercaError {
    /// Helper: build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source.into(),
        }
    }

    /// Helper: build a `SourceUnavailable` error.
    pub fn source_unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a per-source failure (error or timeout), as
    /// opposed to a request-level one.
    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::Source { .. } | Self::SourceTimeout { .. })
    }
}
