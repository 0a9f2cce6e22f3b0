//! Error taxonomy for the metric wrapper.

use thiserror::Error;

/// Errors surfaced by the BEER metric wrapper.
///
/// Every failure is terminal for the current call: there is no retry path and
/// no partial result.
#[derive(Debug, Error)]
pub enum MetricError {
    /// The Java runtime could not be invoked.
    #[error("java is not installed or not invocable ({0}); install java and try again")]
    MissingRuntime(String),

    /// The inputs cannot be scored as given.
    #[error("{0}")]
    UnsupportedInput(String),

    /// Downloading or extracting the scorer archive failed.
    #[error("failed to set up the beer scorer: {source}")]
    Setup {
        #[source]
        source: anyhow::Error,
    },

    /// File staging, subprocess execution, or output parsing failed.
    #[error("error while computing beer score: {source}")]
    Scoring {
        #[source]
        source: anyhow::Error,
    },
}

impl MetricError {
    pub(crate) fn setup(source: anyhow::Error) -> Self {
        Self::Setup { source }
    }

    pub(crate) fn scoring(source: anyhow::Error) -> Self {
        Self::Scoring { source }
    }
}
