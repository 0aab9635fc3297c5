// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RangeFoldError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RangeFoldError>,
    },

    #[error("Invalid {bound} bound '{value}': {reason}")]
    InvalidBound {
        bound: &'static str,
        value: String,
        reason: String,
    },

    #[error("Bound {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("Range of {steps} steps exceeds the configured limit of {limit}")]
    StepLimitExceeded { steps: u128, limit: u64 },

    #[error("Failed to parse {format} config: {details}")]
    Config { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, RangeFoldError>;

impl RangeFoldError {
    pub(crate) fn invalid_bound(
        bound: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidBound { bound, value: value.into(), reason: reason.into() }
    }
}

impl From<serde_json::Error> for RangeFoldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for RangeFoldError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RangeFoldError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RangeFoldError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RangeFoldError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
