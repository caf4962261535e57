use thiserror::Error;

/// Reasons a pipeline run did not complete.
/// Any of these means the run produced no valid result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A mapper task panicked, was cancelled or could not hand off its emissions
    #[error("map task {task_id} failed: {reason}")]
    MapTaskFailed { task_id: usize, reason: String },

    /// The shuffle collector task did not complete
    #[error("shuffle collector failed: {0}")]
    ShuffleFailed(String),

    /// A reducer task panicked or was cancelled
    #[error("reduce task for key '{key}' failed: {reason}")]
    ReduceTaskFailed { key: String, reason: String },

    /// An emission was rejected because the collector is no longer receiving
    #[error("emission conduit closed before the map phase finished")]
    ConduitClosed,

    /// The collector grouped a different number of emissions than mappers produced
    #[error("emission count mismatch: mappers emitted {emitted}, collector grouped {grouped}")]
    EmissionMismatch { emitted: usize, grouped: usize },

    /// A writer panicked while holding the result map lock
    #[error("result map lock poisoned")]
    LockPoisoned,

    /// A failed task closed the task limiter, so no further tasks were spawned
    #[error("task limiter closed after a task failure")]
    LimiterClosed,
}

/// Errors raised while loading or validating a [`crate::Config`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
