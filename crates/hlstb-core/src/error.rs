use thiserror::Error;

/// Failures of the harness itself. A failing check is not one of these.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("vector table is empty; nothing to check")]
    EmptyVectorTable,

    #[error("failed to write verdict: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
