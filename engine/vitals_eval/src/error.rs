/// Failures surfaced while preparing a membership explanation.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    /// No record was supplied; callers must not render anything.
    #[error("no record to explain")]
    MissingRecord,

    #[error("invalid record JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ExplainResult<T> = Result<T, ExplainError>;
