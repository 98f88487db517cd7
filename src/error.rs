pub type Result<T> = std::result::Result<T, FlowError>;

/// Boundary errors. The layout core itself never fails: dangling references
/// drop their edge, cycles degrade to a trailing layer, and an empty graph
/// yields fallback bounds.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("invalid flow JSON: {0}")]
    Json(#[from] serde_json::Error),
}
