use thiserror::Error;

/// Failures surfaced by a caller-supplied payment invocation. The pay button
/// only reacts to settlement; these variants exist for the caller's own
/// error surfacing.
#[derive(Debug, Clone, Error)]
pub enum PayError {
    #[error("payment rejected: {0}")]
    Rejected(String),

    #[error("payment failed: {0}")]
    Failed(String),
}
