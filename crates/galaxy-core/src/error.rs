use thiserror::Error;

/// Rejected scene configuration. Per-frame work never fails; only building a
/// scene from bad parameters does.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("network needs at least one particle")]
    EmptyNetwork,
    #[error("connection distance must be finite and positive, got {0}")]
    InvalidConnectionDistance(f32),
    #[error("edge capacity factor must be non-zero")]
    ZeroEdgeCapacity,
    #[error("wrap bound must be finite and positive, got {0}")]
    InvalidWrapBound(f32),
}
