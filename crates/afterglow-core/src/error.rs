use thiserror::Error;

/// Failures at the edges of the effects core.
///
/// None of these stop the render loop; callers log them and move on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmbientError {
    #[error("drawing surface is not available")]
    SurfaceUnavailable,
    #[error("unknown view mode `{0}` (expected `abstract` or `scene`)")]
    UnknownMode(String),
    #[error("draw call failed: {0}")]
    Draw(String),
}
