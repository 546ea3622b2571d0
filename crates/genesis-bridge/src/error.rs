//! Error types for the render host bridge.

use thiserror::Error;

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur at the shell/host boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Selection write arrived after the surface was already created; the
    /// host read its mode at initialization and will never see this value.
    #[error("selection mode set after surface creation")]
    StaleModeSet,

    /// Surface came up with no selection latched.
    #[error("surface created before any selection mode was latched")]
    ModeNotSet,

    /// Operation not valid in the session's current phase.
    #[error("invalid session phase: {0}")]
    InvalidPhase(&'static str),

    /// Label pixel buffer does not match `width * height * 4`.
    #[error("label bitmap shape mismatch: {width}x{height} with {len} bytes")]
    BadLabelShape { width: u32, height: u32, len: usize },

    /// Session already terminated; termination is absorbing.
    #[error("render session terminated")]
    Terminated,
}
