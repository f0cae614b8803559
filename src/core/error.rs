//! Error types for emitter implementations

pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors produced by line emitters.
///
/// The logger core never surfaces these: emission is fire-and-forget and a
/// failed write is the sink's concern. They exist for emitter construction
/// and for callers driving an emitter directly.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// IO error from the underlying writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File emitter error with path
    #[error("file emitter '{path}': {message}")]
    File { path: String, message: String },
}

impl EmitError {
    /// Create a file emitter error
    pub fn file(path: impl Into<String>, message: impl Into<String>) -> Self {
        EmitError::File {
            path: path.into(),
            message: message.into(),
        }
    }
}
