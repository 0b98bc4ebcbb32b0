use crate::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    /// Stay window rejected before any store access.
    InvalidArgument(&'static str),
    /// Collaborator store failure, passed through unchanged.
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            EngineError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}
