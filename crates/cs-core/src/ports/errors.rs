use thiserror::Error;

/// Failure of a call across the backend bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The call never reached the backend, or its reply was lost.
    #[error("bridge transport error: {0}")]
    Transport(String),

    /// The backend received the call and refused it.
    #[error("backend rejected {call}: {reason}")]
    Rejected { call: &'static str, reason: String },

    /// The reply arrived but did not have the expected shape.
    #[error("failed to decode backend reply: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
