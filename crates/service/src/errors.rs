use thiserror::Error;

/// Failures raised by the user store.
///
/// `UserNotFound` is the only variant callers are expected to branch on; its
/// display text is what the 404 response echoes. `Io` and `Decode` surface
/// at `open`, `Io` and `Encode` at save time.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user_not_found")]
    UserNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(serde_json::Error),
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
}
