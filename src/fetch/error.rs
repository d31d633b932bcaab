use thiserror::Error;

/// Failure of a single retrieval.
///
/// The `Display` output is what ends up in [`FetchState::Failed`](super::FetchState),
/// so every variant reads as a user-facing sentence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("Invalid response body: {0}")]
    Parse(String),
}
