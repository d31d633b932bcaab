use std::future::Future;

use super::error::FetchError;

/// Status and body of a completed retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by the fetch controller.
///
/// Implementations only report what happened; status classification and
/// body parsing stay in the controller.
pub trait Retriever: Send + Sync + 'static {
    fn retrieve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}
