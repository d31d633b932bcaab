//! Data fetching with a loading/error/data lifecycle.
//!
//! A [`FetchController`] owns one logical request at a time. Each request
//! is tagged with a generation number; resolutions carrying an older
//! generation are dropped, so a slow response for a previous identifier can
//! never overwrite the state of a newer one.

mod controller;
mod error;
mod http;
mod retriever;
mod state;

pub use controller::FetchController;
pub use error::FetchError;
pub use http::HttpRetriever;
pub use retriever::{RawResponse, Retriever};
pub use state::FetchState;
