use thiserror::Error;

use crate::query::PriceQuery;

/// Ways a request can fail once it has left the validator.
///
/// These are expected outcomes of talking to the market, so callers of the
/// fetch functions never see them as errors: the `Display` text is returned
/// in place of the price data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Server error: {0}")]
    Server(u16),
    #[error("Network error. Please check your internet connection.")]
    Network,
    #[error("Timeout error.")]
    Timeout,
    #[error("Error decoding JSON response from server.")]
    Decode,
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return FetchFailure::Timeout;
        }

        FetchFailure::Network
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(_: serde_json::Error) -> Self {
        FetchFailure::Decode
    }
}

pub trait PriceSource {
    /// Performs exactly one request for the query and returns either the
    /// formatted price overview or a failure message
    fn price_overview(
        &self,
        query: &PriceQuery,
    ) -> impl std::future::Future<Output = String> + Send;
}
