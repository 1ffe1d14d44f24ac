use log::{debug, error, warn};
use reqwest::blocking::Client;

use super::MarketConfig;
use crate::{format::PriceResponse, query::PriceQuery, source::FetchFailure};

/// Blocking counterpart of [`super::SteamMarket`].
///
/// Must not be used from inside an async runtime, wrap calls in
/// `tokio::task::spawn_blocking` there.
pub struct BlockingSteamMarket {
    req_client: Client,
    config: MarketConfig,
}

impl BlockingSteamMarket {
    pub fn new() -> Result<Self, FetchFailure> {
        Self::with_config(MarketConfig::default())
    }

    pub fn with_config(config: MarketConfig) -> Result<Self, FetchFailure> {
        let req_client = match Client::builder().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build blocking HTTP client: {:?}", e);
                return Err(FetchFailure::Network);
            }
        };

        Ok(Self { req_client, config })
    }

    pub fn get_overview(&self, query: &PriceQuery) -> Result<PriceResponse, FetchFailure> {
        let url = self.config.url_for(query);
        debug!("GET {} (blocking)", url);

        let req = match self.req_client.get(&url).send() {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to send request to the Steam market: {:?}", e);
                return Err(e.into());
            }
        };

        let status = req.status();
        if !status.is_success() {
            warn!("Steam market answered {} for {:?}", status, query.item_name());
            return Err(FetchFailure::Server(status.as_u16()));
        }

        let body = req.text().map_err(|e| {
            error!("Failed to read response body: {:?}", e);
            FetchFailure::from(e)
        })?;

        PriceResponse::from_body(&body)
    }

    pub fn price_overview(&self, query: &PriceQuery) -> String {
        match self.get_overview(query) {
            Ok(response) => response.render(query),
            Err(failure) => failure.to_string(),
        }
    }
}
