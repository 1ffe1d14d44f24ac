use std::time::Duration;

use log::{debug, error, warn};
use reqwest::Client;

use crate::{
    format::PriceResponse,
    query::PriceQuery,
    source::{FetchFailure, PriceSource},
};

pub mod blocking;

const BASE_URL: &str = "https://steamcommunity.com/market/priceoverview/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the price overview endpoint lives and how long a request may take
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl MarketConfig {
    pub fn url_for(&self, query: &PriceQuery) -> String {
        format!("{}?{}", self.base_url, query.query_string())
    }
}

/// Async client for the Steam community market.
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// instance can serve a whole batch of concurrent requests.
#[derive(Clone)]
pub struct SteamMarket {
    req_client: Client,
    config: MarketConfig,
}

impl SteamMarket {
    pub fn new() -> Result<Self, FetchFailure> {
        Self::with_config(MarketConfig::default())
    }

    pub fn with_config(config: MarketConfig) -> Result<Self, FetchFailure> {
        let req_client = match reqwest::ClientBuilder::new().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build HTTP client: {:?}", e);
                return Err(FetchFailure::Network);
            }
        };

        Ok(Self { req_client, config })
    }

    /// Requests the price overview of a single item.
    ///
    /// Exactly one GET is sent, nothing is retried.
    pub async fn get_overview(
        &self,
        query: &PriceQuery,
    ) -> Result<PriceResponse, FetchFailure> {
        let url = self.config.url_for(query);
        debug!("GET {}", url);

        let req = match self.req_client.get(&url).send().await {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to send request to the Steam market: {:?}", e);
                return Err(e.into());
            }
        };

        // any status outside 2xx is a server error, unfollowed redirects included
        let status = req.status();
        if !status.is_success() {
            warn!("Steam market answered {} for {:?}", status, query.item_name());
            return Err(FetchFailure::Server(status.as_u16()));
        }

        let body = match req.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body: {:?}", e);
                return Err(e.into());
            }
        };

        PriceResponse::from_body(&body).inspect_err(|_| {
            error!("Failed to parse JSON from response: {:?}", body);
        })
    }
}

impl PriceSource for SteamMarket {
    async fn price_overview(&self, query: &PriceQuery) -> String {
        match self.get_overview(query).await {
            Ok(response) => response.render(query),
            Err(failure) => failure.to_string(),
        }
    }
}
