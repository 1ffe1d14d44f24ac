//! Price lookups against the Steam community market `priceoverview` endpoint.
//!
//! Requests are validated against the known apps and currencies, sent either
//! blocking ([`fetch_sync`]) or concurrently ([`fetch_batch`]), and answered
//! with pretty printed JSON or a short failure message.

pub mod catalog;
pub mod encode;
pub mod fetch;
pub mod format;
pub mod query;
pub mod source;
pub mod sources;

pub use catalog::{App, CatalogDomain, Currency};
pub use encode::{encode_item_name, encode_item_name_value};
pub use fetch::{fetch, fetch_all, fetch_batch, fetch_batch_with, fetch_sync};
pub use format::{format_response, PriceResponse};
pub use query::{PriceQuery, QueryError};
pub use source::{FetchFailure, PriceSource};
pub use sources::steam::{blocking::BlockingSteamMarket, MarketConfig, SteamMarket};
