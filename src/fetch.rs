use futures_util::future::join_all;
use log::info;

use crate::{
    catalog::Currency,
    query::{PriceQuery, QueryError},
    source::PriceSource,
    sources::steam::{blocking::BlockingSteamMarket, SteamMarket},
};

/// Fetches the price overview of one item, blocking the calling thread.
///
/// `currency` defaults to USD. Invalid arguments are returned as
/// [`QueryError`] before any request is made; failures while talking to the
/// market come back as a message in the `Ok` value.
pub fn fetch_sync(
    item_name: &str,
    app_id: u32,
    currency: Option<u32>,
) -> Result<String, QueryError> {
    let currency = currency.unwrap_or(Currency::default().code());
    let query = PriceQuery::new(item_name, app_id, currency)?;

    Ok(match BlockingSteamMarket::new() {
        Ok(market) => market.price_overview(&query),
        Err(failure) => failure.to_string(),
    })
}

/// Async version of [`fetch_sync`], opens a session for this one request
pub async fn fetch(
    item_name: &str,
    app_id: u32,
    currency: Option<u32>,
) -> Result<String, QueryError> {
    let currency = currency.unwrap_or(Currency::default().code());
    let query = PriceQuery::new(item_name, app_id, currency)?;

    Ok(match SteamMarket::new() {
        Ok(market) => market.price_overview(&query).await,
        Err(failure) => failure.to_string(),
    })
}

/// Fetches many items concurrently over a session opened for the batch and
/// dropped when it completes.
///
/// Every request is validated first, so a bad request aborts the batch
/// before anything is sent. The output has one entry per request, in
/// request order.
pub async fn fetch_batch(requests: &[(String, u32, u32)]) -> Result<Vec<String>, QueryError> {
    let queries = validate_batch(requests)?;

    Ok(match SteamMarket::new() {
        Ok(market) => fetch_all(&market, &queries).await,
        Err(failure) => vec![failure.to_string(); queries.len()],
    })
}

/// Same as [`fetch_batch`] over a source the caller already holds, e.g. a
/// [`SteamMarket`] shared between several batches
pub async fn fetch_batch_with<S: PriceSource>(
    source: &S,
    requests: &[(String, u32, u32)],
) -> Result<Vec<String>, QueryError> {
    let queries = validate_batch(requests)?;

    Ok(fetch_all(source, &queries).await)
}

fn validate_batch(requests: &[(String, u32, u32)]) -> Result<Vec<PriceQuery>, QueryError> {
    requests
        .iter()
        .map(|(item_name, app_id, currency)| PriceQuery::new(item_name, *app_id, *currency))
        .collect()
}

/// Runs one request per query against `source` at the same time and
/// collects the results in query order, whichever finishes first
pub async fn fetch_all<S: PriceSource>(source: &S, queries: &[PriceQuery]) -> Vec<String> {
    info!("Fetching {} price overviews", queries.len());

    join_all(queries.iter().map(|query| source.price_overview(query))).await
}
