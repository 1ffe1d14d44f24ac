use serde::{ser::Error as _, Serialize};
use serde_json::{ser::PrettyFormatter, Map, Value};

use crate::{
    catalog::{App, CatalogDomain, Currency},
    query::{PriceQuery, QueryError},
    source::FetchFailure,
};

/// Body of a price overview response once it has been parsed.
///
/// The market answers with an object on success and with a bare JSON
/// string for some failures, anything else is treated as undecodable.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceResponse {
    Overview(Map<String, Value>),
    Message(String),
}

impl TryFrom<Value> for PriceResponse {
    type Error = FetchFailure;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(PriceResponse::Overview(map)),
            Value::String(message) => Ok(PriceResponse::Message(message)),
            _ => Err(FetchFailure::Decode),
        }
    }
}

impl PriceResponse {
    /// Parses a raw response body
    pub fn from_body(body: &str) -> Result<Self, FetchFailure> {
        serde_json::from_str::<Value>(body)?.try_into()
    }

    /// Renders the response for the query that produced it.
    ///
    /// Overviews get `game_name`, `currency_name` and `item_name` added when
    /// the market did not send them and are printed as indented JSON. Messages
    /// are returned as they are.
    pub fn render(self, query: &PriceQuery) -> String {
        self.render_with(query.item_name(), query.app(), query.currency())
    }

    fn render_with(self, item_name: &str, app: App, currency: Currency) -> String {
        let map = match self {
            PriceResponse::Overview(map) => map,
            PriceResponse::Message(message) => return message,
        };

        match to_pretty_json(&enrich(map, item_name, app, currency)) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to serialize price overview: {:?}", e);
                FetchFailure::Decode.to_string()
            }
        }
    }
}

/// Formats a parsed response for raw request parameters.
///
/// Fails with [`QueryError::InvalidCode`] when either code is not in the
/// catalog, even if the response is a plain message.
pub fn format_response(
    item_name: &str,
    app_id: u32,
    currency: u32,
    parsed: PriceResponse,
) -> Result<String, QueryError> {
    let app = App::from_repr(app_id).ok_or(QueryError::InvalidCode {
        domain: CatalogDomain::App,
        code: app_id.into(),
    })?;
    let currency = Currency::from_repr(currency).ok_or(QueryError::InvalidCode {
        domain: CatalogDomain::Currency,
        code: currency.into(),
    })?;

    Ok(parsed.render_with(item_name, app, currency))
}

fn enrich(
    mut map: Map<String, Value>,
    item_name: &str,
    app: App,
    currency: Currency,
) -> Map<String, Value> {
    map.entry("game_name").or_insert_with(|| app.name().into());
    map.entry("currency_name").or_insert_with(|| currency.name().into());
    map.entry("item_name").or_insert_with(|| item_name.into());
    map
}

/// Four space indent, non-ASCII characters are written as-is
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
