use serde_json::Value;
use thiserror::Error;

use crate::{
    catalog::{App, CatalogDomain, Currency},
    encode::encode_item_name,
};

/// Problems with the arguments of a price request.
///
/// These are raised before anything touches the network and can only be
/// fixed by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid type for {field}: expected {expected}, got {found}.")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Item name cannot consist solely of whitespace.")]
    EmptyName,
    #[error("Invalid {domain} ({code}): not found in {}.", table_name(.domain))]
    InvalidCode { domain: CatalogDomain, code: i128 },
}

fn table_name(domain: &CatalogDomain) -> &'static str {
    match domain {
        CatalogDomain::App => "Apps",
        CatalogDomain::Currency => "Currency",
    }
}

/// A validated request for the price overview of one market item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    item_name: String,
    app: App,
    currency: Currency,
}

impl PriceQuery {
    /// Validates the raw request parameters.
    ///
    /// Checks run in order and stop at the first failure: the item name must
    /// have non-whitespace content, then the app id and the currency must be
    /// known codes.
    pub fn new(item_name: &str, app_id: u32, currency: u32) -> Result<Self, QueryError> {
        if item_name.trim().is_empty() {
            return Err(QueryError::EmptyName);
        }

        let app = App::from_repr(app_id).ok_or(QueryError::InvalidCode {
            domain: CatalogDomain::App,
            code: app_id.into(),
        })?;

        let currency = Currency::from_repr(currency).ok_or(QueryError::InvalidCode {
            domain: CatalogDomain::Currency,
            code: currency.into(),
        })?;

        Ok(Self {
            item_name: item_name.to_owned(),
            app,
            currency,
        })
    }

    /// Validates loosely typed parameters, e.g. values read from a request file.
    ///
    /// The name has to be a JSON string and both codes JSON integers, a
    /// symbolic name like `"CS2"` is a type mismatch.
    pub fn from_values(
        item_name: &Value,
        app_id: &Value,
        currency: &Value,
    ) -> Result<Self, QueryError> {
        let Value::String(item_name) = item_name else {
            return Err(QueryError::TypeMismatch {
                field: "item_name",
                expected: "str",
                found: type_name(item_name),
            });
        };

        if item_name.trim().is_empty() {
            return Err(QueryError::EmptyName);
        }

        let app_id = catalog_code(app_id, CatalogDomain::App)?;
        let currency = catalog_code(currency, CatalogDomain::Currency)?;

        Self::new(item_name, app_id, currency)
    }

    /// Reads a request object with `item_name`, `app_id` and an optional
    /// `currency` that defaults to USD
    pub fn from_json(request: &Value) -> Result<Self, QueryError> {
        let Value::Object(fields) = request else {
            return Err(QueryError::TypeMismatch {
                field: "request",
                expected: "object",
                found: type_name(request),
            });
        };

        let default_currency = Value::from(Currency::default().code());

        Self::from_values(
            fields.get("item_name").unwrap_or(&Value::Null),
            fields.get("app_id").unwrap_or(&Value::Null),
            fields.get("currency").unwrap_or(&default_currency),
        )
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn app(&self) -> App {
        self.app
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Query string for the price overview endpoint, parameters in the order
    /// the market expects them
    pub fn query_string(&self) -> String {
        format!(
            "appid={}&currency={}&market_hash_name={}",
            self.app.code(),
            self.currency.code(),
            encode_item_name(&self.item_name)
        )
    }
}

/// Checks that `value` is an integer and a member of the domain's table
fn catalog_code(value: &Value, domain: CatalogDomain) -> Result<u32, QueryError> {
    let field = match domain {
        CatalogDomain::App => "app ID",
        CatalogDomain::Currency => "currency",
    };

    let integer = match value {
        Value::Number(n) if !n.is_f64() => n,
        _ => {
            return Err(QueryError::TypeMismatch {
                field,
                expected: "int",
                found: type_name(value),
            })
        }
    };

    // integers wider than i128 are clamped, they are not catalog members either way
    let digits = integer.to_string();
    let code = digits.parse::<i128>().unwrap_or(if digits.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    });

    let member = u32::try_from(code).ok().filter(|code| match domain {
        CatalogDomain::App => App::contains(*code),
        CatalogDomain::Currency => Currency::contains(*code),
    });

    member.ok_or(QueryError::InvalidCode { domain, code })
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn whitespace_only_names_are_empty() {
        for name in ["", " ", "\t", " \n  \r "] {
            assert_eq!(PriceQuery::new(name, 730, 1), Err(QueryError::EmptyName));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            PriceQuery::new("Dreams & Nightmares Case", 0, 1),
            Err(QueryError::InvalidCode {
                domain: CatalogDomain::App,
                code: 0
            })
        );
        assert_eq!(
            PriceQuery::new("Dreams & Nightmares Case", 730, 33),
            Err(QueryError::InvalidCode {
                domain: CatalogDomain::Currency,
                code: 33
            })
        );
    }

    #[test]
    fn empty_name_is_reported_before_bad_codes() {
        assert_eq!(PriceQuery::new("   ", 0, 0), Err(QueryError::EmptyName));
    }

    #[test]
    fn app_is_checked_before_currency() {
        let err = PriceQuery::new("Key", 1, 0).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidCode {
                domain: CatalogDomain::App,
                ..
            }
        ));
    }

    #[test]
    fn valid_query_keeps_the_name_as_given() {
        let query = PriceQuery::new("  Mann Co. Supply Crate Key ", 440, 3).unwrap();
        assert_eq!(query.item_name(), "  Mann Co. Supply Crate Key ");
        assert_eq!(query.app(), App::TeamFortress2);
        assert_eq!(query.currency(), Currency::Eur);
    }

    #[test]
    fn query_string_orders_app_currency_name() {
        let query = PriceQuery::new("Dreams & Nightmares Case", 730, 1).unwrap();
        assert_eq!(
            query.query_string(),
            "appid=730&currency=1&market_hash_name=Dreams+%26+Nightmares+Case"
        );
    }

    #[test]
    fn non_text_name_is_a_type_mismatch() {
        let err = PriceQuery::from_values(&json!(11111), &json!(730), &json!(1)).unwrap_err();
        assert_eq!(
            err,
            QueryError::TypeMismatch {
                field: "item_name",
                expected: "str",
                found: "int"
            }
        );
    }

    #[test]
    fn symbolic_codes_are_a_type_mismatch() {
        let err = PriceQuery::from_values(&json!("Key"), &json!("cs2"), &json!(1)).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { field: "app ID", .. }));

        let err = PriceQuery::from_values(&json!("Key"), &json!(730), &json!("usd")).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { field: "currency", .. }));

        let err = PriceQuery::from_values(&json!("Key"), &json!(730.0), &json!(1)).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { found: "float", .. }));
    }

    #[test]
    fn codes_wider_than_u64_are_invalid_not_mismatched() {
        let huge: Value = serde_json::from_str("18446744073709551616").unwrap();
        let err = PriceQuery::from_values(&json!("Key"), &huge, &json!(1)).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidCode {
                domain: CatalogDomain::App,
                code: 18446744073709551616
            }
        );
    }

    #[test]
    fn negative_code_is_invalid_not_mismatched() {
        let err = PriceQuery::from_values(&json!("Key"), &json!(-730), &json!(1)).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidCode {
                domain: CatalogDomain::App,
                code: -730
            }
        );
    }

    #[test]
    fn json_request_defaults_to_usd() {
        let query = PriceQuery::from_json(&json!({
            "item_name": "Snowcamo Jacket",
            "app_id": 252490
        }))
        .unwrap();
        assert_eq!(query.currency(), Currency::Usd);
        assert_eq!(query.app(), App::Rust);
    }

    #[test]
    fn json_request_without_name_is_a_type_mismatch() {
        let err = PriceQuery::from_json(&json!({ "app_id": 730 })).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { found: "null", .. }));

        let err = PriceQuery::from_json(&json!(["Key", 730, 1])).unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { field: "request", .. }));
    }

    #[test]
    fn error_messages_read_like_sentences() {
        assert_eq!(
            PriceQuery::new("Key", 0, 1).unwrap_err().to_string(),
            "Invalid app ID (0): not found in Apps."
        );
        assert_eq!(
            PriceQuery::new("Key", 730, 99).unwrap_err().to_string(),
            "Invalid currency (99): not found in Currency."
        );
    }
}
