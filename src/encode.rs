use serde_json::Value;
use url::form_urlencoded::byte_serialize;

use crate::query::{type_name, QueryError};

/// Encodes an item name for the `market_hash_name` query parameter.
///
/// Surrounding whitespace is dropped, inner spaces become `+` and every
/// other byte outside `[A-Za-z0-9_.-]` is percent-escaped. The market needs
/// `~` sent as `%7E`, which `byte_serialize` already does; `*` is left alone
/// by it and gets escaped here so the output matches the links the web
/// frontend produces.
pub fn encode_item_name(item_name: &str) -> String {
    byte_serialize(item_name.trim().as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}

/// Same as [`encode_item_name`] for a name that has not been type checked yet
pub fn encode_item_name_value(item_name: &Value) -> Result<String, QueryError> {
    match item_name {
        Value::String(name) => Ok(encode_item_name(name)),
        other => Err(QueryError::TypeMismatch {
            field: "item_name",
            expected: "str",
            found: type_name(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_item_name("Dreams & Nightmares"), "Dreams+%26+Nightmares");
        assert_eq!(
            encode_item_name("AWP | Neo-Noir (Factory New)"),
            "AWP+%7C+Neo-Noir+%28Factory+New%29"
        );
    }

    #[test]
    fn tilde_is_escaped() {
        assert_eq!(encode_item_name("~Yellow~"), "%7EYellow%7E");
        assert_eq!(
            encode_item_name("Music Kit | Chipzel, ~Yellow Magic~"),
            "Music+Kit+%7C+Chipzel%2C+%7EYellow+Magic%7E"
        );
    }

    #[test]
    fn asterisk_is_escaped() {
        assert_eq!(encode_item_name("*Star*"), "%2AStar%2A");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(encode_item_name(" x "), encode_item_name("x"));
        assert_eq!(encode_item_name("\tDoomsday Hoodie\n"), "Doomsday+Hoodie");
    }

    #[test]
    fn inner_whitespace_becomes_plus_signs() {
        assert_eq!(encode_item_name("Alpha    Beta"), "Alpha++++Beta");
    }

    #[test]
    fn non_ascii_is_percent_encoded_as_utf8() {
        assert_eq!(encode_item_name("★ Karambit"), "%E2%98%85+Karambit");
    }

    #[test]
    fn empty_name_encodes_to_empty() {
        assert_eq!(encode_item_name(""), "");
    }

    #[test]
    fn non_text_values_are_rejected() {
        assert!(matches!(
            encode_item_name_value(&Value::Null),
            Err(QueryError::TypeMismatch { found: "null", .. })
        ));
        assert!(matches!(
            encode_item_name_value(&json!(11111)),
            Err(QueryError::TypeMismatch { found: "int", .. })
        ));
        assert_eq!(
            encode_item_name_value(&json!("Dreams & Nightmares")).unwrap(),
            "Dreams+%26+Nightmares"
        );
    }
}
