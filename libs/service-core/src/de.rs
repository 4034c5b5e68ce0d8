//! Strict JSON decoding helpers for response models.
//!
//! Plain serde is more lenient than the wire contract: a struct happily
//! deserializes from a JSON array, and a zone-less timestamp is rejected.
//! These helpers close both gaps.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ServiceError;

/// Decode a response body that must be a single JSON object.
///
/// # Errors
///
/// [`ServiceError::Decode`] when the body is not JSON, is not an object, or
/// does not match `T`. No partial value is ever returned.
pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ServiceError::decode(format!("response body is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(ServiceError::decode(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| ServiceError::decode(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `#[serde(with = "service_core::de::object_list")]` for `Option<Vec<T>>`
/// fields whose elements are models.
///
/// Every element must be a JSON object; the first one that is not aborts the
/// whole decode with its index.
pub mod object_list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use super::kind_of;

    /// # Errors
    ///
    /// Fails when the value is not an array, an element is not an object, or
    /// an element does not match `T`.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let Some(raw) = Option::<Vec<Value>>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let mut items = Vec::with_capacity(raw.len());
        for (index, element) in raw.into_iter().enumerate() {
            if !element.is_object() {
                return Err(D::Error::custom(format!(
                    "element {index} must be a JSON object, got {}",
                    kind_of(&element)
                )));
            }
            let item = serde_json::from_value(element)
                .map_err(|e| D::Error::custom(format!("element {index}: {e}")))?;
            items.push(item);
        }
        Ok(Some(items))
    }

    /// # Errors
    ///
    /// Propagates the serializer's error.
    #[allow(clippy::ref_option)] // signature fixed by serde's `with`
    pub fn serialize<S, T>(items: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        items.serialize(serializer)
    }
}

/// `#[serde(with = "service_core::de::object_vec")]` for required `Vec<T>`
/// fields whose elements are models. Same element rules as [`object_list`].
pub mod object_vec {
    use serde::de::Error as _;
    use serde::{Deserializer, Serialize, Serializer};

    /// # Errors
    ///
    /// Fails when the value is absent, `null`, not an array, or holds a
    /// non-object element.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        super::object_list::deserialize(deserializer)?
            .ok_or_else(|| D::Error::custom("expected an array of objects, got null"))
    }

    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        items.serialize(serializer)
    }
}

/// `#[serde(with = "service_core::de::datetime")]` for `Option<DateTime<Utc>>`.
///
/// Accepts RFC 3339 and the zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` form, which
/// is read as UTC. Always writes RFC 3339 with a `Z` suffix.
pub mod datetime {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Parse a wire timestamp.
    ///
    /// # Errors
    ///
    /// Returns the RFC 3339 parse error when neither form matches.
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(rfc_err) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
                .map_err(|_| rfc_err),
        }
    }

    /// # Errors
    ///
    /// Fails on a present value that is not a string or not a timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                parse(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp `{raw}`: {e}")))
            })
            .transpose()
    }

    /// # Errors
    ///
    /// Propagates the serializer's error.
    #[allow(clippy::ref_option)] // signature fixed by serde's `with`
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Item {
        name: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Page {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "object_list"
        )]
        items: Option<Vec<Item>>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "datetime"
        )]
        created_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn rejects_non_object_body() {
        let err = decode_object::<Page>(b"[1,2]").unwrap_err();
        assert_eq!(err.to_string(), "decode error: expected a JSON object, got an array");
        assert!(decode_object::<Page>(b"not json").is_err());
    }

    #[test]
    fn absent_and_null_fields_stay_unset() {
        let page: Page = decode_object(br#"{"created_at":null}"#).unwrap();
        assert_eq!(
            page,
            Page {
                items: None,
                created_at: None
            }
        );
    }

    #[test]
    fn empty_list_is_preserved() {
        let page: Page = decode_object(br#"{"items":[]}"#).unwrap();
        assert_eq!(page.items, Some(Vec::new()));
    }

    #[test]
    fn non_object_element_aborts_the_list() {
        let err = decode_object::<Page>(br#"{"items":[{"name":"a"},"b",{"name":"c"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ServiceError::Decode { .. }));
        assert!(err.to_string().contains("element 1 must be a JSON object"));
    }

    #[test]
    fn type_mismatch_on_present_key_fails() {
        assert!(decode_object::<Page>(br#"{"items":[{"name":5}]}"#).is_err());
        assert!(decode_object::<Page>(br#"{"items":{"name":"a"}}"#).is_err());
    }

    #[test]
    fn timestamps_accept_zone_less_form() {
        let expected = Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(datetime::parse("2019-01-01T12:00:00").unwrap(), expected);
        assert_eq!(datetime::parse("2019-01-01T12:00:00Z").unwrap(), expected);
        assert_eq!(datetime::parse("2019-01-01T14:00:00+02:00").unwrap(), expected);
        assert!(datetime::parse("yesterday").is_err());

        let page: Page = decode_object(br#"{"created_at":"2019-01-01T12:00:00.000"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"created_at":"2019-01-01T12:00:00Z"}"#
        );
    }
}
