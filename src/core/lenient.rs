//! Deserializers for fields the API sends as numbers or as numeric strings.
//!
//! The same `id` can arrive as `17`, `"17"` or `null` depending on the endpoint.
//! Flags may also arrive as `true`, `1` or `"1"`.

use serde::Serializer;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

struct OptU64;

impl<'de> Visitor<'de> for OptU64 {
    type Value = Option<u64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer, a numeric string or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(None);
        }
        v.parse()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

/// `Option<u64>` from an integer, a numeric string, `""` or `null`.
pub fn opt_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    d.deserialize_any(OptU64)
}

struct OptFlag;

impl<'de> Visitor<'de> for OptFlag {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, 0/1 or a numeric string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v != 0))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v != 0))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim() {
            "" => Ok(None),
            "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            other => other
                .parse::<i64>()
                .map(|n| Some(n != 0))
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

/// `Option<bool>` from a boolean, an integer or a numeric string.
pub fn opt_flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    d.deserialize_any(OptFlag)
}

/// Serialize an optional flag as `0`/`1`, the form the API documents.
pub fn flag_as_int<S: Serializer>(v: &Option<bool>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(b) => s.serialize_u8(u8::from(*b)),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_u64")]
        id: Option<u64>,
        #[serde(default, deserialize_with = "super::opt_flag")]
        flag: Option<bool>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ids_from_numbers_and_strings() {
        assert_eq!(probe(r#"{"id": 17}"#).id, Some(17));
        assert_eq!(probe(r#"{"id": "17"}"#).id, Some(17));
        assert_eq!(probe(r#"{"id": ""}"#).id, None);
        assert_eq!(probe(r#"{"id": null}"#).id, None);
        assert_eq!(probe("{}").id, None);
    }

    #[test]
    fn bad_ids_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": -3}"#).is_err());
    }

    #[test]
    fn flags_in_every_shape() {
        assert_eq!(probe(r#"{"flag": true}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": 0}"#).flag, Some(false));
        assert_eq!(probe(r#"{"flag": 1}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": "1"}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": "0"}"#).flag, Some(false));
        assert_eq!(probe(r#"{"flag": null}"#).flag, None);
    }
}
