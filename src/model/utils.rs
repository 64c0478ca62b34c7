use std::fmt;

use serde::de::value::{MapAccessDeserializer, StrDeserializer};
use serde::de::{DeserializeSeed, Error as DeError, IntoDeserializer, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serializer};

use crate::internal::prelude::*;

/// Splits a comma separated tag list, trimming whitespace from each piece.
///
/// Empty pieces are kept, so `"a,,b"` yields `["a", "", "b"]`.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',').map(|tag| tag.trim().to_owned()).collect()
}

/// Used with `#[serde(deserialize_with = "deserialize_comma_separated_string")]`
///
/// A `null` or absent string gives no tags.
pub fn deserialize_comma_separated_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> StdResult<Vec<String>, D::Error> {
    let tags: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(tags.as_deref().map(split_tags).unwrap_or_default())
}

/// Used with `#[serde(serialize_with = "serialize_comma_separated_string")]`
#[allow(clippy::ptr_arg)]
pub fn serialize_comma_separated_string<S: Serializer>(
    vec: &Vec<String>,
    serializer: S,
) -> StdResult<S::Ok, S::Error> {
    serializer.serialize_str(&vec.join(","))
}

/// Deserializes a snowflake sent either as a JSON string or as a JSON number.
///
/// Strings must hold nothing but the decimal digits of the Id.
#[derive(Debug)]
pub struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a snowflake as a string or an unsigned integer")
    }

    fn visit_str<E: DeError>(self, v: &str) -> StdResult<Self::Value, E> {
        v.parse().map_err(|_| DeError::custom(format_args!("invalid snowflake: {v}")))
    }

    fn visit_u64<E: DeError>(self, v: u64) -> StdResult<Self::Value, E> {
        Ok(v)
    }

    fn visit_i64<E: DeError>(self, v: i64) -> StdResult<Self::Value, E> {
        u64::try_from(v).map_err(|_| DeError::custom(format_args!("invalid snowflake: {v}")))
    }
}

/// Decodes a payload object into `T`, reporting failures as [`ModelError`]s that name the
/// offending key.
///
/// Keys listed in `snowflakes` holding a string or number that fails to decode are reported as
/// [`ModelError::InvalidSnowflake`], any other bad value as [`ModelError::InvalidFieldType`].
pub(crate) fn deserialize_payload<'de, T: Deserialize<'de>>(
    payload: &'de Value,
    snowflakes: &'static [&'static str],
) -> Result<T> {
    let map = payload.as_object().ok_or(ModelError::NotAnObject)?;
    let fields = PayloadFields {
        iter: map.iter(),
        value: None,
        snowflakes,
    };

    Ok(T::deserialize(MapAccessDeserializer::new(fields))?)
}

struct PayloadFields<'de> {
    iter: serde_json::map::Iter<'de>,
    value: Option<(&'de str, &'de Value)>,
    snowflakes: &'static [&'static str],
}

impl<'de> MapAccess<'de> for PayloadFields<'de> {
    type Error = ModelError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> StdResult<Option<K::Value>, ModelError> {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some((key, value));
                let key: StrDeserializer<'_, ModelError> = key.as_str().into_deserializer();
                seed.deserialize(key).map(Some)
            },
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> StdResult<V::Value, ModelError> {
        let (key, value) =
            self.value.take().ok_or_else(|| ModelError::custom("value requested before its key"))?;
        let snowflake = self.snowflakes.iter().any(|field| *field == key);

        seed.deserialize(value).map_err(|why| match value {
            Value::String(raw) if snowflake => ModelError::InvalidSnowflake {
                field: key.to_owned(),
                value: raw.clone(),
            },
            Value::Number(raw) if snowflake => ModelError::InvalidSnowflake {
                field: key.to_owned(),
                value: raw.to_string(),
            },
            _ => ModelError::InvalidFieldType {
                field: key.to_owned(),
                reason: why.to_string(),
            },
        })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}
