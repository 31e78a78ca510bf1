use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Converts a preference value to and from its stored string form
pub trait Codec<V>: Send + Sync {
    fn encode(&self, value: &V) -> Result<String, CodecError>;

    fn decode(&self, raw: &str) -> Result<V, CodecError>;
}

/// Stores the value's `Display` text verbatim, parses it back with `FromStr`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl<V> Codec<V> for TextCodec
where
    V: FromStr + Display,
{
    fn encode(&self, value: &V) -> Result<String, CodecError> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<V, CodecError> {
        raw.trim()
            .parse()
            .map_err(|_| CodecError::Unrecognized(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<V> Codec<V> for JsonCodec
where
    V: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &V) -> Result<String, CodecError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(&self, raw: &str) -> Result<V, CodecError> {
        Ok(serde_json::from_str(raw)?)
    }
}
