//! Decoding of CLI JSON output

use serde::de::DeserializeOwned;

use crate::errors::GatewayError;

/// Decode a JSON array; `null` is treated as an empty list
pub fn decode_list<T: DeserializeOwned>(action: &str, out: &[u8]) -> Result<Vec<T>, GatewayError> {
    let items: Option<Vec<T>> = decode_one(action, out)?;
    Ok(items.unwrap_or_default())
}

pub fn decode_one<T: DeserializeOwned>(action: &str, out: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(out).map_err(|source| GatewayError::DecodeError {
        action: action.to_string(),
        source,
    })
}
