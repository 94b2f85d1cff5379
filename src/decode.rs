//! Turn raw response bodies into model values.
//!
//! Decoding is all-or-nothing: any mismatch anywhere in the payload fails the
//! whole call with [`TcgDexError::DecodingFailed`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TcgDexError};
use crate::models::{Card, CardCategory};

/// Only the discriminator; every other field of the payload is skipped.
#[derive(Deserialize)]
struct CategoryProbe {
    category: Option<Value>,
}

/// Decode a body against a monomorphic schema.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Failed to decode {}: {}", std::any::type_name::<T>(), e);
        TcgDexError::from(e)
    })
}

/// Decode a single card payload.
///
/// The `category` field is read first, then the full body is decoded again
/// against the schema that category selects.
pub fn decode_card(body: &[u8]) -> Result<Card> {
    let probe: CategoryProbe = decode(body)?;
    let category = CardCategory::resolve(probe.category.as_ref()).map_err(|e| {
        log::debug!("{}", e);
        TcgDexError::DecodingFailed(e)
    })?;
    log::trace!("resolved card category {}", category);

    let mut de = serde_json::Deserializer::from_slice(body);
    Card::deserialize_as(category, &mut de)
        .and_then(|card| de.end().map(|()| card))
        .map_err(|e| {
            log::debug!("Failed to decode {} card: {}", category, e);
            TcgDexError::from(e)
        })
}

/// Whether a 2xx body stands for "no such resource": empty, whitespace, or a
/// bare JSON `null`.
pub fn is_absent(body: &[u8]) -> bool {
    let trimmed = body.trim_ascii();
    trimmed.is_empty() || trimmed == b"null"
}

/// Decode a single-resource body, mapping an absent body to `None`.
pub fn decode_optional<T, F>(body: &[u8], decode_fn: F) -> Result<Option<T>>
where
    F: FnOnce(&[u8]) -> Result<T>,
{
    if is_absent(body) {
        return Ok(None);
    }
    decode_fn(body).map(Some)
}

