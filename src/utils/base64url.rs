//! Base64URL decoding per RFC 4648 (URL-safe alphabet, no padding)
//!
//! Thin wrapper around the `base64` crate with size limit validation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

/// Failure decoding a single Base64URL segment
///
/// Callers fold this into the crate [`Error`](crate::Error) variant that fits
/// the input (`MalformedToken` for token segments, `InvalidKey` for JWK fields).
#[derive(Error, Debug)]
pub(crate) enum Base64UrlError {
    #[error("Base64URL decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("decoded size exceeds limit: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>, Base64UrlError> {
    let result = URL_SAFE_NO_PAD.decode(input)?;

    if result.len() > max_size {
        return Err(Base64UrlError::TooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub(crate) fn decode_string(input: &str, max_size: usize) -> Result<String, Base64UrlError> {
    let bytes = decode_bytes(input, max_size)?;
    Ok(String::from_utf8(bytes)?)
}
