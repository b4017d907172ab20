use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{ClaimSet, Payload};
use crate::utils::base64url;

/// Decode a compact token into its claims without evaluating trust
///
/// Only the payload (second) segment is read, so a token missing its
/// signature still decodes. Success means the input is structurally a token,
/// not that it is authentic: pass the result to [`validate`](crate::validate).
///
/// # Example
/// ```ignore
/// let claims = idtoken::decode(&bearer)?;
/// println!("token for {:?}", claims.email());
/// ```
pub fn decode(token: &str) -> Result<ClaimSet> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let mut parts = token.split('.');
    let _header = parts.next();
    let payload_b64 = parts
        .next()
        .ok_or_else(|| Error::MalformedToken("expected at least two '.'-separated parts".into()))?;

    let payload_json = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)
        .map_err(|e| Error::MalformedToken(format!("payload: {e}")))?;

    let payload: Payload = miniserde::json::from_str(&payload_json)
        .map_err(|e| Error::MalformedToken(format!("failed to parse payload: {e}")))?;

    Ok(ClaimSet::new(payload, token.to_string()))
}
