//! RS256 signature verification against an ordered set of trusted keys

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::limits::{MAX_DECODED_SIGNATURE_SIZE, MAX_TOKEN_LENGTH};
use crate::utils::base64url;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// Verify the RS256 (RSASSA-PKCS1-v1_5 with SHA-256) signature of a compact token
///
/// The signed bytes are the header and payload segments exactly as they appear
/// in `token`, joined by `.`. Keys are tried in the given order and the first
/// one that verifies wins. When none does, the error carries the last
/// cryptographic failure for diagnostics only.
///
/// A token without exactly three segments, or whose signature segment is not
/// valid Base64URL, fails with [`Error::MalformedToken`] rather than
/// [`Error::InvalidSignature`].
pub fn verify_signature(token: &str, keys: &[PublicKey]) -> Result<()> {
    if keys.is_empty() {
        return Err(Error::ConfigurationInvalid(
            "at least one trusted key is required".into(),
        ));
    }

    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let (signing_input, signature_b64) = split_signed(token)?;

    let signature_bytes = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)
        .map_err(|e| Error::MalformedToken(format!("signature: {e}")))?;

    let mut last_error = String::new();
    for key in keys {
        let public_key =
            UnparsedPublicKey::new(&signature::RSA_PKCS1_2048_8192_SHA256, key.as_der());
        match public_key.verify(signing_input.as_bytes(), &signature_bytes) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = e.to_string(),
        }
    }

    Err(Error::InvalidSignature(last_error))
}

/// Split a compact token into its signing input (`header.payload`) and signature segment
fn split_signed(token: &str) -> Result<(&str, &str)> {
    let mut parts = token.splitn(4, '.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::MalformedToken(
            "expected three '.'-separated parts".into(),
        ));
    };

    // header and payload are adjacent in the source, so the signing input is a subslice
    let signing_input = &token[..header.len() + 1 + payload.len()];
    Ok((signing_input, signature))
}
