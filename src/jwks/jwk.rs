//! JWK (JSON Web Key) struct and conversion

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::limits::{MAX_JWK_E_SIZE, MAX_JWK_N_SIZE};
use crate::utils::base64url;
use miniserde::Deserialize;

/// A single JSON Web Key (RFC 7517)
///
/// Only the members relevant to RSA signature keys are kept; any other member
/// in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Jwk {
    pub(crate) kty: Option<String>,
    pub(crate) kid: Option<String>,
    pub(crate) alg: Option<String>,
    /// "sig" or "enc"; absent means any use
    #[serde(rename = "use")]
    pub(crate) key_use: Option<String>,
    pub(crate) n: Option<String>,
    pub(crate) e: Option<String>,
}

impl Jwk {
    pub fn key_id(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    pub fn key_type(&self) -> Option<&str> {
        self.kty.as_deref()
    }

    /// Whether this is an RSA key usable for RS256 signature verification
    ///
    /// `use` and `alg` are optional per RFC 7517; when present they must be
    /// `"sig"` and `"RS256"`.
    pub fn is_rs256_signing_key(&self) -> bool {
        self.kty.as_deref() == Some("RSA")
            && self.key_use.as_deref().is_none_or(|u| u == "sig")
            && self.alg.as_deref().is_none_or(|a| a == "RS256")
    }

    /// Convert to a trusted [`PublicKey`], carrying over the `kid`
    pub fn to_public_key(&self) -> Result<PublicKey> {
        // Base64URL: 4 chars → 3 bytes
        const MAX_DECODED_JWK_N: usize = (MAX_JWK_N_SIZE * 3) / 4;
        const MAX_DECODED_JWK_E: usize = (MAX_JWK_E_SIZE * 3) / 4;

        match self.kty.as_deref() {
            Some("RSA") => {}
            Some(kty) => {
                return Err(Error::InvalidKey(format!(
                    "jwk: key type mismatch: expected RSA, found {kty}"
                )));
            }
            None => return Err(Error::InvalidKey("jwk: missing key type (kty)".into())),
        }
        if !self.is_rs256_signing_key() {
            return Err(Error::InvalidKey(format!(
                "jwk: not an RS256 signature key (use: {:?}, alg: {:?})",
                self.key_use, self.alg
            )));
        }

        let n = self
            .n
            .as_deref()
            .ok_or_else(|| Error::InvalidKey("jwk: rsa key missing n (modulus)".into()))?;
        let e = self
            .e
            .as_deref()
            .ok_or_else(|| Error::InvalidKey("jwk: rsa key missing e (exponent)".into()))?;

        if n.len() > MAX_JWK_N_SIZE {
            return Err(Error::InvalidKey(format!(
                "jwk: field 'n' too large: {} bytes (maximum: {MAX_JWK_N_SIZE} bytes)",
                n.len()
            )));
        }
        if e.len() > MAX_JWK_E_SIZE {
            return Err(Error::InvalidKey(format!(
                "jwk: field 'e' too large: {} bytes (maximum: {MAX_JWK_E_SIZE} bytes)",
                e.len()
            )));
        }

        let n_bytes = base64url::decode_bytes(n, MAX_DECODED_JWK_N)
            .map_err(|e| Error::InvalidKey(format!("jwk: failed to decode n: {e}")))?;
        let e_bytes = base64url::decode_bytes(e, MAX_DECODED_JWK_E)
            .map_err(|e| Error::InvalidKey(format!("jwk: failed to decode e: {e}")))?;

        let key = PublicKey::from_components(&n_bytes, &e_bytes)?;
        Ok(match &self.kid {
            Some(kid) => key.with_key_id(kid.clone()),
            None => key,
        })
    }
}
