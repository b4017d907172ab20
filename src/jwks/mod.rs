//! JSON Web Key Set (JWKS) parsing
//!
//! Turns a key set document the caller has already obtained (for example from
//! the provider's `jwks_uri`) into trusted [`PublicKey`]s. Fetching and
//! caching the document is left to the caller.

mod jwk;

pub use jwk::Jwk;

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::limits::{MAX_JWK_SET_SIZE, MAX_JWKS_DOCUMENT_SIZE};
use miniserde::Deserialize;

/// JSON Web Key Set (JWKS)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JwkSet {
    keys: Vec<Jwk>,
}

impl JwkSet {
    /// Parse a JWKS document (`{"keys":[...]}`)
    pub fn from_json(document: &str) -> Result<Self> {
        if document.len() > MAX_JWKS_DOCUMENT_SIZE {
            return Err(Error::InvalidKey(format!(
                "jwks: document too large: {} bytes (maximum: {MAX_JWKS_DOCUMENT_SIZE} bytes)",
                document.len()
            )));
        }

        let set: JwkSet = miniserde::json::from_str(document)
            .map_err(|_| Error::InvalidKey("jwks: invalid jwks json".into()))?;

        if set.keys.len() > MAX_JWK_SET_SIZE {
            return Err(Error::InvalidKey(format!(
                "jwks: too many keys: {} (maximum: {MAX_JWK_SET_SIZE})",
                set.keys.len()
            )));
        }

        Ok(set)
    }

    /// All keys in document order
    pub fn keys(&self) -> &[Jwk] {
        &self.keys
    }

    /// Find a key by key ID (`kid`)
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.key_id() == Some(kid))
    }

    /// Convert every RS256 signature key into a trusted [`PublicKey`], in document order
    ///
    /// Keys of other types or uses are skipped. An RS256 key with unusable
    /// components fails the whole conversion so a broken key set is not
    /// silently narrowed.
    pub fn public_keys(&self) -> Result<Vec<PublicKey>> {
        self.keys
            .iter()
            .filter(|k| k.is_rs256_signing_key())
            .map(Jwk::to_public_key)
            .collect()
    }
}
