//! Trusted RSA public keys for signature verification

use crate::error::{Error, Result};
use crate::utils::der::rsa_spki_from_n_e;
use std::sync::Arc;

/// An RSA public key trusted to sign identity tokens
///
/// Holds DER bytes, either a PKCS#1 `RSAPublicKey` or an X.509
/// `SubjectPublicKeyInfo`; the verifier accepts both encodings. The key id is
/// informational only and never used for key selection: every trusted key is
/// tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    der: Arc<[u8]>,
    key_id: Option<String>,
}

impl PublicKey {
    /// Create a key from DER-encoded bytes
    pub fn from_der(der: impl AsRef<[u8]>) -> Result<Self> {
        let der = der.as_ref();
        if der.is_empty() {
            return Err(Error::InvalidKey("empty DER key".into()));
        }
        Ok(Self {
            der: der.into(),
            key_id: None,
        })
    }

    /// Create a key from big-endian modulus (n) and public exponent (e) bytes
    pub fn from_components(n: &[u8], e: &[u8]) -> Result<Self> {
        let der = rsa_spki_from_n_e(n, e)?;
        Ok(Self {
            der: der.into(),
            key_id: None,
        })
    }

    /// Attach a key id (`kid`)
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Key id, if known
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}
