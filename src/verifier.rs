//! Interchangeable token verification strategies
//!
//! [`TokenVerifier`] is the single capability request handlers depend on.
//! Two implementations are provided and selected by configuration:
//!
//! - [`KeyVerifier`] decodes the token and runs the full claim policy of
//!   [`validate`](crate::validate) against keys supplied by the caller.
//! - [`DelegatedVerifier`] hands decoding, signature and standard claim checks
//!   to a provider-specific [`ProviderVerifier`] (for example one backed by
//!   the issuer's published key set) and only enforces the client-ID
//!   allow-list itself.
//!
//! Neither implementation checks a nonce; replay protection belongs to the caller.

use crate::error::{Error, Result};
use crate::token::{ClaimSet, decode};
use crate::validator::{TrustParameters, validate};

/// Verify a compact ID token and return its claims
pub trait TokenVerifier {
    fn verify(&self, token: &str) -> Result<ClaimSet>;
}

/// Provider-supplied verification used by [`DelegatedVerifier`]
///
/// Implementations must decode the token, verify its signature and enforce
/// the provider's standard claims (issuer, expiry) before returning.
pub trait ProviderVerifier {
    fn verify(&self, token: &str) -> Result<ClaimSet>;
}

impl<P: ProviderVerifier + ?Sized> ProviderVerifier for &P {
    fn verify(&self, token: &str) -> Result<ClaimSet> {
        (**self).verify(token)
    }
}

impl<P: ProviderVerifier + ?Sized> ProviderVerifier for Box<P> {
    fn verify(&self, token: &str) -> Result<ClaimSet> {
        (**self).verify(token)
    }
}

/// Verification against directly supplied keys
#[derive(Debug, Clone)]
pub struct KeyVerifier {
    trust: TrustParameters,
}

impl KeyVerifier {
    pub fn new(trust: TrustParameters) -> Self {
        Self { trust }
    }

    pub fn trust(&self) -> &TrustParameters {
        &self.trust
    }
}

impl TokenVerifier for KeyVerifier {
    fn verify(&self, token: &str) -> Result<ClaimSet> {
        let claims = decode(token)?;
        validate(&claims, &self.trust)?;
        Ok(claims)
    }
}

/// Verification delegated to a provider, followed by a client-ID allow-list check
#[derive(Debug, Clone)]
pub struct DelegatedVerifier<P> {
    provider: P,
    client_ids: Vec<String>,
}

impl<P: ProviderVerifier> DelegatedVerifier<P> {
    /// Accept tokens the provider verifies and whose audience is one of `client_ids`
    ///
    /// An empty allow-list rejects every token.
    pub fn new<I, S>(provider: P, client_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            provider,
            client_ids: client_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn client_ids(&self) -> &[String] {
        &self.client_ids
    }
}

impl<P: ProviderVerifier> TokenVerifier for DelegatedVerifier<P> {
    fn verify(&self, token: &str) -> Result<ClaimSet> {
        let claims = self.provider.verify(token)?;

        if self.client_ids.iter().any(|id| id == claims.audience()) {
            Ok(claims)
        } else {
            Err(Error::InvalidAudience {
                expected: self.client_ids.clone(),
                found: claims.audience().to_string(),
            })
        }
    }
}
