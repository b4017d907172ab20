//! # idtoken - Google ID token validation
//!
//! Decodes, verifies and validates OpenID Connect ID tokens issued by Google
//! Sign-In, for server-side handlers that authenticate a bearer token sent by
//! a client.
//!
//! ## Validation Flow
//!
//! ```text
//! compact token (header.payload.signature)
//!     │ decode()
//!     ▼
//! ClaimSet (claims + original token; not trusted yet)
//!     │ validate(&claims, &TrustParameters)
//!     │   1. exp strictly in the future
//!     │   2. aud == expected client ID
//!     │   3. iss is accounts.google.com or https://accounts.google.com
//!     │   4. non-empty hd == expected hosted domain
//!     │   5. RS256 signature verifies with one of the trusted keys
//!     ▼
//! Ok(())
//! ```
//!
//! Every step is synchronous and free of I/O. Obtaining the provider's key
//! set is the caller's job; [`JwkSet`] turns a fetched JWKS document into
//! [`PublicKey`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use idtoken::*;
//!
//! let keys = JwkSet::from_json(&jwks_document)?.public_keys()?;
//! let trust = TrustParameters::new("1234.apps.googleusercontent.com").keys(keys);
//!
//! let claims = decode(&bearer)?;
//! validate(&claims, &trust)?;
//! println!("signed in: {:?}", claims.email());
//! ```
//!
//! ## Verification Strategies
//!
//! Handlers that want to swap key sources depend on [`TokenVerifier`]:
//! [`KeyVerifier`] runs the pipeline above with caller-supplied keys, while
//! [`DelegatedVerifier`] trusts a provider-specific [`ProviderVerifier`] for
//! signature and standard claims and only enforces a client-ID allow-list.
//!
//! ## Hosted Domain
//!
//! An empty expected hosted domain does not mean "any domain": tokens carrying
//! an `hd` claim are then rejected, and only consumer accounts (no `hd`) pass.
//!
//! ## Nonces
//!
//! Nonce checking for replay protection is not performed here and must be done
//! by the caller.

mod error;
mod limits;

// Internal modules
pub(crate) mod utils;

pub mod jwks;
pub mod keys;
pub mod signature;
pub mod token;
pub mod validator;
pub mod verifier;

// Public Interface
pub use error::{Error, Result};
pub use jwks::{Jwk, JwkSet};
pub use keys::PublicKey;
pub use signature::verify_signature;
pub use token::{ClaimSet, decode};
pub use validator::{ISSUERS, TrustParameters, validate, validate_at};
pub use verifier::{DelegatedVerifier, KeyVerifier, ProviderVerifier, TokenVerifier};
