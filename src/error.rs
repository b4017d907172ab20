//! Errors for idtoken

use thiserror::Error;

/// Token decoding, verification and validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed: {0}")]
    InvalidSignature(String),

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now})")]
    ExpiredToken { expired_at: i64, now: i64 },

    #[error("Invalid token audience: expected one of {expected:?}, found '{found}'")]
    InvalidAudience { expected: Vec<String>, found: String },

    #[error("Invalid token issuer: '{0}'")]
    InvalidIssuer(String),

    #[error("Invalid hosted domain: expected '{expected}', found '{found}'")]
    InvalidHostedDomain { expected: String, found: String },

    // ============================================================================
    // Key and Configuration Errors
    // ============================================================================
    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

/// Result type alias for idtoken operations
pub type Result<T> = std::result::Result<T, Error>;
