//! Size limit constants for input validation

/// Maximum length for a compact token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// RS256 signatures are the modulus length: 256 bytes for 2048-bit keys, 1024 for 8192-bit keys
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

// ============================================================================
// Key material limits
// ============================================================================

/// Maximum RSA modulus size in bytes (65536 bits)
pub(crate) const MAX_RSA_MODULUS_SIZE: usize = 8192;

/// Maximum size for a JWK set document (512KB)
pub(crate) const MAX_JWKS_DOCUMENT_SIZE: usize = 512 * 1024;

/// Maximum number of keys in a JWK set
pub(crate) const MAX_JWK_SET_SIZE: usize = 100;

/// Maximum size for Base64URL-encoded RSA modulus (n) field (12KB)
pub(crate) const MAX_JWK_N_SIZE: usize = 12 * 1024;

/// Maximum size for Base64URL-encoded RSA exponent (e) field
pub(crate) const MAX_JWK_E_SIZE: usize = 64;
