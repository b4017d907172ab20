//! Claim policy for ID tokens verified against directly supplied keys

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::signature::verify_signature;
use crate::token::ClaimSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Issuer values the identity provider puts in `iss`
pub const ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Caller-supplied expectations a token is validated against
///
/// # Example
/// ```ignore
/// let trust = TrustParameters::new("1234.apps.googleusercontent.com")
///     .hosted_domain("example.com")
///     .keys(jwks.public_keys()?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrustParameters {
    audience: String,
    hosted_domain: String,
    keys: Vec<PublicKey>,
}

impl TrustParameters {
    /// Expect tokens issued to the given client ID
    pub fn new(audience: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            ..Default::default()
        }
    }

    /// Expect tokens for accounts of the given hosted domain
    ///
    /// Leaving this empty does not lift the restriction: a token that carries
    /// any `hd` claim is then rejected. Only tokens without `hd` pass.
    pub fn hosted_domain(mut self, domain: impl Into<String>) -> Self {
        self.hosted_domain = domain.into();
        self
    }

    /// Trust an additional signing key; keys are tried in insertion order
    pub fn key(mut self, key: PublicKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Trust additional signing keys, appended in iteration order
    pub fn keys(mut self, keys: impl IntoIterator<Item = PublicKey>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn expected_audience(&self) -> &str {
        &self.audience
    }

    pub fn expected_hosted_domain(&self) -> &str {
        &self.hosted_domain
    }

    pub fn trusted_keys(&self) -> &[PublicKey] {
        &self.keys
    }
}

/// Validate decoded claims against `trust` at the current time
///
/// See [`validate_at`] for the checks and their order.
pub fn validate(claims: &ClaimSet, trust: &TrustParameters) -> Result<()> {
    validate_at(claims, trust, current_timestamp())
}

/// Validate decoded claims against `trust` as of `now` (seconds since the Unix epoch)
///
/// Checks run in this order and stop at the first failure:
/// 1. `exp` is strictly after `now`
/// 2. `aud` equals the expected client ID exactly
/// 3. `iss` is one of [`ISSUERS`]
/// 4. a non-empty `hd` equals the expected hosted domain
/// 5. the signature of the retained compact token verifies with a trusted key
pub fn validate_at(claims: &ClaimSet, trust: &TrustParameters, now: i64) -> Result<()> {
    if claims.expires_at() <= now {
        return Err(Error::ExpiredToken {
            expired_at: claims.expires_at(),
            now,
        });
    }

    if claims.audience() != trust.audience {
        return Err(Error::InvalidAudience {
            expected: vec![trust.audience.clone()],
            found: claims.audience().to_string(),
        });
    }

    if !ISSUERS.iter().any(|issuer| *issuer == claims.issuer()) {
        return Err(Error::InvalidIssuer(claims.issuer().to_string()));
    }

    let hosted_domain = claims.hosted_domain();
    if !hosted_domain.is_empty() && hosted_domain != trust.hosted_domain {
        return Err(Error::InvalidHostedDomain {
            expected: trust.hosted_domain.clone(),
            found: hosted_domain.to_string(),
        });
    }

    verify_signature(claims.source(), &trust.keys)
}

/// Get current Unix timestamp
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::decode;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    const NOW: i64 = 1_700_000_000;

    // Unsigned tokens: every check before the signature can be exercised without keys
    fn claims(payload: &str) -> ClaimSet {
        let token = format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("not a signature")
        );
        decode(&token).unwrap()
    }

    fn trust() -> TrustParameters {
        TrustParameters::new("client1").key(PublicKey::from_der([0x30u8, 0x00]).unwrap())
    }

    fn payload(iss: &str, aud: &str, exp: i64, hd: Option<&str>) -> String {
        match hd {
            Some(hd) => format!(r#"{{"iss":"{iss}","aud":"{aud}","exp":{exp},"hd":"{hd}"}}"#),
            None => format!(r#"{{"iss":"{iss}","aud":"{aud}","exp":{exp}}}"#),
        }
    }

    #[test]
    fn test_expiry_is_exclusive() {
        let at_now = claims(&payload("accounts.google.com", "client1", NOW, None));
        assert_eq!(
            validate_at(&at_now, &trust(), NOW),
            Err(Error::ExpiredToken {
                expired_at: NOW,
                now: NOW
            })
        );

        let past = claims(&payload("accounts.google.com", "client1", NOW - 1, None));
        assert!(matches!(
            validate_at(&past, &trust(), NOW),
            Err(Error::ExpiredToken { .. })
        ));

        // One second of validity left reaches the signature check
        let future = claims(&payload("accounts.google.com", "client1", NOW + 1, None));
        assert!(matches!(
            validate_at(&future, &trust(), NOW),
            Err(Error::MalformedToken(_) | Error::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let c = claims(r#"{"iss":"accounts.google.com","aud":"client1"}"#);
        assert!(matches!(
            validate_at(&c, &trust(), NOW),
            Err(Error::ExpiredToken { expired_at: 0, .. })
        ));
    }

    #[test]
    fn test_audience_exact_match() {
        for aud in ["client2", "CLIENT1", "client1 ", ""] {
            let c = claims(&payload("accounts.google.com", aud, NOW + 60, None));
            assert_eq!(
                validate_at(&c, &trust(), NOW),
                Err(Error::InvalidAudience {
                    expected: vec!["client1".to_string()],
                    found: aud.to_string()
                })
            );
        }
    }

    #[test]
    fn test_issuer_must_be_canonical() {
        for iss in [
            "http://accounts.google.com",
            "https://accounts.google.com/",
            "accounts.google.com.evil.example",
            "Accounts.google.com",
            "",
        ] {
            let c = claims(&payload(iss, "client1", NOW + 60, None));
            assert_eq!(
                validate_at(&c, &trust(), NOW),
                Err(Error::InvalidIssuer(iss.to_string()))
            );
        }
    }

    #[test]
    fn test_hosted_domain_mismatch() {
        let c = claims(&payload(
            "accounts.google.com",
            "client1",
            NOW + 60,
            Some("other.com"),
        ));
        let trust = trust().hosted_domain("example.com");
        assert!(matches!(
            validate_at(&c, &trust, NOW),
            Err(Error::InvalidHostedDomain { .. })
        ));
    }

    #[test]
    fn test_hosted_domain_rejected_when_none_expected() {
        let c = claims(&payload(
            "https://accounts.google.com",
            "client1",
            NOW + 60,
            Some("example.com"),
        ));
        assert_eq!(
            validate_at(&c, &trust(), NOW),
            Err(Error::InvalidHostedDomain {
                expected: String::new(),
                found: "example.com".to_string()
            })
        );
    }

    #[test]
    fn test_empty_hosted_domain_skips_check() {
        let c = claims(&payload("accounts.google.com", "client1", NOW + 60, Some("")));
        let trust = trust().hosted_domain("example.com");
        // Passes the domain check and fails only on the placeholder key
        assert!(matches!(
            validate_at(&c, &trust, NOW),
            Err(Error::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_check_order() {
        // Everything is wrong: expiry is reported first
        let c = claims(&payload("evil", "client2", NOW, Some("other.com")));
        assert!(matches!(
            validate_at(&c, &trust(), NOW),
            Err(Error::ExpiredToken { .. })
        ));

        // Then audience before issuer
        let c = claims(&payload("evil", "client2", NOW + 60, Some("other.com")));
        assert!(matches!(
            validate_at(&c, &trust(), NOW),
            Err(Error::InvalidAudience { .. })
        ));

        // Then issuer before hosted domain
        let c = claims(&payload("evil", "client1", NOW + 60, Some("other.com")));
        assert!(matches!(
            validate_at(&c, &trust(), NOW),
            Err(Error::InvalidIssuer(_))
        ));
    }

    #[test]
    fn test_signature_checked_last_without_keys() {
        let c = claims(&payload("accounts.google.com", "client1", NOW + 60, None));
        assert!(matches!(
            validate_at(&c, &TrustParameters::new("client1"), NOW),
            Err(Error::ConfigurationInvalid(_))
        ));
    }

    #[test]
    fn test_validate_uses_wall_clock() {
        let c = claims(&payload("accounts.google.com", "client1", 1, None));
        assert!(matches!(
            validate(&c, &trust()),
            Err(Error::ExpiredToken { .. })
        ));
    }

    #[test]
    fn test_trust_parameters_builder() {
        let k1 = PublicKey::from_der([1u8]).unwrap().with_key_id("k1");
        let k2 = PublicKey::from_der([2u8]).unwrap().with_key_id("k2");
        let k3 = PublicKey::from_der([3u8]).unwrap().with_key_id("k3");

        let trust = TrustParameters::new("client1")
            .hosted_domain("example.com")
            .key(k1)
            .keys([k2, k3]);

        assert_eq!(trust.expected_audience(), "client1");
        assert_eq!(trust.expected_hosted_domain(), "example.com");
        let ids: Vec<_> = trust.trusted_keys().iter().map(|k| k.key_id()).collect();
        assert_eq!(ids, [Some("k1"), Some("k2"), Some("k3")]);
    }
}
