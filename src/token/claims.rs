use miniserde::Deserialize;

/// Payload fields of an ID token as they appear on the wire
///
/// Every field is optional at the JSON level. Unknown fields are ignored and a
/// present field of the wrong JSON type fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Payload {
    #[serde(rename = "iss")]
    pub issuer: Option<String>,
    pub scope: Option<String>,
    #[serde(rename = "aud")]
    pub audience: Option<String>,
    #[serde(rename = "exp")]
    pub expires_at: Option<i64>,
    #[serde(rename = "iat")]
    pub issued_at: Option<i64>,
    #[serde(rename = "typ")]
    pub token_type: Option<String>,

    #[serde(rename = "sub")]
    pub subject: Option<String>,
    #[serde(rename = "hd")]
    pub hosted_domain: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub locale: Option<String>,
}

/// Decoded claims of an ID token, plus the compact string they came from
///
/// A `ClaimSet` is only produced by [`decode`](crate::decode) (or by a
/// [`ProviderVerifier`](crate::ProviderVerifier) built on top of it) and
/// cannot be modified afterwards. Holding one says nothing about validity:
/// run it through [`validate`](crate::validate) before trusting any field.
///
/// Identity fields (`iss`, `aud`, `exp`, `iat`) read as their zero value
/// (`""` or `0`) when absent. Profile fields are exposed as `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSet {
    payload: Payload,
    source: String,
}

impl ClaimSet {
    pub(crate) fn new(payload: Payload, source: String) -> Self {
        Self { payload, source }
    }

    /// Issuer (`iss`)
    pub fn issuer(&self) -> &str {
        self.payload.issuer.as_deref().unwrap_or_default()
    }

    /// Audience (`aud`), the client ID the token was issued to
    pub fn audience(&self) -> &str {
        self.payload.audience.as_deref().unwrap_or_default()
    }

    /// Expiration time (`exp`) in seconds since the Unix epoch
    pub fn expires_at(&self) -> i64 {
        self.payload.expires_at.unwrap_or_default()
    }

    /// Issued-at time (`iat`) in seconds since the Unix epoch
    pub fn issued_at(&self) -> i64 {
        self.payload.issued_at.unwrap_or_default()
    }

    /// Token type (`typ`)
    pub fn token_type(&self) -> Option<&str> {
        self.payload.token_type.as_deref()
    }

    /// Granted scope (`scope`)
    pub fn scope(&self) -> Option<&str> {
        self.payload.scope.as_deref()
    }

    /// Subject (`sub`), the stable account identifier
    pub fn subject(&self) -> Option<&str> {
        self.payload.subject.as_deref()
    }

    /// Hosted domain (`hd`), or `""` for accounts outside an organization
    pub fn hosted_domain(&self) -> &str {
        self.payload.hosted_domain.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> Option<&str> {
        self.payload.email.as_deref()
    }

    pub fn email_verified(&self) -> bool {
        self.payload.email_verified.unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.payload.name.as_deref()
    }

    pub fn picture(&self) -> Option<&str> {
        self.payload.picture.as_deref()
    }

    pub fn given_name(&self) -> Option<&str> {
        self.payload.given_name.as_deref()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.payload.family_name.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.payload.locale.as_deref()
    }

    /// The original compact token, byte-for-byte as it was decoded
    ///
    /// Signature verification runs over this string: re-serializing the
    /// claims would not reproduce the signed bytes.
    pub fn source(&self) -> &str {
        &self.source
    }
}
