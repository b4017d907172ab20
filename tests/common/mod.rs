//! Shared helpers for integration tests: RSA test keys and RS256 token signing
#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{KeyPair, RSA_PKCS1_SHA256, RsaKeyPair};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use idtoken::PublicKey;
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::EncodePrivateKey;
use rsa::traits::PublicKeyParts;
use serde_json::{Value, json};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

pub const CLIENT_ID: &str = "client1";
pub const ISSUER: &str = "accounts.google.com";
pub const HTTPS_ISSUER: &str = "https://accounts.google.com";

/// RSA key material in the encodings the tests need
pub struct TestKey {
    pub kid: String,
    pub pkcs8_der: Vec<u8>,
    pub pkcs1_der: Vec<u8>,
    pub n: Vec<u8>,
    pub e: Vec<u8>,
}

// RSA key generation is slow in debug builds, so every test binary shares these
static KEYS: LazyLock<Vec<TestKey>> =
    LazyLock::new(|| (1..=3).map(|i| generate_key(&format!("k{i}"))).collect());

fn generate_key(kid: &str) -> TestKey {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate RSA key");

    TestKey {
        kid: kid.to_string(),
        pkcs8_der: private_key
            .to_pkcs8_der()
            .expect("failed to serialize to PKCS#8")
            .as_bytes()
            .to_vec(),
        pkcs1_der: private_key
            .to_pkcs1_der()
            .expect("failed to serialize to PKCS#1")
            .as_bytes()
            .to_vec(),
        n: private_key.n().to_bytes_be(),
        e: private_key.e().to_bytes_be(),
    }
}

/// Test key `index` (0, 1 or 2)
pub fn key(index: usize) -> &'static TestKey {
    &KEYS[index]
}

impl TestKey {
    fn keypair(&self) -> RsaKeyPair {
        RsaKeyPair::from_pkcs8(&self.pkcs8_der).expect("failed to load PKCS#8 key")
    }

    /// Trusted public key (PKCS#1 DER as exported by aws-lc-rs)
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_der(self.keypair().public_key().as_ref())
            .expect("public key")
            .with_key_id(self.kid.clone())
    }

    /// JWK entry for this key
    pub fn jwk(&self) -> Value {
        json!({
            "kty": "RSA",
            "alg": "RS256",
            "use": "sig",
            "kid": self.kid,
            "n": URL_SAFE_NO_PAD.encode(&self.n),
            "e": URL_SAFE_NO_PAD.encode(&self.e),
        })
    }

    /// RS256 signature over `signing_input`, Base64URL-encoded
    pub fn sign(&self, signing_input: &str) -> String {
        let keypair = self.keypair();
        let rng = SystemRandom::new();
        let mut signature = vec![0u8; keypair.public_modulus_len()];
        keypair
            .sign(&RSA_PKCS1_SHA256, &rng, signing_input.as_bytes(), &mut signature)
            .expect("signing failed");
        URL_SAFE_NO_PAD.encode(&signature)
    }

    /// Compact RS256 token for the given payload
    pub fn token(&self, payload: &Value) -> String {
        let header = json!({"alg": "RS256", "kid": self.kid, "typ": "JWT"});
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        );
        let signature = self.sign(&signing_input);
        format!("{signing_input}.{signature}")
    }
}

/// JWKS document containing the given keys
pub fn jwks_document(keys: &[&TestKey]) -> String {
    json!({ "keys": keys.iter().map(|k| k.jwk()).collect::<Vec<_>>() }).to_string()
}

pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Claims of a valid token for [`CLIENT_ID`] expiring in an hour
pub fn valid_claims() -> Value {
    let now = now();
    json!({
        "iss": HTTPS_ISSUER,
        "aud": CLIENT_ID,
        "azp": CLIENT_ID,
        "sub": "110169484474386276334",
        "email": "jane@example.com",
        "email_verified": true,
        "iat": now,
        "exp": now + 3600,
    })
}

/// [`valid_claims`] with fields overridden (a `null` removes the field)
pub fn claims_with(overrides: Value) -> Value {
    let mut claims = valid_claims();
    let map = claims.as_object_mut().expect("claims are an object");
    for (name, value) in overrides.as_object().expect("overrides are an object") {
        if value.is_null() {
            map.remove(name);
        } else {
            map.insert(name.clone(), value.clone());
        }
    }
    claims
}
