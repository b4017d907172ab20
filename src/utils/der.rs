//! DER encoding of RSA public keys from raw modulus/exponent bytes
//!
//! Uses the RustCrypto `spki` and `der` crates to build an X.509
//! `SubjectPublicKeyInfo`, which aws-lc-rs accepts for RSA verification.

use crate::error::{Error, Result};
use crate::limits::MAX_RSA_MODULUS_SIZE;
use der::{Encode, Sequence, asn1::UintRef};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

/// rsaEncryption (PKCS#1)
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

fn key_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::InvalidKey(format!("{operation}: {details}"))
}

/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Build a DER `SubjectPublicKeyInfo` from big-endian modulus (n) and exponent (e)
pub(crate) fn rsa_spki_from_n_e(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    use der::asn1::BitString;

    if n.is_empty() || e.is_empty() {
        return Err(key_error("rsa key missing n or e", "empty component"));
    }

    if n.len() > MAX_RSA_MODULUS_SIZE {
        return Err(key_error(
            "RSA modulus too large",
            format!("{} bytes (maximum: {MAX_RSA_MODULUS_SIZE} bytes)", n.len()),
        ));
    }

    // UintRef strips redundant leading zeros and adds one when the high bit is set
    let rsa_pubkey = RsaPublicKey {
        modulus: UintRef::new(n).map_err(|e| key_error("failed to encode RSA modulus", e))?,
        public_exponent: UintRef::new(e)
            .map_err(|e| key_error("failed to encode RSA exponent", e))?,
    };

    let rsa_pubkey_der = rsa_pubkey
        .to_der()
        .map_err(|e| key_error("failed to encode RSA public key", e))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION_OID,
            parameters: Some(der::asn1::AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, rsa_pubkey_der)
            .map_err(|e| key_error("failed to create bit string", e))?,
    };

    spki.to_der()
        .map_err(|e| key_error("failed to encode SPKI", e))
}
