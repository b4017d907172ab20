//! Validate a Google ID token from the command line
//!
//! ```text
//! cargo run --example verify -- <token> <jwks.json> <client-id> [hosted-domain]
//! ```
//!
//! The key set is the document published at Google's `jwks_uri`, saved to a
//! file beforehand. Set `RUST_LOG=verify=debug` for details.

use idtoken::*;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [token, jwks_path, client_id, rest @ ..] = args.as_slice() else {
        eprintln!("usage: verify <token> <jwks.json> <client-id> [hosted-domain]");
        return ExitCode::from(2);
    };
    let hosted_domain = rest.first().map(String::as_str).unwrap_or_default();

    match run(token, jwks_path, client_id, hosted_domain) {
        Ok(claims) => {
            tracing::info!(
                subject = claims.subject().unwrap_or("unknown"),
                email = claims.email().unwrap_or("unknown"),
                "ID token accepted"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!("ID token rejected: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(token: &str, jwks_path: &str, client_id: &str, hosted_domain: &str) -> Result<ClaimSet> {
    let document = std::fs::read_to_string(jwks_path).map_err(|e| {
        Error::ConfigurationInvalid(format!("cannot read key set {jwks_path}: {e}"))
    })?;
    let keys = JwkSet::from_json(&document)?.public_keys()?;
    tracing::debug!(keys = keys.len(), "loaded trusted keys");

    let verifier = KeyVerifier::new(
        TrustParameters::new(client_id)
            .hosted_domain(hosted_domain)
            .keys(keys),
    );

    tracing::debug!("Validating ID token");
    verifier.verify(token)
}
