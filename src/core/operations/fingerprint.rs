//! Key fingerprint computation.
//!
//! The fingerprint is a two-level SHA-256 hash:
//!
//! ```text
//! inner = hex(SHA-256(hex(secret) || ".mnkr"))
//! id    = hex(SHA-256(json_string(public_pem) || inner))[..16]
//! ```
//!
//! `json_string` is the JSON string literal of the PEM text, quotes and `\n`
//! escapes included. The suffix separates the two hashing layers.

use crate::core::provider::CryptoProvider;
use crate::core::types::{Fingerprint, SymmetricSecret};
use crate::core::version::V1;

/// Computes the fingerprint of a public key (in its portable textual form)
/// and a persistent secret.
///
/// Deterministic: equal inputs always yield equal fingerprints, which is what
/// makes an exported and re-imported key keep its id.
#[must_use]
pub fn compute_fingerprint<P: CryptoProvider>(
    provider: &P,
    public_pem: &str,
    secret: &SymmetricSecret,
) -> Fingerprint {
    let mut inner_input = secret.to_hex();
    inner_input.push_str(V1::FINGERPRINT_SUFFIX);
    let inner = hex::encode(provider.digest(inner_input.as_bytes()));

    let mut outer_input = serde_json::Value::from(public_pem).to_string();
    outer_input.push_str(&inner);

    Fingerprint::from_digest(&provider.digest(outer_input.as_bytes()))
}
