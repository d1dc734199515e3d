//! Key export and import.
//!
//! Export format:
//!
//! ```text
//! hex( A "." B "." hex(W1) "." hex(W2) )
//!
//! A = seal(W1, {"private":"<pem>","public":"<pem>"})
//! B = seal(W2, hex(secret))
//! ```
//!
//! `W1` and `W2` are one-time wrapping keys drawn per export and stored in
//! the blob itself. The wrapping is an encoding, not protection: anyone
//! holding the blob can restore the key, so the blob must be stored as
//! carefully as the key.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::core::codec::{decode_key_field, join_export_fields, split_export_fields, SealedBox};
use crate::core::error::{Layer, ZestError, ZestResult};
use crate::core::operations::wrap::{open, wrap_with_fresh_key};
use crate::core::provider::CryptoProvider;
use crate::core::types::{KeyMaterial, SymmetricSecret};

/// The keypair record sealed under the first wrapping key.
#[derive(Serialize)]
struct ExportedKeypair<'a> {
    private: &'a str,
    public: &'a str,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportedKeypair {
    private: String,
    public: String,
}

/// Serializes key material into a portable blob.
///
/// Two exports of the same key differ (fresh wrapping keys and IVs) but
/// import to the same key.
///
/// # Errors
///
/// Returns `ZestError::Export` naming the layer that failed.
pub(crate) fn export_key_material<P: CryptoProvider>(
    provider: &P,
    material: &KeyMaterial<P>,
) -> ZestResult<String> {
    let keypair_json = Zeroizing::new(
        serde_json::to_vec(&ExportedKeypair {
            private: &material.private_pem,
            public: &material.public_pem,
        })
        .map_err(|_| ZestError::Export(Layer::Structure))?,
    );

    let (keypair_key, sealed_keypair) = wrap_with_fresh_key(provider, &keypair_json)
        .map_err(|_| ZestError::Export(Layer::Symmetric))?;

    let secret_hex = material.secret.to_hex();
    let (secret_key, sealed_secret) = wrap_with_fresh_key(provider, secret_hex.as_bytes())
        .map_err(|_| ZestError::Export(Layer::Symmetric))?;

    let keypair_key_hex = Zeroizing::new(hex::encode(*keypair_key));
    let secret_key_hex = Zeroizing::new(hex::encode(*secret_key));

    let sealed_keypair = sealed_keypair.to_wire();
    let sealed_secret = sealed_secret.to_wire();
    let blob = Zeroizing::new(join_export_fields([
        sealed_keypair.as_str(),
        sealed_secret.as_str(),
        keypair_key_hex.as_str(),
        secret_key_hex.as_str(),
    ]));

    Ok(hex::encode(blob.as_bytes()))
}

/// Restores key material from a blob produced by [`export_key_material`].
///
/// # Errors
///
/// Returns `ZestError::Import` with:
/// - `Layer::Structure` for bad hex, a wrong field count or a bad record
/// - `Layer::Symmetric` when a wrapping key does not open its field
/// - `Layer::Asymmetric` when the keys fail to parse or do not match
pub(crate) fn import_key_material<P: CryptoProvider>(
    provider: &P,
    exported: &str,
) -> ZestResult<KeyMaterial<P>> {
    let blob = Zeroizing::new(
        hex::decode(exported.trim()).map_err(|_| ZestError::Import(Layer::Structure))?,
    );
    let blob = core::str::from_utf8(&blob).map_err(|_| ZestError::Import(Layer::Structure))?;

    let [keypair_field, secret_field, keypair_key_field, secret_key_field] =
        split_export_fields(blob).ok_or(ZestError::Import(Layer::Structure))?;

    let keypair_key = Zeroizing::new(
        decode_key_field(keypair_key_field).ok_or(ZestError::Import(Layer::Structure))?,
    );
    let secret_key = Zeroizing::new(
        decode_key_field(secret_key_field).ok_or(ZestError::Import(Layer::Structure))?,
    );
    let sealed_keypair =
        SealedBox::parse(keypair_field).ok_or(ZestError::Import(Layer::Structure))?;
    let sealed_secret =
        SealedBox::parse(secret_field).ok_or(ZestError::Import(Layer::Structure))?;

    let keypair_json = open(provider, &keypair_key, &sealed_keypair)
        .map_err(|_| ZestError::Import(Layer::Symmetric))?;
    let secret_hex = open(provider, &secret_key, &sealed_secret)
        .map_err(|_| ZestError::Import(Layer::Symmetric))?;

    let keypair: ImportedKeypair = serde_json::from_slice(&keypair_json)
        .map_err(|_| ZestError::Import(Layer::Structure))?;
    let secret_hex =
        core::str::from_utf8(&secret_hex).map_err(|_| ZestError::Import(Layer::Structure))?;
    let secret = SymmetricSecret::try_from(secret_hex)?;

    KeyMaterial::from_pem(
        provider,
        Zeroizing::new(keypair.private),
        keypair.public,
        secret,
    )
}
