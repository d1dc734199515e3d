//! Zest type implementations.
//!
//! - [`EncryptionKey`] - RSA keypair plus persistent AES secret
//! - [`Fingerprint`] - 16-character key identifier
//! - [`SymmetricSecret`] - the persistent AES-256 secret

mod encryption_key;
mod fingerprint;
mod keypair;
mod secret;

pub use encryption_key::EncryptionKey;
pub use fingerprint::Fingerprint;
pub(crate) use keypair::KeyMaterial;
pub use secret::SymmetricSecret;
