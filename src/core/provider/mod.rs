//! Cryptographic primitive providers.
//!
//! The envelope protocol never touches RSA or AES directly. It composes the
//! operations of a [`CryptoProvider`], which makes the primitives swappable
//! and lets the protocol be tested against a deterministic fake.
//!
//! [`RustCrypto`] is the production provider, built on the `rsa`, `aes`,
//! `cbc` and `sha2` crates.

mod rust_crypto;

#[cfg(test)]
pub(crate) mod fake;

pub use rust_crypto::RustCrypto;

use zeroize::Zeroizing;

use crate::core::error::ZestResult;
use crate::core::version::V1;

/// The primitive operations the envelope protocol is built from.
///
/// Implementations report failures as [`ZestError::CryptoError`] (or
/// [`ZestError::KeyGeneration`] from [`generate_keypair`]); the protocol maps
/// them to the layer-specific error for the operation in progress.
///
/// [`ZestError::CryptoError`]: crate::core::error::ZestError::CryptoError
/// [`ZestError::KeyGeneration`]: crate::core::error::ZestError::KeyGeneration
/// [`generate_keypair`]: CryptoProvider::generate_keypair
pub trait CryptoProvider: Clone + Send + Sync + 'static {
    /// Public half of an asymmetric keypair.
    type PublicKey: Clone + PartialEq + Send + Sync;

    /// Private half of an asymmetric keypair.
    type PrivateKey: Clone + Send + Sync;

    /// Generates a keypair with the given modulus size.
    fn generate_keypair(
        &self,
        modulus_bits: usize,
    ) -> ZestResult<(Self::PrivateKey, Self::PublicKey)>;

    /// Derives the public half of a private key.
    fn public_key_of(&self, private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Returns the modulus size of a public key in bits.
    fn modulus_bits(&self, public_key: &Self::PublicKey) -> usize;

    /// Encrypts a short message (a session key) with OAEP/SHA-256.
    fn public_encrypt(&self, public_key: &Self::PublicKey, plaintext: &[u8])
        -> ZestResult<Vec<u8>>;

    /// Decrypts an OAEP/SHA-256 ciphertext.
    fn private_decrypt(
        &self,
        private_key: &Self::PrivateKey,
        ciphertext: &[u8],
    ) -> ZestResult<Vec<u8>>;

    /// Signs a message with PSS over its SHA-256 digest.
    fn sign(&self, private_key: &Self::PrivateKey, message: &[u8]) -> ZestResult<Vec<u8>>;

    /// Verifies a PSS signature. A mismatch is `false`, never an error.
    fn verify(&self, public_key: &Self::PublicKey, message: &[u8], signature: &[u8]) -> bool;

    /// Encrypts with AES-256-CBC and PKCS#7 padding.
    fn symmetric_encrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        plaintext: &[u8],
    ) -> ZestResult<Vec<u8>>;

    /// Decrypts AES-256-CBC and strips PKCS#7 padding.
    fn symmetric_decrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        ciphertext: &[u8],
    ) -> ZestResult<Vec<u8>>;

    /// Fills `out` with cryptographically secure random bytes.
    fn random_bytes(&self, out: &mut [u8]) -> ZestResult<()>;

    /// SHA-256 digest.
    fn digest(&self, data: &[u8]) -> [u8; V1::DIGEST_SIZE];

    /// Encodes a public key in its portable textual form (PKCS#1 PEM).
    fn export_public_key(&self, public_key: &Self::PublicKey) -> ZestResult<String>;

    /// Encodes a private key in its portable textual form (PKCS#1 PEM).
    fn export_private_key(&self, private_key: &Self::PrivateKey)
        -> ZestResult<Zeroizing<String>>;

    /// Parses a public key from its portable textual form, or from SPKI PEM.
    fn import_public_key(&self, encoded: &str) -> ZestResult<Self::PublicKey>;

    /// Parses a private key from its portable textual form.
    fn import_private_key(&self, encoded: &str) -> ZestResult<Self::PrivateKey>;

    /// Draws a fresh symmetric key.
    fn generate_symmetric_key(&self) -> ZestResult<Zeroizing<[u8; V1::SYMMETRIC_KEY_SIZE]>> {
        let mut key = Zeroizing::new([0u8; V1::SYMMETRIC_KEY_SIZE]);
        self.random_bytes(&mut key[..])?;
        Ok(key)
    }

    /// Draws a fresh initialization vector.
    fn generate_iv(&self) -> ZestResult<[u8; V1::IV_SIZE]> {
        let mut iv = [0u8; V1::IV_SIZE];
        self.random_bytes(&mut iv)?;
        Ok(iv)
    }
}
