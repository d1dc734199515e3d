//! RustCrypto-backed provider.
//!
//! - RSA key generation, OAEP (SHA-256) and PSS (SHA-256) via `rsa`
//! - PKCS#1 PEM encoding via `rsa::pkcs1`; public keys also parse from
//!   SPKI PEM via `rsa::pkcs8`
//! - AES-256-CBC with PKCS#7 padding via `aes` + `cbc`
//! - SHA-256 via `sha2`
//! - Randomness from the operating system via `rand_core::OsRng`
//!
//! # Security Warning
//!
//! The `rsa` crate is affected by [RUSTSEC-2023-0071] (Marvin Attack), a
//! timing side channel in PKCS#1 v1.5 decryption. OAEP decryption shares the
//! vulnerable modular exponentiation, so do not expose `decrypt` as a remote
//! oracle with measurable timing.
//!
//! [RUSTSEC-2023-0071]: https://rustsec.org/advisories/RUSTSEC-2023-0071

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand_core::{OsRng, RngCore};
use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::error::{ZestError, ZestResult};
use crate::core::provider::CryptoProvider;
use crate::core::version::V1;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Production provider built on the RustCrypto crates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RustCrypto;

impl RustCrypto {
    /// Creates the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Largest PSS salt the modulus allows: `emLen - hLen - 2`.
///
/// Signatures are produced at this length. Verification accepts any salt
/// from zero up to it.
fn max_pss_salt_len(modulus_bits: usize) -> ZestResult<usize> {
    let em_bits = modulus_bits.saturating_sub(1);
    let em_len = em_bits.div_ceil(8);
    em_len
        .checked_sub(V1::DIGEST_SIZE + 2)
        .ok_or(ZestError::CryptoError)
}

impl CryptoProvider for RustCrypto {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;

    fn generate_keypair(&self, modulus_bits: usize) -> ZestResult<(RsaPrivateKey, RsaPublicKey)> {
        let private_key =
            RsaPrivateKey::new(&mut OsRng, modulus_bits).map_err(|_| ZestError::KeyGeneration)?;
        let public_key = private_key.to_public_key();
        Ok((private_key, public_key))
    }

    fn public_key_of(&self, private_key: &RsaPrivateKey) -> RsaPublicKey {
        private_key.to_public_key()
    }

    fn modulus_bits(&self, public_key: &RsaPublicKey) -> usize {
        public_key.n().bits()
    }

    fn public_encrypt(&self, public_key: &RsaPublicKey, plaintext: &[u8]) -> ZestResult<Vec<u8>> {
        public_key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|_| ZestError::CryptoError)
    }

    fn private_decrypt(&self, private_key: &RsaPrivateKey, ciphertext: &[u8]) -> ZestResult<Vec<u8>> {
        private_key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| ZestError::CryptoError)
    }

    fn sign(&self, private_key: &RsaPrivateKey, message: &[u8]) -> ZestResult<Vec<u8>> {
        let salt_len = max_pss_salt_len(private_key.n().bits())?;
        let digest = Sha256::digest(message);
        private_key
            .sign_with_rng(&mut OsRng, Pss::new_with_salt::<Sha256>(salt_len), &digest)
            .map_err(|_| ZestError::CryptoError)
    }

    fn verify(&self, public_key: &RsaPublicKey, message: &[u8], signature: &[u8]) -> bool {
        let Ok(max_salt_len) = max_pss_salt_len(public_key.n().bits()) else {
            return false;
        };
        let digest = Sha256::digest(message);

        // Any salt length is valid PSS. Try the two common ones first.
        let preferred = [max_salt_len, V1::DIGEST_SIZE.min(max_salt_len)];
        let remaining = (0..=max_salt_len)
            .rev()
            .filter(|salt_len| !preferred.contains(salt_len));
        preferred.into_iter().chain(remaining).any(|salt_len| {
            public_key
                .verify(Pss::new_with_salt::<Sha256>(salt_len), &digest, signature)
                .is_ok()
        })
    }

    fn symmetric_encrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        plaintext: &[u8],
    ) -> ZestResult<Vec<u8>> {
        let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| ZestError::CryptoError)?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn symmetric_decrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        ciphertext: &[u8],
    ) -> ZestResult<Vec<u8>> {
        let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| ZestError::CryptoError)?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| ZestError::CryptoError)
    }

    fn random_bytes(&self, out: &mut [u8]) -> ZestResult<()> {
        OsRng
            .try_fill_bytes(out)
            .map_err(|_| ZestError::CryptoError)
    }

    fn digest(&self, data: &[u8]) -> [u8; V1::DIGEST_SIZE] {
        Sha256::digest(data).into()
    }

    fn export_public_key(&self, public_key: &RsaPublicKey) -> ZestResult<String> {
        public_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|_| ZestError::CryptoError)
    }

    fn export_private_key(&self, private_key: &RsaPrivateKey) -> ZestResult<Zeroizing<String>> {
        private_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|_| ZestError::CryptoError)
    }

    fn import_public_key(&self, encoded: &str) -> ZestResult<RsaPublicKey> {
        RsaPublicKey::from_pkcs1_pem(encoded)
            .or_else(|_| RsaPublicKey::from_public_key_pem(encoded))
            .map_err(|_| ZestError::CryptoError)
    }

    fn import_private_key(&self, encoded: &str) -> ZestResult<RsaPrivateKey> {
        RsaPrivateKey::from_pkcs1_pem(encoded).map_err(|_| ZestError::CryptoError)
    }
}
