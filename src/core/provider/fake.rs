//! Deterministic provider for protocol tests.
//!
//! Not cryptography. Randomness is a SHA-256 counter stream seeded at
//! construction, "RSA" keys are 32-byte tokens whose public and private halves
//! are equal, and the ciphers are keyed XOR streams with a short checksum so
//! that a wrong key is detected the way real padding checks detect it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::error::{ZestError, ZestResult};
use crate::core::provider::CryptoProvider;
use crate::core::version::V1;

const CHECK_LEN: usize = 4;
const PUBLIC_LABEL: &str = "FAKE PUBLIC ";
const PRIVATE_LABEL: &str = "FAKE PRIVATE ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FakeKey([u8; 32]);

#[derive(Debug, Clone)]
pub(crate) struct FakeProvider {
    seed: u64,
    counter: Arc<AtomicU64>,
}

impl FakeProvider {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            seed,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

fn keystream(key: &[u8], nonce: &[u8], len: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(len);
    let mut block: u32 = 0;
    while stream.len() < len {
        let mut hasher = Sha256::new();
        hasher.update(key);
        hasher.update(nonce);
        hasher.update(block.to_be_bytes());
        stream.extend_from_slice(&hasher.finalize());
        block += 1;
    }
    stream.truncate(len);
    stream
}

fn check(key: &[u8], data: &[u8]) -> [u8; CHECK_LEN] {
    let digest = Sha256::new().chain_update(key).chain_update(data).finalize();
    let mut out = [0u8; CHECK_LEN];
    out.copy_from_slice(&digest[..CHECK_LEN]);
    out
}

fn xor_in_place(data: &mut [u8], stream: &[u8]) {
    data.iter_mut().zip(stream).for_each(|(b, k)| *b ^= k);
}

fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let mut out = plaintext.to_vec();
    out.extend_from_slice(&check(key, plaintext));
    let stream = keystream(key, nonce, out.len());
    xor_in_place(&mut out, &stream);
    out
}

fn open(key: &[u8], nonce: &[u8], sealed: &[u8]) -> ZestResult<Vec<u8>> {
    if sealed.len() < CHECK_LEN {
        return Err(ZestError::CryptoError);
    }
    let mut out = sealed.to_vec();
    let stream = keystream(key, nonce, out.len());
    xor_in_place(&mut out, &stream);
    let tag = out.split_off(out.len() - CHECK_LEN);
    if tag != check(key, &out) {
        return Err(ZestError::CryptoError);
    }
    Ok(out)
}

fn parse_labelled(encoded: &str, label: &str) -> ZestResult<FakeKey> {
    let hex_part = encoded.strip_prefix(label).ok_or(ZestError::CryptoError)?;
    let mut key = [0u8; 32];
    hex::decode_to_slice(hex_part, &mut key).map_err(|_| ZestError::CryptoError)?;
    Ok(FakeKey(key))
}

impl CryptoProvider for FakeProvider {
    type PublicKey = FakeKey;
    type PrivateKey = FakeKey;

    fn generate_keypair(&self, _modulus_bits: usize) -> ZestResult<(FakeKey, FakeKey)> {
        let mut key = [0u8; 32];
        self.random_bytes(&mut key)
            .map_err(|_| ZestError::KeyGeneration)?;
        Ok((FakeKey(key), FakeKey(key)))
    }

    fn public_key_of(&self, private_key: &FakeKey) -> FakeKey {
        private_key.clone()
    }

    fn modulus_bits(&self, _public_key: &FakeKey) -> usize {
        V1::DEFAULT_MODULUS_BITS
    }

    fn public_encrypt(&self, public_key: &FakeKey, plaintext: &[u8]) -> ZestResult<Vec<u8>> {
        Ok(seal(&public_key.0, b"pke", plaintext))
    }

    fn private_decrypt(&self, private_key: &FakeKey, ciphertext: &[u8]) -> ZestResult<Vec<u8>> {
        open(&private_key.0, b"pke", ciphertext)
    }

    fn sign(&self, private_key: &FakeKey, message: &[u8]) -> ZestResult<Vec<u8>> {
        Ok(check(&private_key.0, message).to_vec())
    }

    fn verify(&self, public_key: &FakeKey, message: &[u8], signature: &[u8]) -> bool {
        check(&public_key.0, message).as_slice() == signature
    }

    fn symmetric_encrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        plaintext: &[u8],
    ) -> ZestResult<Vec<u8>> {
        Ok(seal(key, iv, plaintext))
    }

    fn symmetric_decrypt(
        &self,
        key: &[u8; V1::SYMMETRIC_KEY_SIZE],
        iv: &[u8; V1::IV_SIZE],
        ciphertext: &[u8],
    ) -> ZestResult<Vec<u8>> {
        open(key, iv, ciphertext)
    }

    fn random_bytes(&self, out: &mut [u8]) -> ZestResult<()> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let stream = keystream(&self.seed.to_be_bytes(), &n.to_be_bytes(), out.len());
        out.copy_from_slice(&stream);
        Ok(())
    }

    fn digest(&self, data: &[u8]) -> [u8; V1::DIGEST_SIZE] {
        Sha256::digest(data).into()
    }

    fn export_public_key(&self, public_key: &FakeKey) -> ZestResult<String> {
        Ok(format!("{PUBLIC_LABEL}{}", hex::encode(public_key.0)))
    }

    fn export_private_key(&self, private_key: &FakeKey) -> ZestResult<Zeroizing<String>> {
        Ok(Zeroizing::new(format!(
            "{PRIVATE_LABEL}{}",
            hex::encode(private_key.0)
        )))
    }

    fn import_public_key(&self, encoded: &str) -> ZestResult<FakeKey> {
        parse_labelled(encoded, PUBLIC_LABEL)
    }

    fn import_private_key(&self, encoded: &str) -> ZestResult<FakeKey> {
        parse_labelled(encoded, PRIVATE_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() -> ZestResult<()> {
        let a = FakeProvider::seeded(7);
        let b = FakeProvider::seeded(7);

        let mut x = [0u8; 20];
        let mut y = [0u8; 20];
        a.random_bytes(&mut x)?;
        b.random_bytes(&mut y)?;
        assert_eq!(x, y);

        // The counter advances per call
        a.random_bytes(&mut x)?;
        assert_ne!(x, y);
        Ok(())
    }

    #[test]
    fn test_wrong_key_detected() -> ZestResult<()> {
        let provider = FakeProvider::seeded(1);
        let sealed = provider.symmetric_encrypt(&[1u8; 32], &[2u8; 16], b"payload")?;
        assert!(provider
            .symmetric_decrypt(&[9u8; 32], &[2u8; 16], &sealed)
            .is_err());
        Ok(())
    }
}
