//! `EncryptionKey` - an RSA keypair and a persistent AES secret used as one
//! unit.
//!
//! # Example
//!
//! ```rust
//! use zest::EncryptionKey;
//!
//! let key = EncryptionKey::generate(1024)?;
//!
//! let ciphertext = key.encrypt("Moniker Zest Encryption Test")?;
//! assert_eq!(key.decrypt(&ciphertext)?, "Moniker Zest Encryption Test");
//!
//! let signature = key.sign("Test Message")?;
//! assert!(key.verify("Test Message", &signature)?);
//!
//! let restored = EncryptionKey::from_export(&key.export()?)?;
//! assert_eq!(restored.id(), key.id());
//! # Ok::<(), zest::ZestError>(())
//! ```

use core::fmt::{self, Debug};

use crate::core::error::{Layer, ZestError, ZestResult};
use crate::core::operations::envelope::{decrypt_envelope, encrypt_envelope};
use crate::core::operations::export::{export_key_material, import_key_material};
use crate::core::operations::fingerprint::compute_fingerprint;
use crate::core::provider::{CryptoProvider, RustCrypto};
use crate::core::types::{Fingerprint, KeyMaterial};
use crate::core::version::V1;

/// An RSA keypair bundled with a 256-bit symmetric secret.
///
/// Every instance always holds complete key material: it is either freshly
/// generated or restored from an export blob. Reassignment through
/// [`create_key`](Self::create_key) or [`import`](Self::import) replaces the
/// keypair, the secret and the fingerprint together.
///
/// Reads take `&self` and reassignment takes `&mut self`. To share an
/// instance between threads and still reassign it, wrap it in a `RwLock`.
///
/// # Security
///
/// - The secret and the private key PEM are zeroized on drop
/// - Debug output redacts key material
/// - The export blob carries its own wrapping keys and must be stored as
///   carefully as the key itself
#[derive(Clone)]
pub struct EncryptionKey<P: CryptoProvider = RustCrypto> {
    provider: P,
    material: KeyMaterial<P>,
    id: Fingerprint,
}

// =============================================================================
// Construction with the default provider
// =============================================================================

impl EncryptionKey<RustCrypto> {
    /// Generates a new key with the default modulus size (2048 bits).
    ///
    /// # Errors
    ///
    /// Returns `ZestError::KeyGeneration` if generation fails.
    pub fn new() -> ZestResult<Self> {
        Self::generate(V1::DEFAULT_MODULUS_BITS)
    }

    /// Generates a new key with the given RSA modulus size.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::InvalidKeyStrength` below 1024 bits and
    /// `ZestError::KeyGeneration` if generation fails.
    pub fn generate(modulus_bits: usize) -> ZestResult<Self> {
        Self::with_provider(RustCrypto, modulus_bits)
    }

    /// Restores a key from an export blob.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Import` naming the layer that rejected the blob.
    pub fn from_export(exported: &str) -> ZestResult<Self> {
        Self::from_export_with_provider(RustCrypto, exported)
    }

    /// Restores a key from `exported` if given, otherwise generates a new one
    /// with the default modulus size. An empty blob counts as absent.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`from_export`](Self::from_export) or
    /// [`new`](Self::new).
    pub fn load(exported: Option<&str>) -> ZestResult<Self> {
        match exported {
            Some(blob) if !blob.is_empty() => Self::from_export(blob),
            _ => Self::new(),
        }
    }
}

// =============================================================================
// Provider-generic operations
// =============================================================================

impl<P: CryptoProvider> EncryptionKey<P> {
    /// Generates a new key using `provider`.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::InvalidKeyStrength` below 1024 bits and
    /// `ZestError::KeyGeneration` if generation fails.
    pub fn with_provider(provider: P, modulus_bits: usize) -> ZestResult<Self> {
        check_strength(modulus_bits)?;
        let material = KeyMaterial::generate(&provider, modulus_bits)?;
        let key = Self::assemble(provider, material);
        tracing::debug!(id = %key.id, modulus_bits, "generated key material");
        Ok(key)
    }

    /// Restores a key from an export blob using `provider`.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Import` naming the layer that rejected the blob.
    pub fn from_export_with_provider(provider: P, exported: &str) -> ZestResult<Self> {
        let material = import_key_material(&provider, exported)?;
        let key = Self::assemble(provider, material);
        tracing::debug!(id = %key.id, "imported key material");
        Ok(key)
    }

    fn assemble(provider: P, material: KeyMaterial<P>) -> Self {
        let id = compute_fingerprint(&provider, &material.public_pem, &material.secret);
        Self {
            provider,
            material,
            id,
        }
    }

    /// Replaces the keypair and the secret with freshly generated ones.
    ///
    /// On error the current key material is kept.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::InvalidKeyStrength` below 1024 bits and
    /// `ZestError::KeyGeneration` if generation fails.
    pub fn create_key(&mut self, modulus_bits: usize) -> ZestResult<()> {
        check_strength(modulus_bits)?;
        let material = KeyMaterial::generate(&self.provider, modulus_bits)?;
        self.replace_material(material);
        tracing::debug!(id = %self.id, modulus_bits, "generated key material");
        Ok(())
    }

    /// Replaces the key material with the content of an export blob.
    ///
    /// The instance is unchanged unless the whole blob is restored.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Import` naming the layer that rejected the blob.
    pub fn import(&mut self, exported: &str) -> ZestResult<()> {
        let material = import_key_material(&self.provider, exported)?;
        self.replace_material(material);
        tracing::debug!(id = %self.id, "imported key material");
        Ok(())
    }

    fn replace_material(&mut self, material: KeyMaterial<P>) {
        self.id = compute_fingerprint(&self.provider, &material.public_pem, &material.secret);
        self.material = material;
    }

    /// Serializes the key material into a hex blob for [`import`](Self::import).
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Export` naming the layer that failed.
    pub fn export(&self) -> ZestResult<String> {
        export_key_material(&self.provider, &self.material)
    }

    /// Encrypts `plaintext` into a lowercase hex string.
    ///
    /// Every call draws a new session key and new IVs, so equal plaintexts
    /// never produce equal ciphertexts.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Encryption` naming the layer that failed.
    pub fn encrypt(&self, plaintext: impl AsRef<[u8]>) -> ZestResult<String> {
        encrypt_envelope(
            &self.provider,
            &self.material.public_key,
            &self.material.secret,
            plaintext.as_ref(),
        )
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt) into text.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Decryption` naming the layer that rejected the
    /// input. A payload that is not valid UTF-8 is `Layer::Symmetric`; use
    /// [`decrypt_bytes`](Self::decrypt_bytes) for binary data.
    pub fn decrypt(&self, ciphertext: &str) -> ZestResult<String> {
        String::from_utf8(self.decrypt_bytes(ciphertext)?)
            .map_err(|_| ZestError::Decryption(Layer::Symmetric))
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt) into raw
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Decryption` naming the layer that rejected the
    /// input.
    pub fn decrypt_bytes(&self, ciphertext: &str) -> ZestResult<Vec<u8>> {
        decrypt_envelope(
            &self.provider,
            &self.material.private_key,
            &self.material.secret,
            ciphertext,
        )
    }

    /// Signs `message` and returns the hex-encoded signature.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Signing` if the signature cannot be produced.
    pub fn sign(&self, message: impl AsRef<[u8]>) -> ZestResult<String> {
        let signature = self
            .provider
            .sign(&self.material.private_key, message.as_ref())
            .map_err(|_| ZestError::Signing)?;
        Ok(hex::encode(signature))
    }

    /// Verifies a hex signature over `message` against this key.
    ///
    /// A signature that does not match returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::MalformedSignature` if `signature` is not hex.
    pub fn verify(&self, message: impl AsRef<[u8]>, signature: &str) -> ZestResult<bool> {
        let signature = decode_signature(signature)?;
        Ok(self
            .provider
            .verify(&self.material.public_key, message.as_ref(), &signature))
    }

    /// Verifies a hex signature over `message` against a PEM public key.
    ///
    /// Both PKCS#1 (`RSA PUBLIC KEY`) and SPKI (`PUBLIC KEY`) PEM are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::MalformedSignature` if `signature` is not hex and
    /// `ZestError::InvalidPublicKey` if `public_key_pem` does not parse.
    pub fn verify_with_public_key(
        &self,
        message: impl AsRef<[u8]>,
        signature: &str,
        public_key_pem: &str,
    ) -> ZestResult<bool> {
        let signature = decode_signature(signature)?;
        let public_key = self
            .provider
            .import_public_key(public_key_pem)
            .map_err(|_| ZestError::InvalidPublicKey)?;
        Ok(self
            .provider
            .verify(&public_key, message.as_ref(), &signature))
    }

    /// Returns the key fingerprint.
    #[must_use]
    pub const fn id(&self) -> &Fingerprint {
        &self.id
    }

    /// Returns the public key in PKCS#1 PEM form.
    #[must_use]
    pub fn public_key_pem(&self) -> &str {
        &self.material.public_pem
    }

    /// Returns the RSA modulus size in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.provider.modulus_bits(&self.material.public_key)
    }

    /// Returns the crypto provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

fn check_strength(modulus_bits: usize) -> ZestResult<()> {
    if modulus_bits < V1::MIN_MODULUS_BITS {
        return Err(ZestError::InvalidKeyStrength(modulus_bits));
    }
    Ok(())
}

fn decode_signature(signature: &str) -> ZestResult<Vec<u8>> {
    hex::decode(signature).map_err(|_| ZestError::MalformedSignature)
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl<P: CryptoProvider> Debug for EncryptionKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("id", &self.id)
            .field("material", &"[REDACTED]")
            .finish()
    }
}
