//! Builder for `EncryptionKey` with preset key strengths.
//!
//! # Strength Profiles
//!
//! | Profile | RSA modulus | Use Case |
//! |---------|-------------|----------|
//! | `standard()` | 2048 bits | General use (default) |
//! | `strong()` | 3072 bits | Keys expected to live for years |
//! | `sensitive()` | 4096 bits | High-value, long-term keys |
//!
//! Larger moduli make key generation markedly slower; 4096-bit generation
//! can take seconds.
//!
//! # Example
//!
//! ```rust
//! use zest::prelude::*;
//!
//! // Use a preset profile
//! let key = EncryptionKeyBuilder::standard()
//!     .modulus_bits(1024)
//!     .try_generate()
//!     .expect("generation should succeed");
//!
//! // Restore an exported key
//! let restored = EncryptionKeyBuilder::new()
//!     .try_import(&key.export().expect("export should succeed"))
//!     .expect("import should succeed");
//! assert_eq!(restored.id(), key.id());
//! ```

use crate::core::error::ZestResult;
use crate::core::provider::{CryptoProvider, RustCrypto};
use crate::core::types::EncryptionKey;
use crate::core::version::V1;

/// Builder for generating or restoring an [`EncryptionKey`].
///
/// Carries the RSA modulus size and the crypto provider. The provider
/// defaults to [`RustCrypto`].
#[derive(Debug, Clone, Copy)]
pub struct EncryptionKeyBuilder<P: CryptoProvider = RustCrypto> {
    modulus_bits: usize,
    provider: P,
}

impl Default for EncryptionKeyBuilder<RustCrypto> {
    fn default() -> Self {
        Self::standard()
    }
}

impl EncryptionKeyBuilder<RustCrypto> {
    /// Creates a new builder with the standard profile.
    ///
    /// Equivalent to calling `EncryptionKeyBuilder::standard()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::standard()
    }

    /// Standard profile: 2048-bit modulus.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            modulus_bits: V1::DEFAULT_MODULUS_BITS,
            provider: RustCrypto,
        }
    }

    /// Strong profile: 3072-bit modulus.
    ///
    /// Use this for keys that must stay trustworthy for years.
    #[must_use]
    pub const fn strong() -> Self {
        Self {
            modulus_bits: 3072,
            provider: RustCrypto,
        }
    }

    /// Sensitive profile: 4096-bit modulus.
    ///
    /// Use this for high-value keys that are generated rarely.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            modulus_bits: 4096,
            provider: RustCrypto,
        }
    }
}

impl<P: CryptoProvider> EncryptionKeyBuilder<P> {
    /// Sets the RSA modulus size in bits.
    ///
    /// Values below 1024 are rejected when the key is generated.
    #[must_use]
    pub fn modulus_bits(mut self, modulus_bits: usize) -> Self {
        self.modulus_bits = modulus_bits;
        self
    }

    /// Replaces the crypto provider.
    #[must_use]
    pub fn provider<Q: CryptoProvider>(self, provider: Q) -> EncryptionKeyBuilder<Q> {
        EncryptionKeyBuilder {
            modulus_bits: self.modulus_bits,
            provider,
        }
    }

    /// Returns the configured modulus size in bits.
    #[must_use]
    pub const fn get_modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Generates a new key.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::InvalidKeyStrength` if the modulus is too small
    /// and `ZestError::KeyGeneration` if generation fails.
    pub fn try_generate(self) -> ZestResult<EncryptionKey<P>> {
        EncryptionKey::with_provider(self.provider, self.modulus_bits)
    }

    /// Restores a key from an export blob.
    ///
    /// The configured modulus size does not apply; the blob determines it.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Import` naming the layer that rejected the blob.
    pub fn try_import(self, exported: &str) -> ZestResult<EncryptionKey<P>> {
        EncryptionKey::from_export_with_provider(self.provider, exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ZestError;
    use crate::core::provider::fake::FakeProvider;

    #[test]
    fn test_builder_profiles() {
        assert_eq!(EncryptionKeyBuilder::standard().get_modulus_bits(), 2048);
        assert_eq!(EncryptionKeyBuilder::strong().get_modulus_bits(), 3072);
        assert_eq!(EncryptionKeyBuilder::sensitive().get_modulus_bits(), 4096);
    }

    #[test]
    fn test_builder_custom() {
        let builder = EncryptionKeyBuilder::new().modulus_bits(1536);
        assert_eq!(builder.get_modulus_bits(), 1536);
    }

    #[test]
    fn test_builder_default() {
        let default = EncryptionKeyBuilder::default();
        let standard = EncryptionKeyBuilder::standard();
        assert_eq!(default.get_modulus_bits(), standard.get_modulus_bits());
    }

    #[test]
    fn test_builder_with_provider() -> ZestResult<()> {
        let key = EncryptionKeyBuilder::strong()
            .provider(FakeProvider::seeded(51))
            .try_generate()?;

        let restored = EncryptionKeyBuilder::new()
            .provider(FakeProvider::seeded(52))
            .try_import(&key.export()?)?;
        assert_eq!(restored.id(), key.id());
        Ok(())
    }

    #[test]
    fn test_builder_generate() -> ZestResult<()> {
        let key = EncryptionKeyBuilder::standard()
            .modulus_bits(1024)
            .try_generate()?;
        assert_eq!(key.modulus_bits(), 1024);
        Ok(())
    }

    #[test]
    fn test_builder_rejects_weak_modulus() {
        let result = EncryptionKeyBuilder::new().modulus_bits(768).try_generate();
        assert!(matches!(result, Err(ZestError::InvalidKeyStrength(768))));
    }
}
