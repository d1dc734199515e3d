//! `SymmetricSecret` - the persistent AES key of an `EncryptionKey`.
//!
//! Serialized form (inside export blobs and the fingerprint): lowercase hex.

use core::fmt::{self, Debug};

use zeroize::Zeroize;

use crate::core::error::{Layer, ZestError};
use crate::core::version::V1;

/// A 256-bit symmetric secret.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SymmetricSecret {
    key: [u8; V1::SYMMETRIC_KEY_SIZE],
}

impl SymmetricSecret {
    /// Creates a secret from raw key bytes.
    #[must_use]
    pub const fn new(key: [u8; V1::SYMMETRIC_KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; V1::SYMMETRIC_KEY_SIZE] {
        &self.key
    }

    /// Lowercase hex encoding of the key.
    #[must_use]
    pub fn to_hex(&self) -> zeroize::Zeroizing<String> {
        zeroize::Zeroizing::new(hex::encode(self.key))
    }
}

impl From<[u8; V1::SYMMETRIC_KEY_SIZE]> for SymmetricSecret {
    fn from(key: [u8; V1::SYMMETRIC_KEY_SIZE]) -> Self {
        Self::new(key)
    }
}

impl AsRef<[u8]> for SymmetricSecret {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl TryFrom<&str> for SymmetricSecret {
    type Error = ZestError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let mut key = [0u8; V1::SYMMETRIC_KEY_SIZE];
        hex::decode_to_slice(encoded, &mut key).map_err(|_| ZestError::Import(Layer::Structure))?;
        Ok(Self::new(key))
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SymmetricSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricSecret")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for SymmetricSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for SymmetricSecret {}
