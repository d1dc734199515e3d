//! `Fingerprint` - the 16-character identifier of an `EncryptionKey`.
//!
//! Format: 16 lowercase hex characters (the first 8 bytes of a SHA-256 hash).

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use crate::core::error::ZestError;
use crate::core::version::V1;

const FINGERPRINT_BYTES: usize = V1::FINGERPRINT_LEN / 2;

/// A key fingerprint.
///
/// Identifies a key pair for equality checks and lookups. Its collision bound
/// is that of a 64-bit value, so it is not a security boundary.
///
/// # Example
///
/// ```rust
/// use zest::Fingerprint;
///
/// let id: Fingerprint = "e65cd05e0714f9e1".parse()?;
/// assert_eq!(id.to_string(), "e65cd05e0714f9e1");
/// # Ok::<(), zest::ZestError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    id: [u8; FINGERPRINT_BYTES],
}

impl Fingerprint {
    /// Creates a fingerprint from a full digest, keeping its leading bytes.
    #[must_use]
    pub(crate) fn from_digest(digest: &[u8; V1::DIGEST_SIZE]) -> Self {
        let mut id = [0u8; FINGERPRINT_BYTES];
        id.copy_from_slice(&digest[..FINGERPRINT_BYTES]);
        Self { id }
    }

    /// Returns the raw fingerprint bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_BYTES] {
        &self.id
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.id))
    }
}

impl Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fingerprint")
            .field(&hex::encode(self.id))
            .finish()
    }
}

impl TryFrom<&str> for Fingerprint {
    type Error = ZestError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let mut id = [0u8; FINGERPRINT_BYTES];
        hex::decode_to_slice(encoded, &mut id).map_err(|_| ZestError::InvalidFingerprint)?;
        Ok(Self { id })
    }
}

impl FromStr for Fingerprint {
    type Err = ZestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl PartialEq<str> for Fingerprint {
    fn eq(&self, other: &str) -> bool {
        Self::try_from(other).is_ok_and(|parsed| parsed == *self)
    }
}

impl PartialEq<&str> for Fingerprint {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ID: &str = "e65cd05e0714f9e1";

    #[test]
    fn test_from_digest_truncates() {
        let mut digest = [0u8; 32];
        digest[..8].copy_from_slice(&[0xe6, 0x5c, 0xd0, 0x5e, 0x07, 0x14, 0xf9, 0xe1]);
        digest[8..].fill(0xff);

        let id = Fingerprint::from_digest(&digest);
        assert_eq!(id.to_string(), TEST_ID);
    }

    #[test]
    fn test_roundtrip() -> Result<(), ZestError> {
        let id = Fingerprint::try_from(TEST_ID)?;
        assert_eq!(id.to_string(), TEST_ID);
        assert_eq!(id.to_string().len(), V1::FINGERPRINT_LEN);
        Ok(())
    }

    #[test]
    fn test_compare_with_str() -> Result<(), ZestError> {
        let id: Fingerprint = TEST_ID.parse()?;
        assert_eq!(id, TEST_ID);
        assert_eq!(id, "E65CD05E0714F9E1");
        assert_ne!(id, "0000000000000000");
        assert_ne!(id, "not hex");
        Ok(())
    }

    #[test]
    fn test_invalid_length() {
        let result = Fingerprint::try_from("e65cd05e");
        assert!(matches!(result, Err(ZestError::InvalidFingerprint)));

        let result = Fingerprint::try_from("e65cd05e0714f9e1aa");
        assert!(matches!(result, Err(ZestError::InvalidFingerprint)));
    }

    #[test]
    fn test_invalid_hex() {
        let result = Fingerprint::try_from("g65cd05e0714f9e1");
        assert!(matches!(result, Err(ZestError::InvalidFingerprint)));
    }

    #[test]
    fn test_debug() -> Result<(), ZestError> {
        let id = Fingerprint::try_from(TEST_ID)?;
        assert_eq!(format!("{id:?}"), "Fingerprint(\"e65cd05e0714f9e1\")");
        Ok(())
    }
}
