//! Protocol version marker and the constants it fixes.
//!
//! The padding schemes, key sizes and fingerprint suffix are part of the wire
//! contract rather than configuration. Any change to them needs a new version
//! marker here and an explicit version tag in the wire format.

use core::fmt::{self, Display};

/// Protocol version 1.
///
/// - RSA with OAEP (SHA-256) for session keys
/// - RSA with PSS (SHA-256, maximum salt length) for signatures
/// - AES-256-CBC with PKCS#7 padding and a random 16-byte IV per call
/// - SHA-256 fingerprints truncated to 16 hex characters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct V1;

impl V1 {
    /// The numeric protocol version.
    pub const VERSION: u8 = 1;

    /// Size of every symmetric key (persistent secret, session and wrapping keys).
    pub const SYMMETRIC_KEY_SIZE: usize = 32;

    /// Size of the AES-CBC initialization vector.
    pub const IV_SIZE: usize = 16;

    /// Length of the hex-encoded IV that prefixes every sealed value.
    pub const IV_HEX_LEN: usize = Self::IV_SIZE * 2;

    /// Length of a fingerprint in hex characters.
    pub const FINGERPRINT_LEN: usize = 16;

    /// Domain separator appended to the secret before the inner fingerprint hash.
    pub const FINGERPRINT_SUFFIX: &'static str = ".mnkr";

    /// Separator between the four fields of an export blob.
    pub const EXPORT_SEPARATOR: char = '.';

    /// Default RSA modulus size in bits.
    pub const DEFAULT_MODULUS_BITS: usize = 2048;

    /// Smallest RSA modulus that leaves room for OAEP-SHA-256 and PSS-SHA-256.
    pub const MIN_MODULUS_BITS: usize = 1024;

    /// SHA-256 output size, which sizes both OAEP and PSS overhead.
    pub const DIGEST_SIZE: usize = 32;
}

impl Display for V1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", Self::VERSION)
    }
}
