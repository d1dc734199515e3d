//! Error types for Zest operations.
//!
//! This module provides a unified error type for all key operations.
//! Failures name the protocol layer that rejected the input so callers can
//! tell a wrong key from corrupted data, but messages stay intentionally
//! vague to avoid leaking information that could aid attacks.

use core::fmt::{self, Display};

use thiserror::Error;

/// The protocol layer at which an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// RSA encryption, decryption or key parsing.
    Asymmetric,
    /// AES-CBC encryption or decryption (including padding checks).
    Symmetric,
    /// Hex, JSON or field layout of the wire format.
    Structure,
}

impl Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asymmetric => f.write_str("asymmetric layer"),
            Self::Symmetric => f.write_str("symmetric layer"),
            Self::Structure => f.write_str("structure"),
        }
    }
}

/// Errors that can occur when working with an `EncryptionKey`.
#[derive(Debug, Error)]
pub enum ZestError {
    /// Keypair or secret generation failed. Fatal for the instance.
    #[error("Key generation failed")]
    KeyGeneration,

    /// The requested RSA modulus size is below the protocol minimum.
    #[error("Unsupported key strength: {0} bits")]
    InvalidKeyStrength(usize),

    /// Envelope encryption failed.
    #[error("Encryption failed at {0}")]
    Encryption(Layer),

    /// Envelope decryption failed (wrong key, corrupted data, etc.).
    #[error("Decryption failed at {0}")]
    Decryption(Layer),

    /// Serializing the key material failed.
    #[error("Export failed at {0}")]
    Export(Layer),

    /// The export blob could not be restored.
    #[error("Import failed at {0}")]
    Import(Layer),

    /// Producing a signature failed.
    #[error("Signing failed")]
    Signing,

    /// The signature is not valid hex.
    #[error("Malformed signature")]
    MalformedSignature,

    /// A supplied public key could not be parsed.
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// A fingerprint string is not 16 hex characters.
    #[error("Invalid fingerprint")]
    InvalidFingerprint,

    /// Generic primitive failure reported by a crypto provider.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for Zest operations.
pub type ZestResult<T> = Result<T, ZestError>;
