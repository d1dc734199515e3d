//! Hybrid-encryption key container.
//!
//! An [`EncryptionKey`] bundles an RSA keypair with a persistent 256-bit AES
//! secret and exposes envelope encryption, signing, a short key fingerprint
//! and a portable export format for the key material itself.
//!
//! # Quick Start
//!
//! ```rust
//! use zest::EncryptionKey;
//!
//! // 2048 bits is the default; smaller keys keep this example fast
//! let key = EncryptionKey::generate(1024)?;
//!
//! let ciphertext = key.encrypt("Moniker Zest Encryption Test")?;
//! assert_eq!(key.decrypt(&ciphertext)?, "Moniker Zest Encryption Test");
//!
//! // Fingerprints survive export and import
//! let blob = key.export()?;
//! let restored = EncryptionKey::from_export(&blob)?;
//! assert_eq!(restored.id(), key.id());
//! # Ok::<(), zest::ZestError>(())
//! ```
//!
//! # Protocol
//!
//! | Operation | Construction |
//! |-----------|--------------|
//! | `encrypt` | AES-256-CBC under a one-time session key, the session key under RSA-OAEP (SHA-256), the resulting record under the persistent secret |
//! | `sign` | RSA-PSS (SHA-256, maximum salt length), hex-encoded |
//! | `id` | first 16 hex characters of a SHA-256 over the public key PEM and the secret |
//! | `export` | keypair and secret each sealed under a one-time wrapping key, stored beside it |
//!
//! All ciphertexts and blobs are lowercase hex. Parsing accepts either case.
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! zest = { version = "0.1" }  # with the prelude (default)
//! zest = { version = "0.1", default-features = false }  # core only
//! ```
//!
//! # Security
//!
//! - Key material is zeroized on drop
//! - Debug output redacts sensitive key material
//! - Constant-time comparison for the symmetric secret
//! - No unsafe code
//!
//! An export blob contains the keys that unwrap it. Treat it exactly like
//! the key it encodes.
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{Layer, ZestError, ZestResult};
pub use core::provider::{CryptoProvider, RustCrypto};
pub use core::types::{EncryptionKey, Fingerprint, SymmetricSecret};
pub use core::version::V1;
