//! Ergonomic layer for Zest.
//!
//! The prelude re-exports the types most programs need and adds
//! [`EncryptionKeyBuilder`] with preset key strengths.
//!
//! # Usage
//!
//! ```rust
//! use zest::prelude::*;
//! ```

mod builders;

pub use builders::EncryptionKeyBuilder;

// Re-export core types for convenience
pub use crate::core::error::{Layer, ZestError, ZestResult};
pub use crate::core::provider::{CryptoProvider, RustCrypto};
pub use crate::core::types::{EncryptionKey, Fingerprint, SymmetricSecret};
pub use crate::core::version::V1;
