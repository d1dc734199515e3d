//! Core Zest types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`version`] - Protocol version marker and fixed constants
//! - [`error`] - Error types for key operations
//! - [`codec`] - Wire-format helpers (sealed boxes, export fields)
//! - [`provider`] - Pluggable cryptographic primitives
//! - [`operations`] - Envelope encryption, export/import, fingerprints
//! - [`types`] - `EncryptionKey` and its supporting types

pub mod codec;
pub mod error;
pub mod operations;
pub mod provider;
pub mod types;
pub mod version;

// Re-export commonly used items
pub use error::{Layer, ZestError, ZestResult};
pub use version::V1;
