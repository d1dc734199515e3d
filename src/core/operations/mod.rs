//! Protocol operations.
//!
//! - [`envelope`] - two-layer hybrid encryption
//! - [`export`] - export blob encoding and decoding
//! - [`fingerprint`] - key fingerprint computation
//! - [`wrap`] - symmetric sealing with fresh IVs and wrapping keys

pub mod envelope;
pub mod export;
pub mod fingerprint;
pub mod wrap;
