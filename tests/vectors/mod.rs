//! Test vector types for Zest interoperability tests.
//!
//! The vectors were produced by an independent implementation of the v1
//! protocol, so passing them pins byte compatibility of ciphertexts, export
//! blobs, fingerprints and signatures.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for envelope decryption and signature verification.
#[derive(Debug, Deserialize)]
pub struct EnvelopeTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Fingerprint of the exported key
    pub id: String,
    /// Export blob holding the key that decrypts `ciphertext`
    pub exported: String,
    /// Hex ciphertext
    pub ciphertext: String,
    /// Expected plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Signed message
    pub message: Option<String>,
    /// Hex PSS signature over `message`
    pub signature: Option<String>,
    /// PEM public key of the exported key
    #[serde(rename = "public-key")]
    pub public_key: Option<String>,
}

/// Test vector for export blob import.
#[derive(Debug, Deserialize)]
pub struct ImportTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Export blob
    pub exported: String,
    /// Expected fingerprint (null for fail tests)
    pub id: Option<String>,
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
