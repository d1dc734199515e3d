//! Two-layer envelope encryption.
//!
//! Encryption:
//! 1. Draw a one-time 32-byte session key
//! 2. Seal the session key with the RSA public key (OAEP/SHA-256)
//! 3. Encrypt the payload under the session key (AES-256-CBC)
//! 4. Serialize both as a JSON record and encrypt the record under the
//!    persistent secret (AES-256-CBC)
//! 5. Emit `hex(iv) || hex(ciphertext)` of the outer layer
//!
//! The record layout is part of the wire contract:
//!
//! ```text
//! {"aesSecure":"<hex rsa ciphertext>","payload":{"_i":"<hex iv>","e":"<hex ciphertext>"}}
//! ```
//!
//! Only the fixed-size session key ever meets RSA, so payloads of any length
//! are supported.

use serde::{Deserialize, Serialize};

use crate::core::codec::SealedBox;
use crate::core::error::{Layer, ZestError, ZestResult};
use crate::core::operations::wrap::{open, seal};
use crate::core::provider::CryptoProvider;
use crate::core::types::SymmetricSecret;
use crate::core::version::V1;

/// The inner record encrypted under the persistent secret.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnvelopeRecord {
    #[serde(rename = "aesSecure")]
    sealed_session_key: String,
    payload: SealedRecord,
}

/// JSON form of a sealed box inside a record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SealedRecord {
    #[serde(rename = "_i")]
    iv: String,
    #[serde(rename = "e")]
    ciphertext: String,
}

impl From<&SealedBox> for SealedRecord {
    fn from(sealed: &SealedBox) -> Self {
        Self {
            iv: hex::encode(sealed.iv()),
            ciphertext: hex::encode(sealed.ciphertext()),
        }
    }
}

impl TryFrom<&SealedRecord> for SealedBox {
    type Error = ZestError;

    fn try_from(record: &SealedRecord) -> Result<Self, Self::Error> {
        let iv: [u8; V1::IV_SIZE] = decode_record_hex(&record.iv)?
            .try_into()
            .map_err(|_| ZestError::Decryption(Layer::Structure))?;
        let ciphertext = decode_record_hex(&record.ciphertext)?;
        Ok(Self::new(iv, ciphertext))
    }
}

/// Decodes a hex field of a record.
///
/// Records are only ever written in lowercase, so any uppercase digit means
/// the record was altered.
fn decode_record_hex(field: &str) -> ZestResult<Vec<u8>> {
    if field.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(ZestError::Decryption(Layer::Structure));
    }
    hex::decode(field).map_err(|_| ZestError::Decryption(Layer::Structure))
}

/// Encrypts `plaintext` for the holder of `public_key` and `secret`.
///
/// # Errors
///
/// Returns `ZestError::Encryption` naming the layer whose primitive failed.
pub fn encrypt_envelope<P: CryptoProvider>(
    provider: &P,
    public_key: &P::PublicKey,
    secret: &SymmetricSecret,
    plaintext: &[u8],
) -> ZestResult<String> {
    let session_key = provider
        .generate_symmetric_key()
        .map_err(|_| ZestError::Encryption(Layer::Symmetric))?;

    let sealed_session_key = provider
        .public_encrypt(public_key, session_key.as_slice())
        .map_err(|_| ZestError::Encryption(Layer::Asymmetric))?;

    let payload = seal(provider, &session_key, plaintext)
        .map_err(|_| ZestError::Encryption(Layer::Symmetric))?;

    let record = EnvelopeRecord {
        sealed_session_key: hex::encode(sealed_session_key),
        payload: SealedRecord::from(&payload),
    };
    let record_json =
        serde_json::to_vec(&record).map_err(|_| ZestError::Encryption(Layer::Structure))?;

    let outer = seal(provider, secret.as_bytes(), &record_json)
        .map_err(|_| ZestError::Encryption(Layer::Symmetric))?;

    Ok(outer.to_wire())
}

/// Decrypts a ciphertext produced by [`encrypt_envelope`].
///
/// All-or-nothing: no partial plaintext is ever returned.
///
/// # Errors
///
/// Returns `ZestError::Decryption` with:
/// - `Layer::Structure` for malformed hex, a short input or a bad record
/// - `Layer::Symmetric` when the persistent secret or the session key does
///   not open its layer
/// - `Layer::Asymmetric` when the private key does not open the session key
pub fn decrypt_envelope<P: CryptoProvider>(
    provider: &P,
    private_key: &P::PrivateKey,
    secret: &SymmetricSecret,
    ciphertext: &str,
) -> ZestResult<Vec<u8>> {
    let outer = SealedBox::parse(ciphertext).ok_or(ZestError::Decryption(Layer::Structure))?;

    let record_json = open(provider, secret.as_bytes(), &outer)
        .map_err(|_| ZestError::Decryption(Layer::Symmetric))?;

    let record: EnvelopeRecord = serde_json::from_slice(&record_json)
        .map_err(|_| ZestError::Decryption(Layer::Structure))?;

    let sealed_session_key = decode_record_hex(&record.sealed_session_key)?;

    let session_bytes = zeroize::Zeroizing::new(
        provider
            .private_decrypt(private_key, &sealed_session_key)
            .map_err(|_| ZestError::Decryption(Layer::Asymmetric))?,
    );
    let session_key: &[u8; V1::SYMMETRIC_KEY_SIZE] = session_bytes
        .as_slice()
        .try_into()
        .map_err(|_| ZestError::Decryption(Layer::Asymmetric))?;

    let payload = SealedBox::try_from(&record.payload)?;
    let plaintext = open(provider, session_key, &payload)
        .map_err(|_| ZestError::Decryption(Layer::Symmetric))?;

    Ok(plaintext.to_vec())
}
