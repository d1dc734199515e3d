//! Symmetric sealing and key wrapping.
//!
//! Every AES layer in the protocol goes through [`seal`] and [`open`]: a
//! fresh random IV per call, AES-256-CBC with PKCS#7 padding, and the result
//! carried as a [`SealedBox`]. [`wrap_with_fresh_key`] additionally draws a
//! one-time wrapping key, which is how export protects each piece of key
//! material.
//!
//! Failures surface as [`ZestError::CryptoError`]; callers map them to the
//! layer-specific error of the operation in progress.
//!
//! [`ZestError::CryptoError`]: crate::core::error::ZestError::CryptoError

use zeroize::Zeroizing;

use crate::core::codec::SealedBox;
use crate::core::error::ZestResult;
use crate::core::provider::CryptoProvider;
use crate::core::version::V1;

/// A one-time wrapping key.
pub type WrappingKey = Zeroizing<[u8; V1::SYMMETRIC_KEY_SIZE]>;

/// Encrypts `plaintext` under `key` with a freshly drawn IV.
pub fn seal<P: CryptoProvider>(
    provider: &P,
    key: &[u8; V1::SYMMETRIC_KEY_SIZE],
    plaintext: &[u8],
) -> ZestResult<SealedBox> {
    let iv = provider.generate_iv()?;
    let ciphertext = provider.symmetric_encrypt(key, &iv, plaintext)?;
    Ok(SealedBox::new(iv, ciphertext))
}

/// Decrypts a sealed box under `key`.
///
/// The plaintext may be key material, so it is returned zeroizing.
pub fn open<P: CryptoProvider>(
    provider: &P,
    key: &[u8; V1::SYMMETRIC_KEY_SIZE],
    sealed: &SealedBox,
) -> ZestResult<Zeroizing<Vec<u8>>> {
    provider
        .symmetric_decrypt(key, sealed.iv(), sealed.ciphertext())
        .map(Zeroizing::new)
}

/// Draws a one-time wrapping key and seals `plaintext` under it.
///
/// Returns the wrapping key alongside the sealed value; keeping the two
/// apart is the caller's responsibility.
pub fn wrap_with_fresh_key<P: CryptoProvider>(
    provider: &P,
    plaintext: &[u8],
) -> ZestResult<(WrappingKey, SealedBox)> {
    let wrapping_key = provider.generate_symmetric_key()?;
    let sealed = seal(provider, &wrapping_key, plaintext)?;
    Ok((wrapping_key, sealed))
}
