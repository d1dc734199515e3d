//! `KeyMaterial` - everything an `EncryptionKey` owns, assigned as one unit.

use core::fmt::{self, Debug};

use zeroize::Zeroizing;

use crate::core::error::{Layer, ZestError, ZestResult};
use crate::core::provider::CryptoProvider;
use crate::core::types::SymmetricSecret;

/// An asymmetric keypair, its portable textual form, and the persistent
/// symmetric secret.
///
/// The PEM text is kept verbatim next to the parsed keys: export writes it
/// back unchanged and the fingerprint hashes it, so a restored key keeps the
/// exact id it was exported with.
#[derive(Clone)]
pub(crate) struct KeyMaterial<P: CryptoProvider> {
    pub(crate) private_key: P::PrivateKey,
    pub(crate) public_key: P::PublicKey,
    pub(crate) private_pem: Zeroizing<String>,
    pub(crate) public_pem: String,
    pub(crate) secret: SymmetricSecret,
}

impl<P: CryptoProvider> KeyMaterial<P> {
    /// Generates a new keypair and a new secret.
    pub(crate) fn generate(provider: &P, modulus_bits: usize) -> ZestResult<Self> {
        let (private_key, public_key) = provider.generate_keypair(modulus_bits)?;
        let private_pem = provider
            .export_private_key(&private_key)
            .map_err(|_| ZestError::KeyGeneration)?;
        let public_pem = provider
            .export_public_key(&public_key)
            .map_err(|_| ZestError::KeyGeneration)?;
        let secret = SymmetricSecret::from(
            *provider
                .generate_symmetric_key()
                .map_err(|_| ZestError::KeyGeneration)?,
        );

        Ok(Self {
            private_key,
            public_key,
            private_pem,
            public_pem,
            secret,
        })
    }

    /// Restores key material from PEM text and a secret.
    ///
    /// # Errors
    ///
    /// Returns `ZestError::Import(Layer::Asymmetric)` if either PEM fails to
    /// parse or the two keys do not belong together.
    pub(crate) fn from_pem(
        provider: &P,
        private_pem: Zeroizing<String>,
        public_pem: String,
        secret: SymmetricSecret,
    ) -> ZestResult<Self> {
        let private_key = provider
            .import_private_key(&private_pem)
            .map_err(|_| ZestError::Import(Layer::Asymmetric))?;
        let public_key = provider
            .import_public_key(&public_pem)
            .map_err(|_| ZestError::Import(Layer::Asymmetric))?;

        if provider.public_key_of(&private_key) != public_key {
            return Err(ZestError::Import(Layer::Asymmetric));
        }

        Ok(Self {
            private_key,
            public_key,
            private_pem,
            public_pem,
            secret,
        })
    }
}

impl<P: CryptoProvider> Debug for KeyMaterial<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"[REDACTED]")
            .field("secret", &self.secret)
            .finish()
    }
}
