/*!
Symmetric cipher trait and built-in implementations.

Every cipher exposes its required key, nonce, and tag lengths alongside the
encrypt/decrypt operations, so the dispatch layer can validate inputs before
touching any key material. Implementations are stateless: key and nonce
arrive per call and are never retained past the call's return.
*/

mod chacha20poly1305;
#[cfg(feature = "aes-gcm")]
mod aes_gcm;

pub use self::chacha20poly1305::ChaCha20Poly1305Cipher;
#[cfg(feature = "aes-gcm")]
pub use self::aes_gcm::Aes256GcmCipher;

use crate::error::Result;
use crate::types::{Algorithm, AlgorithmId};

/// Trait for symmetric cipher operations
pub trait SymmetricCipher: Send + Sync {
    /// Wire-level id the cipher is dispatched under
    fn id(&self) -> AlgorithmId;

    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    /// Required key length in bytes
    fn key_len(&self) -> usize;

    /// Required nonce length in bytes
    fn nonce_len(&self) -> usize;

    /// Authentication tag length in bytes (0 for unauthenticated ciphers)
    fn tag_len(&self) -> usize;

    /// Encrypt data with the cipher
    ///
    /// The caller guarantees `key` and `nonce` match `key_len`/`nonce_len`;
    /// implementations still reject mismatches rather than panic.
    fn encrypt(&self, key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt data with the cipher
    ///
    /// For authenticated ciphers the returned plaintext exists only if tag
    /// verification succeeded.
    fn decrypt(&self, key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Create a cipher for the specified built-in algorithm
///
/// Returns `None` when the algorithm is not available in the current build
/// (AES-256-GCM requires the `aes-gcm` feature).
pub fn create_cipher(algorithm: Algorithm) -> Option<Box<dyn SymmetricCipher>> {
    match algorithm {
        Algorithm::ChaCha20Poly1305 => Some(Box::new(ChaCha20Poly1305Cipher)),
        Algorithm::Aes256Gcm => {
            #[cfg(feature = "aes-gcm")]
            {
                Some(Box::new(Aes256GcmCipher))
            }
            #[cfg(not(feature = "aes-gcm"))]
            {
                None
            }
        }
    }
}
