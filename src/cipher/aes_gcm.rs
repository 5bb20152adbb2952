/*!
AES-256-GCM symmetric encryption implementation.

Available behind the `aes-gcm` feature.
*/

use aes_gcm::{
    Aes256Gcm, Key as AesKey, Nonce as AesNonce,
    aead::{Aead as AesAead, KeyInit as AesKeyInit},
};

use crate::cipher::SymmetricCipher;
use crate::constants::aes;
use crate::error::{Error, Result};
use crate::types::{Algorithm, AlgorithmId};

/// AES-256-GCM cipher implementation
pub struct Aes256GcmCipher;

impl Aes256GcmCipher {
    fn keyed(&self, key: &[u8]) -> Result<Aes256Gcm> {
        if key.len() != aes::KEY_SIZE {
            return Err(Error::InvalidKeyLength {
                expected: aes::KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(key)))
    }
}

impl SymmetricCipher for Aes256GcmCipher {
    fn id(&self) -> AlgorithmId {
        Algorithm::Aes256Gcm.id()
    }

    fn name(&self) -> &'static str {
        Algorithm::Aes256Gcm.name()
    }

    fn key_len(&self) -> usize {
        aes::KEY_SIZE
    }

    fn nonce_len(&self) -> usize {
        aes::NONCE_SIZE
    }

    fn tag_len(&self) -> usize {
        aes::TAG_SIZE
    }

    fn encrypt(&self, key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.keyed(key)?;
        if nonce.len() != aes::NONCE_SIZE {
            return Err(Error::InvalidNonceLength {
                expected: aes::NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        cipher.encrypt(AesNonce::from_slice(nonce), plaintext)
            .map_err(|_e| Error::EncryptionFailed)
    }

    fn decrypt(&self, key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.keyed(key)?;
        if nonce.len() != aes::NONCE_SIZE {
            return Err(Error::InvalidNonceLength {
                expected: aes::NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        cipher.decrypt(AesNonce::from_slice(nonce), ciphertext)
            .map_err(|_e| Error::AuthenticationFailed)
    }
}
