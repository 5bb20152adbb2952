/*!
ChaCha20-Poly1305 symmetric encryption implementation.
*/

use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, KeyInit},
};

use crate::cipher::SymmetricCipher;
use crate::constants::chacha;
use crate::error::{Error, Result};
use crate::types::{Algorithm, AlgorithmId};

/// ChaCha20-Poly1305 cipher implementation
pub struct ChaCha20Poly1305Cipher;

impl ChaCha20Poly1305Cipher {
    fn keyed(&self, key: &[u8]) -> Result<ChaCha20Poly1305> {
        if key.len() != chacha::KEY_SIZE {
            return Err(Error::InvalidKeyLength {
                expected: chacha::KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(ChaCha20Poly1305::new(Key::from_slice(key)))
    }

    fn nonce<'a>(&self, nonce: &'a [u8]) -> Result<&'a Nonce> {
        if nonce.len() != chacha::NONCE_SIZE {
            return Err(Error::InvalidNonceLength {
                expected: chacha::NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        Ok(Nonce::from_slice(nonce))
    }
}

impl SymmetricCipher for ChaCha20Poly1305Cipher {
    fn id(&self) -> AlgorithmId {
        Algorithm::ChaCha20Poly1305.id()
    }

    fn name(&self) -> &'static str {
        Algorithm::ChaCha20Poly1305.name()
    }

    fn key_len(&self) -> usize {
        chacha::KEY_SIZE
    }

    fn nonce_len(&self) -> usize {
        chacha::NONCE_SIZE
    }

    fn tag_len(&self) -> usize {
        chacha::TAG_SIZE
    }

    fn encrypt(&self, key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.keyed(key)?;
        let nonce = self.nonce(nonce)?;
        cipher.encrypt(nonce, plaintext)
            .map_err(|_e| Error::EncryptionFailed)
    }

    fn decrypt(&self, key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.keyed(key)?;
        let nonce = self.nonce(nonce)?;
        cipher.decrypt(nonce, ciphertext)
            .map_err(|_e| Error::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let cipher = ChaCha20Poly1305Cipher;
        let key = [0x42u8; chacha::KEY_SIZE];
        let nonce = [0x24u8; chacha::NONCE_SIZE];
        let data = b"This is a test message";

        let encrypted = cipher.encrypt(&key, &nonce, data).unwrap();
        assert_eq!(encrypted.len(), data.len() + chacha::TAG_SIZE);

        let decrypted = cipher.decrypt(&key, &nonce, &encrypted).unwrap();
        assert_eq!(data, &decrypted[..]);
    }

    #[test]
    fn test_tampered_data() {
        let cipher = ChaCha20Poly1305Cipher;
        let key = [0x42u8; chacha::KEY_SIZE];
        let nonce = [0x24u8; chacha::NONCE_SIZE];

        let mut encrypted = cipher.encrypt(&key, &nonce, b"This is a test message").unwrap();
        if let Some(byte) = encrypted.get_mut(5) {
            *byte ^= 0xFF;
        }

        let result = cipher.decrypt(&key, &nonce, &encrypted);
        assert_eq!(result, Err(Error::AuthenticationFailed));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let cipher = ChaCha20Poly1305Cipher;
        let nonce = [0u8; chacha::NONCE_SIZE];
        let result = cipher.encrypt(&[0u8; 16], &nonce, b"hello");
        assert_eq!(
            result,
            Err(Error::InvalidKeyLength { expected: 32, actual: 16 })
        );
    }
}
