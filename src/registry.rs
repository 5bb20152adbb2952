/*!
Registry for cipher implementations: the dispatch facade.

A `CipherRegistry` maps wire-level algorithm ids to cipher implementations.
It is built once, stays immutable afterwards, and may be shared freely across
threads: every encrypt/decrypt call is stateless and touches only the
caller's buffers. Tests construct their own registries instead of mutating
the process-wide default.
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::RngCore;

use crate::cipher::{create_cipher, SymmetricCipher};
use crate::error::{Error, Result};
use crate::types::{Algorithm, AlgorithmId};

/// Registry of cipher implementations keyed by algorithm id
pub struct CipherRegistry {
    ciphers: HashMap<AlgorithmId, Box<dyn SymmetricCipher>>,
}

impl CipherRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            ciphers: HashMap::new(),
        }
    }

    /// Create a registry with all built-in algorithms registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for algorithm in [Algorithm::ChaCha20Poly1305, Algorithm::Aes256Gcm] {
            if let Some(cipher) = create_cipher(algorithm) {
                registry.register(cipher);
            }
        }
        registry
    }

    /// Register a cipher under its own id, replacing any previous entry
    pub fn register(&mut self, cipher: Box<dyn SymmetricCipher>) {
        self.ciphers.insert(cipher.id(), cipher);
    }

    /// Look up the cipher registered under `algo`
    pub fn get(&self, algo: AlgorithmId) -> Option<&dyn SymmetricCipher> {
        self.ciphers.get(&algo).map(|c| c.as_ref())
    }

    /// List the registered algorithm ids together with their names
    pub fn algorithms(&self) -> Vec<(AlgorithmId, &'static str)> {
        let mut list: Vec<_> = self.ciphers.values().map(|c| (c.id(), c.name())).collect();
        list.sort_by_key(|(id, _)| *id);
        list
    }

    /// Ciphertext length produced for a plaintext of `plaintext_len` bytes
    pub fn ciphertext_len(&self, algo: AlgorithmId, plaintext_len: usize) -> Result<usize> {
        let cipher = self.lookup(algo)?;
        Ok(plaintext_len + cipher.tag_len())
    }

    /// Plaintext length recovered from a ciphertext of `ciphertext_len` bytes
    ///
    /// Fails with `AuthenticationFailed` when the ciphertext is shorter than
    /// the algorithm's tag: such input can never verify.
    pub fn plaintext_len(&self, algo: AlgorithmId, ciphertext_len: usize) -> Result<usize> {
        let cipher = self.lookup(algo)?;
        ciphertext_len
            .checked_sub(cipher.tag_len())
            .ok_or(Error::AuthenticationFailed)
    }

    /// Generate a fresh random nonce of the length the algorithm requires
    pub fn random_nonce(&self, algo: AlgorithmId) -> Result<Vec<u8>> {
        let cipher = self.lookup(algo)?;
        let mut nonce = vec![0u8; cipher.nonce_len()];
        rand::rng().fill_bytes(&mut nonce);
        Ok(nonce)
    }

    /// Encrypt `plaintext` into the caller-supplied `out` buffer
    ///
    /// Validates the algorithm id, key length, nonce length, and output
    /// capacity before dispatching. Returns the number of bytes written
    /// (plaintext length plus the algorithm's tag). On any error `out` is
    /// left untouched.
    pub fn encrypt(
        &self,
        algo: AlgorithmId,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        let cipher = self.validated(algo, key, nonce)?;
        let needed = plaintext.len() + cipher.tag_len();
        if out.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                provided: out.len(),
            });
        }

        let ciphertext = cipher.encrypt(key, nonce, plaintext)?;
        // A cipher whose tag_len under-reports must not overrun the buffer
        if ciphertext.len() > out.len() {
            return Err(Error::BufferTooSmall {
                needed: ciphertext.len(),
                provided: out.len(),
            });
        }
        out[..ciphertext.len()].copy_from_slice(&ciphertext);
        Ok(ciphertext.len())
    }

    /// Decrypt `ciphertext` into the caller-supplied `out` buffer
    ///
    /// Same validation as `encrypt`. Decryption is all-or-nothing: the
    /// plaintext reaches `out` only after tag verification succeeded, so a
    /// forged ciphertext never leaks partial output.
    pub fn decrypt(
        &self,
        algo: AlgorithmId,
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        let cipher = self.validated(algo, key, nonce)?;
        let needed = ciphertext
            .len()
            .checked_sub(cipher.tag_len())
            .ok_or(Error::AuthenticationFailed)?;
        if out.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                provided: out.len(),
            });
        }

        let plaintext = cipher.decrypt(key, nonce, ciphertext)?;
        if plaintext.len() > out.len() {
            return Err(Error::BufferTooSmall {
                needed: plaintext.len(),
                provided: out.len(),
            });
        }
        out[..plaintext.len()].copy_from_slice(&plaintext);
        Ok(plaintext.len())
    }

    fn lookup(&self, algo: AlgorithmId) -> Result<&dyn SymmetricCipher> {
        self.get(algo).ok_or(Error::UnknownAlgorithm(algo))
    }

    fn validated(
        &self,
        algo: AlgorithmId,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<&dyn SymmetricCipher> {
        let cipher = self.lookup(algo)?;
        if key.len() != cipher.key_len() {
            return Err(Error::InvalidKeyLength {
                expected: cipher.key_len(),
                actual: key.len(),
            });
        }
        if nonce.len() != cipher.nonce_len() {
            return Err(Error::InvalidNonceLength {
                expected: cipher.nonce_len(),
                actual: nonce.len(),
            });
        }
        Ok(cipher)
    }
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// Process-wide registry of built-in algorithms, read-only after init
static DEFAULT_REGISTRY: Lazy<CipherRegistry> = Lazy::new(CipherRegistry::with_defaults);

/// Get the process-wide registry of built-in algorithms
pub fn default_registry() -> &'static CipherRegistry {
    &DEFAULT_REGISTRY
}

/// Encrypt with a built-in algorithm via the default registry
pub fn encrypt(
    algo: AlgorithmId,
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    default_registry().encrypt(algo, plaintext, key, nonce, out)
}

/// Decrypt with a built-in algorithm via the default registry
pub fn decrypt(
    algo: AlgorithmId,
    ciphertext: &[u8],
    key: &[u8],
    nonce: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    default_registry().decrypt(algo, ciphertext, key, nonce, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::chacha;

    #[test]
    fn test_defaults_registered() {
        let registry = CipherRegistry::with_defaults();
        assert!(registry.get(Algorithm::ChaCha20Poly1305.id()).is_some());
        #[cfg(feature = "aes-gcm")]
        assert!(registry.get(Algorithm::Aes256Gcm.id()).is_some());
        assert!(registry.get(999).is_none());
    }

    #[test]
    fn test_unknown_algorithm() {
        let registry = CipherRegistry::with_defaults();
        let key = [0u8; chacha::KEY_SIZE];
        let nonce = [0u8; chacha::NONCE_SIZE];
        let mut out = [0u8; 64];

        let result = registry.encrypt(999, b"data", &key, &nonce, &mut out);
        assert_eq!(result, Err(Error::UnknownAlgorithm(999)));
        let result = registry.decrypt(999, b"data", &key, &nonce, &mut out);
        assert_eq!(result, Err(Error::UnknownAlgorithm(999)));
    }

    #[test]
    fn test_buffer_too_small() {
        let registry = CipherRegistry::with_defaults();
        let key = [0u8; chacha::KEY_SIZE];
        let nonce = [0u8; chacha::NONCE_SIZE];
        let data = b"hello";
        let mut out = [0u8; 5]; // needs 5 + 16

        let result = registry.encrypt(0, data, &key, &nonce, &mut out);
        assert_eq!(
            result,
            Err(Error::BufferTooSmall { needed: 21, provided: 5 })
        );
        // Nothing was written
        assert_eq!(out, [0u8; 5]);
    }

    #[test]
    fn test_sizing_helpers() {
        let registry = CipherRegistry::with_defaults();
        assert_eq!(registry.ciphertext_len(0, 100).unwrap(), 116);
        assert_eq!(registry.plaintext_len(0, 116).unwrap(), 100);
        assert_eq!(
            registry.plaintext_len(0, 3),
            Err(Error::AuthenticationFailed)
        );
        assert_eq!(
            registry.ciphertext_len(999, 1),
            Err(Error::UnknownAlgorithm(999))
        );
    }

    #[test]
    fn test_random_nonce() {
        let registry = CipherRegistry::with_defaults();
        let nonce = registry.random_nonce(0).unwrap();
        assert_eq!(nonce.len(), chacha::NONCE_SIZE);
        // Two draws colliding would mean a broken RNG
        assert_ne!(nonce, registry.random_nonce(0).unwrap());
    }
}
