/*!
Algorithm type definitions.

The numeric ids are part of the torken C interface: 0 selects
ChaCha20-Poly1305, 1 selects AES-256-GCM. Ids are stable across releases.
*/

use crate::constants::{aes, chacha};

/// Integer selector used by callers to pick a registered cipher
pub type AlgorithmId = i32;

/// Built-in symmetric encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// ChaCha20-Poly1305 (id 0)
    ChaCha20Poly1305,
    /// AES-256-GCM (id 1) - hardware acceleration on many platforms
    Aes256Gcm,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::ChaCha20Poly1305
    }
}

impl Algorithm {
    /// Get the wire-level id of the algorithm
    pub fn id(&self) -> AlgorithmId {
        match self {
            Algorithm::ChaCha20Poly1305 => 0,
            Algorithm::Aes256Gcm => 1,
        }
    }

    /// Look up an algorithm by its wire-level id
    pub fn from_id(id: AlgorithmId) -> Option<Self> {
        match id {
            0 => Some(Algorithm::ChaCha20Poly1305),
            1 => Some(Algorithm::Aes256Gcm),
            _ => None,
        }
    }

    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::ChaCha20Poly1305 => "ChaCha20-Poly1305",
            Algorithm::Aes256Gcm => "AES-256-GCM",
        }
    }

    /// Required key length in bytes
    pub fn key_len(&self) -> usize {
        match self {
            Algorithm::ChaCha20Poly1305 => chacha::KEY_SIZE,
            Algorithm::Aes256Gcm => aes::KEY_SIZE,
        }
    }

    /// Required nonce length in bytes
    pub fn nonce_len(&self) -> usize {
        match self {
            Algorithm::ChaCha20Poly1305 => chacha::NONCE_SIZE,
            Algorithm::Aes256Gcm => aes::NONCE_SIZE,
        }
    }

    /// Authentication tag length in bytes
    pub fn tag_len(&self) -> usize {
        match self {
            Algorithm::ChaCha20Poly1305 => chacha::TAG_SIZE,
            Algorithm::Aes256Gcm => aes::TAG_SIZE,
        }
    }

    /// Check if the algorithm is available in the current build
    pub fn is_available(&self) -> bool {
        match self {
            Algorithm::ChaCha20Poly1305 => true, // Always available
            Algorithm::Aes256Gcm => cfg!(feature = "aes-gcm"),
        }
    }
}
