/*!
Error handling for cipher dispatch.

Cryptographic failures carry deliberately little detail: a failed tag check
reports only that authentication failed, never where the mismatch occurred.
*/

use thiserror::Error;

use crate::types::AlgorithmId;

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cipher operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No cipher is registered under the given algorithm id
    #[error("Unknown algorithm id: {0}")]
    UnknownAlgorithm(AlgorithmId),

    /// Key length does not match the selected algorithm
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Nonce length does not match the selected algorithm
    #[error("Invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// Caller-supplied output buffer cannot hold the result
    #[error("Output buffer too small: need {needed} bytes, got {provided}")]
    BufferTooSmall { needed: usize, provided: usize },

    /// Authentication tag verification failed; no plaintext was released
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Encryption failed
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Decryption failed
    #[error("Decryption failed")]
    DecryptionFailed,
}
