/*!
# torken-crypt

Symmetric-cipher dispatch facade for the torken tokenizer.

## Overview

This library routes an integer algorithm id to a registered AEAD cipher and
performs encryption/decryption over caller-supplied buffers:

- ChaCha20-Poly1305 (algorithm id 0, always available)
- AES-256-GCM (algorithm id 1, `aes-gcm` feature, on by default)

The numeric ids are part of the torken C interface and must stay stable; the
facade itself is algorithm-agnostic and dispatches through the
[`SymmetricCipher`] trait.

All validation happens before any key material is touched: unknown ids,
mismatched key or nonce lengths, and undersized output buffers are rejected
with specific errors. Decryption is all-or-nothing: a failed tag check never
releases partial plaintext.

The crate also carries the tokenizer's keyed byte-shuffling and truncated
checksum helpers, and an optional C ABI (`ffi` feature) exposing the
`crp_encrypt` / `crp_decrypt` surface.

## Example

```
use torken_crypt::{Algorithm, CipherRegistry};

let registry = CipherRegistry::with_defaults();
let algo = Algorithm::ChaCha20Poly1305.id();

let key = [0x42u8; 32];
let nonce = registry.random_nonce(algo)?;

let mut ciphertext = vec![0u8; registry.ciphertext_len(algo, 5)?];
let written = registry.encrypt(algo, b"hello", &key, &nonce, &mut ciphertext)?;

let mut plaintext = vec![0u8; registry.plaintext_len(algo, written)?];
let recovered = registry.decrypt(algo, &ciphertext[..written], &key, &nonce, &mut plaintext)?;
assert_eq!(&plaintext[..recovered], b"hello");
# Ok::<(), torken_crypt::Error>(())
```
*/

// Error handling
pub mod error;

// Algorithm ids and size constants
pub mod types;
pub mod constants;

// Cipher trait and built-in implementations
pub mod cipher;

// Dispatch facade
pub mod registry;

// Keyed shuffling and checksums
pub mod shuffle;

// Security utilities
pub mod security;

// C bindings
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use types::{Algorithm, AlgorithmId};
pub use cipher::{create_cipher, SymmetricCipher};
pub use registry::{decrypt, default_registry, encrypt, CipherRegistry};
pub use shuffle::{checksum, pseudo_shuffle, pseudo_unshuffle, verify_checksum};
pub use security::constant_time::constant_time_eq;
