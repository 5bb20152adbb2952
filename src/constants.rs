/*!
Size constants for the supported ciphers.
*/

/// ChaCha20-Poly1305 constants
pub mod chacha {
    /// Size of ChaCha20-Poly1305 key in bytes
    pub const KEY_SIZE: usize = 32;

    /// Size of ChaCha20-Poly1305 nonce in bytes
    pub const NONCE_SIZE: usize = 12;

    /// Size of ChaCha20-Poly1305 tag in bytes
    pub const TAG_SIZE: usize = 16;
}

/// AES-GCM constants
pub mod aes {
    /// Size of AES-256-GCM key in bytes
    pub const KEY_SIZE: usize = 32;

    /// Size of AES-256-GCM nonce in bytes
    pub const NONCE_SIZE: usize = 12;

    /// Size of AES-256-GCM tag in bytes
    pub const TAG_SIZE: usize = 16;
}

/// Size of the truncated SHA-256 data checksum in bytes
pub const CHECKSUM_SIZE: usize = 8;
