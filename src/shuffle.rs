/*!
Keyed byte shuffling and data checksums.

The tokenizer scrambles buffers with a deterministic, key-derived permutation
before encryption. The permutation orders positions by a stable sort over
`sha256(key)[i % 32]`, so shuffling and unshuffling with the same key are
exact inverses.
*/

use sha2::{Digest, Sha256};

use crate::constants::CHECKSUM_SIZE;
use crate::security::constant_time::constant_time_eq;

fn permutation(len: usize, key: &[u8]) -> Vec<usize> {
    let key_hash = Sha256::digest(key);
    let mut indices: Vec<usize> = (0..len).collect();
    // Stable sort: equal hash bytes keep their original relative order,
    // which is what makes the permutation invertible and key-deterministic.
    indices.sort_by_key(|&i| key_hash[i % 32]);
    indices
}

/// Shuffle `data` in place with the permutation derived from `key`
pub fn pseudo_shuffle(data: &mut [u8], key: &[u8]) {
    let indices = permutation(data.len(), key);
    let temp = data.to_vec();
    for (i, &idx) in indices.iter().enumerate() {
        data[i] = temp[idx];
    }
}

/// Undo `pseudo_shuffle` for the same `key`
pub fn pseudo_unshuffle(data: &mut [u8], key: &[u8]) {
    let indices = permutation(data.len(), key);
    let mut reverse = vec![0usize; data.len()];
    for (i, &idx) in indices.iter().enumerate() {
        reverse[idx] = i;
    }

    let temp = data.to_vec();
    for (i, &idx) in reverse.iter().enumerate() {
        data[i] = temp[idx];
    }
}

/// Compute the truncated SHA-256 checksum of `data`
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Verify a checksum in constant time
pub fn verify_checksum(expected: &[u8], data: &[u8]) -> bool {
    constant_time_eq(expected, &checksum(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_roundtrip() {
        let original: Vec<u8> = (0..=255).collect();
        let mut data = original.clone();

        pseudo_shuffle(&mut data, b"tokenizer key");
        assert_ne!(data, original);

        pseudo_unshuffle(&mut data, b"tokenizer key");
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_key_dependent() {
        let original: Vec<u8> = (0..=255).collect();
        let mut a = original.clone();
        let mut b = original.clone();

        pseudo_shuffle(&mut a, b"key one");
        pseudo_shuffle(&mut b, b"key two");
        assert_ne!(a, b);

        // Unshuffling with the wrong key does not restore the data
        pseudo_unshuffle(&mut a, b"key two");
        assert_ne!(a, original);
    }

    #[test]
    fn test_shuffle_preserves_bytes() {
        let mut data = b"the quick brown fox".to_vec();
        let mut sorted_before = data.clone();
        sorted_before.sort_unstable();

        pseudo_shuffle(&mut data, b"k");
        let mut sorted_after = data.clone();
        sorted_after.sort_unstable();
        assert_eq!(sorted_before, sorted_after);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        pseudo_shuffle(&mut empty, b"k");
        pseudo_unshuffle(&mut empty, b"k");
        assert!(empty.is_empty());

        let mut single = vec![7u8];
        pseudo_shuffle(&mut single, b"k");
        assert_eq!(single, vec![7u8]);
    }

    #[test]
    fn test_checksum() {
        let sum = checksum(b"hello world");
        assert_eq!(sum.len(), CHECKSUM_SIZE);
        assert!(verify_checksum(&sum, b"hello world"));
        assert!(!verify_checksum(&sum, b"hello worle"));
        assert!(!verify_checksum(&sum[..4], b"hello world"));
    }
}
