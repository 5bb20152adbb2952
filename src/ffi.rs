/*!
C API for the cipher dispatch facade.

Integer algorithm selector, caller-owned buffers, `0` on success and a
negative status code on failure. The output buffer's capacity is passed
explicitly so undersized buffers are reported instead of overrun.
*/

use std::os::raw::c_int;
use std::slice;

use libc::size_t;

use crate::error::Error;
use crate::registry::default_registry;

/// Status codes returned by the C API
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrpStatus {
    Success = 0,
    InvalidArgument = -1,
    UnknownAlgorithm = -2,
    InvalidKeyLength = -3,
    InvalidNonceLength = -4,
    BufferTooSmall = -5,
    AuthenticationFailed = -6,
    EncryptionFailed = -7,
    DecryptionFailed = -8,
}

// Helper function to convert an Error to a C status code
fn to_status(err: Error) -> CrpStatus {
    match err {
        Error::UnknownAlgorithm(_) => CrpStatus::UnknownAlgorithm,
        Error::InvalidKeyLength { .. } => CrpStatus::InvalidKeyLength,
        Error::InvalidNonceLength { .. } => CrpStatus::InvalidNonceLength,
        Error::BufferTooSmall { .. } => CrpStatus::BufferTooSmall,
        Error::AuthenticationFailed => CrpStatus::AuthenticationFailed,
        Error::EncryptionFailed => CrpStatus::EncryptionFailed,
        Error::DecryptionFailed => CrpStatus::DecryptionFailed,
    }
}

// Null pointers are only legal for zero-length buffers.
unsafe fn slice_arg<'a>(ptr: *const u8, len: size_t) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

unsafe fn slice_arg_mut<'a>(ptr: *mut u8, len: size_t) -> Option<&'a mut [u8]> {
    if len == 0 {
        Some(&mut [])
    } else if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts_mut(ptr, len) })
    }
}

/// Encrypt `input` into `out` with the algorithm registered under `algo`
///
/// @param algo Algorithm id (0 = ChaCha20-Poly1305, 1 = AES-256-GCM)
/// @param input Plaintext buffer (may be NULL when input_len is 0)
/// @param input_len Plaintext length in bytes
/// @param key Key buffer; length must match the algorithm exactly
/// @param key_len Key length in bytes
/// @param nonce Nonce buffer; length must match the algorithm exactly
/// @param nonce_len Nonce length in bytes
/// @param out Output buffer for ciphertext plus tag
/// @param out_cap Capacity of the output buffer in bytes
/// @param out_len Receives the number of bytes written
/// @return 0 on success, negative status code on failure
#[unsafe(no_mangle)]
pub extern "C" fn crp_encrypt(
    algo: c_int,
    input: *const u8,
    input_len: size_t,
    key: *const u8,
    key_len: size_t,
    nonce: *const u8,
    nonce_len: size_t,
    out: *mut u8,
    out_cap: size_t,
    out_len: *mut size_t,
) -> c_int {
    if out_len.is_null() {
        return CrpStatus::InvalidArgument as c_int;
    }
    let (input, key, nonce, out) = unsafe {
        match (
            slice_arg(input, input_len),
            slice_arg(key, key_len),
            slice_arg(nonce, nonce_len),
            slice_arg_mut(out, out_cap),
        ) {
            (Some(i), Some(k), Some(n), Some(o)) => (i, k, n, o),
            _ => return CrpStatus::InvalidArgument as c_int,
        }
    };

    match default_registry().encrypt(algo, input, key, nonce, out) {
        Ok(written) => {
            unsafe { *out_len = written };
            CrpStatus::Success as c_int
        }
        Err(err) => to_status(err) as c_int,
    }
}

/// Decrypt `input` into `out` with the algorithm registered under `algo`
///
/// Same contract as `crp_encrypt`. On authentication failure nothing is
/// written to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn crp_decrypt(
    algo: c_int,
    input: *const u8,
    input_len: size_t,
    key: *const u8,
    key_len: size_t,
    nonce: *const u8,
    nonce_len: size_t,
    out: *mut u8,
    out_cap: size_t,
    out_len: *mut size_t,
) -> c_int {
    if out_len.is_null() {
        return CrpStatus::InvalidArgument as c_int;
    }
    let (input, key, nonce, out) = unsafe {
        match (
            slice_arg(input, input_len),
            slice_arg(key, key_len),
            slice_arg(nonce, nonce_len),
            slice_arg_mut(out, out_cap),
        ) {
            (Some(i), Some(k), Some(n), Some(o)) => (i, k, n, o),
            _ => return CrpStatus::InvalidArgument as c_int,
        }
    };

    match default_registry().decrypt(algo, input, key, nonce, out) {
        Ok(written) => {
            unsafe { *out_len = written };
            CrpStatus::Success as c_int
        }
        Err(err) => to_status(err) as c_int,
    }
}

/// Compute the ciphertext size for a plaintext of `input_len` bytes
///
/// @return 0 on success, negative status code for unknown algorithms
#[unsafe(no_mangle)]
pub extern "C" fn crp_ciphertext_len(
    algo: c_int,
    input_len: size_t,
    out_len: *mut size_t,
) -> c_int {
    if out_len.is_null() {
        return CrpStatus::InvalidArgument as c_int;
    }
    match default_registry().ciphertext_len(algo, input_len) {
        Ok(len) => {
            unsafe { *out_len = len };
            CrpStatus::Success as c_int
        }
        Err(err) => to_status(err) as c_int,
    }
}

/// Compute the plaintext size for a ciphertext of `input_len` bytes
///
/// @return 0 on success, negative status code for unknown algorithms or
/// ciphertexts shorter than the authentication tag
#[unsafe(no_mangle)]
pub extern "C" fn crp_plaintext_len(
    algo: c_int,
    input_len: size_t,
    out_len: *mut size_t,
) -> c_int {
    if out_len.is_null() {
        return CrpStatus::InvalidArgument as c_int;
    }
    match default_registry().plaintext_len(algo, input_len) {
        Ok(len) => {
            unsafe { *out_len = len };
            CrpStatus::Success as c_int
        }
        Err(err) => to_status(err) as c_int,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::chacha;

    #[test]
    fn test_encrypt_decrypt_via_c_api() {
        let key = [0x11u8; chacha::KEY_SIZE];
        let nonce = [0x22u8; chacha::NONCE_SIZE];
        let plaintext = b"hello";

        let mut ciphertext = [0u8; 64];
        let mut ct_len: size_t = 0;
        let rc = crp_encrypt(
            0,
            plaintext.as_ptr(),
            plaintext.len(),
            key.as_ptr(),
            key.len(),
            nonce.as_ptr(),
            nonce.len(),
            ciphertext.as_mut_ptr(),
            ciphertext.len(),
            &mut ct_len,
        );
        assert_eq!(rc, CrpStatus::Success as c_int);
        assert_eq!(ct_len, plaintext.len() + chacha::TAG_SIZE);

        let mut recovered = [0u8; 64];
        let mut pt_len: size_t = 0;
        let rc = crp_decrypt(
            0,
            ciphertext.as_ptr(),
            ct_len,
            key.as_ptr(),
            key.len(),
            nonce.as_ptr(),
            nonce.len(),
            recovered.as_mut_ptr(),
            recovered.len(),
            &mut pt_len,
        );
        assert_eq!(rc, CrpStatus::Success as c_int);
        assert_eq!(&recovered[..pt_len], plaintext);
    }

    #[test]
    fn test_status_codes() {
        let key = [0u8; chacha::KEY_SIZE];
        let nonce = [0u8; chacha::NONCE_SIZE];
        let mut out = [0u8; 64];
        let mut out_len: size_t = 0;

        let rc = crp_encrypt(
            999,
            b"x".as_ptr(),
            1,
            key.as_ptr(),
            key.len(),
            nonce.as_ptr(),
            nonce.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(rc, CrpStatus::UnknownAlgorithm as c_int);

        let rc = crp_encrypt(
            0,
            b"x".as_ptr(),
            1,
            key.as_ptr(),
            7,
            nonce.as_ptr(),
            nonce.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(rc, CrpStatus::InvalidKeyLength as c_int);

        // Null input with nonzero length
        let rc = crp_encrypt(
            0,
            std::ptr::null(),
            1,
            key.as_ptr(),
            key.len(),
            nonce.as_ptr(),
            nonce.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(rc, CrpStatus::InvalidArgument as c_int);
    }

    #[test]
    fn test_sizing_entry_points() {
        let mut len: size_t = 0;
        assert_eq!(crp_ciphertext_len(0, 100, &mut len), 0);
        assert_eq!(len, 116);
        assert_eq!(crp_plaintext_len(0, 116, &mut len), 0);
        assert_eq!(len, 100);
        assert_eq!(
            crp_plaintext_len(0, 4, &mut len),
            CrpStatus::AuthenticationFailed as c_int
        );
        assert_eq!(
            crp_ciphertext_len(999, 0, &mut len),
            CrpStatus::UnknownAlgorithm as c_int
        );
    }
}
