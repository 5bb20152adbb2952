/*!
Constant-time operations.
*/

/// Compare two byte slices in constant time.
///
/// This function will take the same amount of time regardless of where
/// the slices differ, helping to prevent timing attacks.
///
/// Returns true if the slices are equal, false otherwise.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // XOR all bytes and OR the result
    // This ensures we always go through all bytes even if we find a difference
    let mut result: u8 = 0;

    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
