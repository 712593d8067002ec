use std::cmp::Ordering;

/// Unsigned byte-wise lexicographic comparison.
///
/// Bytes compare by their numeric value 0..=255. When one sequence is a prefix of the other,
/// the shorter one orders first.
pub fn cmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
    for (a_byte, b_byte) in a.iter().zip(b.iter()) {
        let ord = a_byte.cmp(b_byte);
        if ord.is_ne() {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// An empty prefix matches every sequence.
pub fn starts_with(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && &bytes[..prefix.len()] == prefix
}
