//! Accumulator-style 8-bit checksum over payload bytes.
//!
//! The protocol folds a running checksum across every data frame in
//! emission order; the END trailer carries the final value. The concrete
//! polynomial is a deployment choice, so the engine takes the fold as a
//! plain function value (see [`crate::LinkConfig`]) with [`crc8`] as the
//! default. Both peers must agree on the same function.

/// Left fold over a byte slice: accumulator in, accumulator out.
pub type Checksum8 = fn(u8, &[u8]) -> u8;

const POLY: u8 = 0x07;

/// Bitwise CRC-8 (polynomial `0x07`), seeded by the accumulator argument.
///
/// Folding over a split byte sequence chunk by chunk yields the same value
/// as folding over the concatenation, which is what the fragmenter relies
/// on when it checksums one frame at a time.
///
/// # Examples
///
/// ```
/// use canlink::checksum::crc8;
/// let whole = crc8(0, b"abcdef");
/// let split = crc8(crc8(0, b"abc"), b"def");
/// assert_eq!(whole, split);
/// ```
#[must_use]
pub fn crc8(accumulator: u8, bytes: &[u8]) -> u8 {
    let mut crc = accumulator;
    for byte in bytes {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::crc8;

    #[test]
    fn empty_slice_is_identity() {
        assert_eq!(crc8(0x5A, &[]), 0x5A);
    }

    #[test]
    fn known_vector() {
        // CRC-8 poly 0x07, init 0, over "123456789".
        assert_eq!(crc8(0, b"123456789"), 0xF4);
    }

    #[test]
    fn chunked_fold_matches_whole() {
        let data: Vec<u8> = (0_u8..=255).collect();
        let whole = crc8(0, &data);
        let chunked = data.chunks(8).fold(0, crc8);
        assert_eq!(whole, chunked);
    }

    #[test]
    fn single_bit_flip_changes_value() {
        let data = [0x10_u8, 0x20, 0x30, 0x40];
        let mut flipped = data;
        flipped[2] ^= 0x01;
        assert_ne!(crc8(0, &data), crc8(0, &flipped));
    }
}
