
/// Combines the low and high byte of a 16 bit output register pair into the signed value they
/// hold (two's complement, high byte carries bits [15:8]).
///
#[inline]
pub fn bytes_to_i16(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}
