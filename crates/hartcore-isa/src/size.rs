//! Instruction size classification.
//!
//! A word whose two low bits are both set is a 4-byte instruction; anything
//! else is a 2-byte compressed instruction. Fetch logic needs this before it
//! knows how many bytes to read, so it does not go through the table.

/// Low-bit pattern of a full-size (32-bit) instruction.
const FULL_SIZE_BITS: u32 = 0b11;

/// Return true if `word` is a 4-byte instruction.
#[inline]
#[must_use]
pub const fn is_full_size(word: u32) -> bool {
    word & FULL_SIZE_BITS == FULL_SIZE_BITS
}

/// Return true if `word` is a 2-byte compressed instruction.
#[inline]
#[must_use]
pub const fn is_compressed(word: u32) -> bool {
    !is_full_size(word)
}

/// Size in bytes (2 or 4) of the instruction starting with `word`.
#[inline]
#[must_use]
pub const fn instruction_size(word: u32) -> u8 {
    if is_full_size(word) { 4 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_size() {
        assert_eq!(instruction_size(0xFFFF_FFFF), 4);
        assert_eq!(instruction_size(0x0000_0001), 2);
        assert_eq!(instruction_size(0x0000_0000), 2);
        assert_eq!(instruction_size(0x0000_0002), 2);
        // addi x1, x0, 42
        assert_eq!(instruction_size(0x02A0_0093), 4);
    }

    #[test]
    fn test_compressed_is_complement() {
        for word in [0u32, 1, 2, 3, 0x4501, 0x0000_0013, 0xDEAD_BEEF] {
            assert_ne!(is_compressed(word), is_full_size(word));
        }
    }
}
