//! Bit-field extract/insert over a 64-bit word.
//!
//! Offsets and widths are in bits. A field may span the whole word
//! (offset 0, width 64).

/// Mask with the low `width` bits set.
#[inline]
#[must_use]
pub const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Read the field at `offset` with `width` bits.
#[inline]
#[must_use]
pub const fn extract(value: u64, offset: u32, width: u32) -> u64 {
    if offset >= 64 {
        return 0;
    }
    (value >> offset) & mask(width)
}

/// Replace the field at `offset` with `width` bits by `field`.
///
/// Bits of `field` above `width` are dropped; bits of `value` outside the
/// field are left untouched.
#[inline]
#[must_use]
pub const fn insert(value: u64, offset: u32, width: u32, field: u64) -> u64 {
    if offset >= 64 {
        return value;
    }
    let field_mask = mask(width) << offset;
    (value & !field_mask) | ((field << offset) & field_mask)
}
