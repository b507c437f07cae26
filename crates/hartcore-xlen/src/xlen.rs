//! Register width types (XLEN).

use std::fmt::{Debug, Display, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not};

/// Marker type for 32-bit register width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rv32;

/// Marker type for 64-bit register width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rv64;

/// Trait for register-width-dependent state.
///
/// Uses marker types (Rv32/Rv64) with associated types instead of const generics
/// so that the register value type follows from the width.
pub trait Xlen: Copy + Clone + Send + Sync + Default + Debug + 'static {
    /// Register type (u32 for Rv32, u64 for Rv64).
    type Reg: Copy
        + Clone
        + Default
        + Eq
        + Ord
        + Hash
        + Debug
        + Display
        + LowerHex
        + Send
        + Sync
        + From<u32>
        + Into<u64>
        + BitAnd<Output = Self::Reg>
        + BitOr<Output = Self::Reg>
        + Not<Output = Self::Reg>;

    /// XLEN value (32 or 64).
    const VALUE: u8;

    /// Bytes per register (4 for 32-bit, 8 for 64-bit).
    const REG_BYTES: usize;

    /// Convert a u64 to register width, dropping the upper bits.
    fn from_u64(val: u64) -> Self::Reg;

    /// Convert register to u64 (zero-extended).
    fn to_u64(val: Self::Reg) -> u64;
}

impl Xlen for Rv32 {
    type Reg = u32;

    const VALUE: u8 = 32;
    const REG_BYTES: usize = 4;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_u64(val: u64) -> u32 {
        val as u32
    }

    #[inline]
    fn to_u64(val: u32) -> u64 {
        u64::from(val)
    }
}

impl Xlen for Rv64 {
    type Reg = u64;

    const VALUE: u8 = 64;
    const REG_BYTES: usize = 8;

    #[inline]
    fn from_u64(val: u64) -> u64 {
        val
    }

    #[inline]
    fn to_u64(val: u64) -> u64 {
        val
    }
}
