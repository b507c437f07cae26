//! Built-in instruction data, one module per extension.
//!
//! Each module exports its `OP_*` ids and a static descriptor slice. Ids are
//! dense across all modules so that a [`DecodeTable`](crate::DecodeTable)
//! can index them directly.

mod a;
mod base;
mod c;
mod d;
mod f;
mod m;
mod privileged;
mod zicsr;

pub use a::*;
pub use base::*;
pub use c::*;
pub use d::*;
pub use f::*;
pub use m::*;
pub use privileged::*;
pub use zicsr::*;

use crate::{
    InstructionDescriptor, Operand, OperandMode, RD_MASK, RS1_MASK, RS2_MASK,
};

/// Every built-in descriptor slice, in table order.
pub const STANDARD: &[&[InstructionDescriptor]] = &[
    BASE_INSTRUCTIONS,
    ZICSR_INSTRUCTIONS,
    M_INSTRUCTIONS,
    A_INSTRUCTIONS,
    F_INSTRUCTIONS,
    D_INSTRUCTIONS,
    PRIVILEGED_INSTRUCTIONS,
    C_INSTRUCTIONS,
];

/// Iterate the built-in descriptors in table order.
pub fn standard_descriptors() -> impl Iterator<Item = &'static InstructionDescriptor> {
    STANDARD.iter().flat_map(|slice| slice.iter())
}

// ===== Fixed-bit masks shared by several extensions =====

/// opcode + funct3 + funct7 (R-type).
const R_MASK: u32 = 0xFE00_707F;
/// opcode + funct3 (I, S, B types).
const F3_MASK: u32 = 0x0000_707F;
/// opcode only (U, J types).
const OPCODE_MASK: u32 = 0x0000_007F;
/// Every bit fixed.
const EXACT_MASK: u32 = u32::MAX;

// ===== Operand shorthands =====

const X_RD: Operand = Operand::int(OperandMode::Write, RD_MASK);
const X_RS1: Operand = Operand::int(OperandMode::Read, RS1_MASK);
const X_RS2: Operand = Operand::int(OperandMode::Read, RS2_MASK);
const F_RD: Operand = Operand::fp(OperandMode::Write, RD_MASK);
const F_RS1: Operand = Operand::fp(OperandMode::Read, RS1_MASK);
const F_RS2: Operand = Operand::fp(OperandMode::Read, RS2_MASK);
