//! Privileged instructions (trap return, wait, address-translation fence).

use super::{EXACT_MASK, X_RS1, X_RS2};
use crate::{ExtensionSet, InstCategory as Cat, InstId, InstructionDescriptor as Desc};

pub const OP_URET: InstId = InstId::new(157);
pub const OP_SRET: InstId = InstId::new(158);
pub const OP_MRET: InstId = InstId::new(159);
pub const OP_WFI: InstId = InstId::new(160);
pub const OP_SFENCE_VMA: InstId = InstId::new(161);

/// funct7 + rd + funct3 + opcode of `sfence.vma`.
const SFENCE_VMA_MASK: u32 = 0xFE00_7FFF;

/// Privileged-architecture instructions.
pub const PRIVILEGED_INSTRUCTIONS: &[Desc] = &[
    Desc::new("uret", OP_URET, 0x0020_0073, EXACT_MASK, Cat::Int).requires(ExtensionSet::N),
    Desc::new("sret", OP_SRET, 0x1020_0073, EXACT_MASK, Cat::Int).requires(ExtensionSet::S),
    Desc::new("mret", OP_MRET, 0x3020_0073, EXACT_MASK, Cat::Int),
    Desc::new("wfi", OP_WFI, 0x1050_0073, EXACT_MASK, Cat::Int),
    Desc::new("sfence.vma", OP_SFENCE_VMA, 0x1200_0073, SFENCE_VMA_MASK, Cat::Int)
        .operands([X_RS1, X_RS2])
        .requires(ExtensionSet::S),
];
