//! Zicsr and Zifencei extensions.

use super::{F3_MASK, X_RD, X_RS1};
use crate::{
    CSR_MASK, ExtensionSet, InstCategory as Cat, InstId, InstructionDescriptor as Desc, Operand,
    ZIMM_MASK,
};

pub const OP_FENCE_I: InstId = InstId::new(53);
pub const OP_CSRRW: InstId = InstId::new(54);
pub const OP_CSRRS: InstId = InstId::new(55);
pub const OP_CSRRC: InstId = InstId::new(56);
pub const OP_CSRRWI: InstId = InstId::new(57);
pub const OP_CSRRSI: InstId = InstId::new(58);
pub const OP_CSRRCI: InstId = InstId::new(59);

const CSR: Operand = Operand::csr(CSR_MASK);

const fn csr_reg(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Csr)
        .operands([X_RD, CSR, X_RS1])
        .requires(ExtensionSet::ZICSR)
}

const fn csr_imm(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Csr)
        .operands([X_RD, CSR, Operand::imm(ZIMM_MASK)])
        .requires(ExtensionSet::ZICSR)
}

/// CSR access and instruction-fetch fence.
pub const ZICSR_INSTRUCTIONS: &[Desc] = &[
    Desc::new("fence.i", OP_FENCE_I, 0x0000_100F, F3_MASK, Cat::Int)
        .requires(ExtensionSet::ZIFENCEI),
    csr_reg("csrrw", OP_CSRRW, 0x0000_1073),
    csr_reg("csrrs", OP_CSRRS, 0x0000_2073),
    csr_reg("csrrc", OP_CSRRC, 0x0000_3073),
    csr_imm("csrrwi", OP_CSRRWI, 0x0000_5073),
    csr_imm("csrrsi", OP_CSRRSI, 0x0000_6073),
    csr_imm("csrrci", OP_CSRRCI, 0x0000_7073),
];
