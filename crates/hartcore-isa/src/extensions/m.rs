//! M extension (integer multiply/divide).

use super::{R_MASK, X_RD, X_RS1, X_RS2};
use crate::{ExtensionSet, InstCategory as Cat, InstId, InstructionDescriptor as Desc};

pub const OP_MUL: InstId = InstId::new(60);
pub const OP_MULH: InstId = InstId::new(61);
pub const OP_MULHSU: InstId = InstId::new(62);
pub const OP_MULHU: InstId = InstId::new(63);
pub const OP_DIV: InstId = InstId::new(64);
pub const OP_DIVU: InstId = InstId::new(65);
pub const OP_REM: InstId = InstId::new(66);
pub const OP_REMU: InstId = InstId::new(67);
// RV64M
pub const OP_MULW: InstId = InstId::new(68);
pub const OP_DIVW: InstId = InstId::new(69);
pub const OP_DIVUW: InstId = InstId::new(70);
pub const OP_REMW: InstId = InstId::new(71);
pub const OP_REMUW: InstId = InstId::new(72);

const fn m_type(name: &'static str, id: InstId, code: u32, category: Cat) -> Desc {
    Desc::new(name, id, code, R_MASK, category)
        .operands([X_RD, X_RS1, X_RS2])
        .requires(ExtensionSet::M)
}

/// Multiply and divide instructions.
pub const M_INSTRUCTIONS: &[Desc] = &[
    m_type("mul", OP_MUL, 0x0200_0033, Cat::Multiply),
    m_type("mulh", OP_MULH, 0x0200_1033, Cat::Multiply),
    m_type("mulhsu", OP_MULHSU, 0x0200_2033, Cat::Multiply),
    m_type("mulhu", OP_MULHU, 0x0200_3033, Cat::Multiply),
    m_type("div", OP_DIV, 0x0200_4033, Cat::Divide),
    m_type("divu", OP_DIVU, 0x0200_5033, Cat::Divide),
    m_type("rem", OP_REM, 0x0200_6033, Cat::Divide),
    m_type("remu", OP_REMU, 0x0200_7033, Cat::Divide),
    m_type("mulw", OP_MULW, 0x0200_003B, Cat::Multiply).rv64_only(),
    m_type("divw", OP_DIVW, 0x0200_403B, Cat::Divide).rv64_only(),
    m_type("divuw", OP_DIVUW, 0x0200_503B, Cat::Divide).rv64_only(),
    m_type("remw", OP_REMW, 0x0200_603B, Cat::Divide).rv64_only(),
    m_type("remuw", OP_REMUW, 0x0200_703B, Cat::Divide).rv64_only(),
];
