//! C extension (compressed 16-bit instructions).
//!
//! Several quadrant slots mean different instructions on RV32 and RV64
//! (`c.flw`/`c.ld`, `c.jal`/`c.addiw`, ...). Both variants are listed with
//! identical code and mask; the caller's alias policy picks one.

use crate::{
    C_RD_MASK, C_RDP_MASK, C_RS1P_MASK, C_RS2_MASK, ExtensionSet, InstCategory as Cat, InstId,
    InstructionDescriptor as Desc, Operand, OperandMode,
};

pub const OP_C_ADDI4SPN: InstId = InstId::new(162);
pub const OP_C_FLD: InstId = InstId::new(163);
pub const OP_C_LW: InstId = InstId::new(164);
pub const OP_C_FLW: InstId = InstId::new(165);
pub const OP_C_LD: InstId = InstId::new(166);
pub const OP_C_FSD: InstId = InstId::new(167);
pub const OP_C_SW: InstId = InstId::new(168);
pub const OP_C_FSW: InstId = InstId::new(169);
pub const OP_C_SD: InstId = InstId::new(170);
pub const OP_C_NOP: InstId = InstId::new(171);
pub const OP_C_ADDI: InstId = InstId::new(172);
pub const OP_C_JAL: InstId = InstId::new(173);
pub const OP_C_ADDIW: InstId = InstId::new(174);
pub const OP_C_LI: InstId = InstId::new(175);
pub const OP_C_ADDI16SP: InstId = InstId::new(176);
pub const OP_C_LUI: InstId = InstId::new(177);
pub const OP_C_SRLI: InstId = InstId::new(178);
pub const OP_C_SRAI: InstId = InstId::new(179);
pub const OP_C_ANDI: InstId = InstId::new(180);
pub const OP_C_SUB: InstId = InstId::new(181);
pub const OP_C_XOR: InstId = InstId::new(182);
pub const OP_C_OR: InstId = InstId::new(183);
pub const OP_C_AND: InstId = InstId::new(184);
pub const OP_C_SUBW: InstId = InstId::new(185);
pub const OP_C_ADDW: InstId = InstId::new(186);
pub const OP_C_J: InstId = InstId::new(187);
pub const OP_C_BEQZ: InstId = InstId::new(188);
pub const OP_C_BNEZ: InstId = InstId::new(189);
pub const OP_C_SLLI: InstId = InstId::new(190);
pub const OP_C_FLDSP: InstId = InstId::new(191);
pub const OP_C_LWSP: InstId = InstId::new(192);
pub const OP_C_FLWSP: InstId = InstId::new(193);
pub const OP_C_LDSP: InstId = InstId::new(194);
pub const OP_C_JR: InstId = InstId::new(195);
pub const OP_C_MV: InstId = InstId::new(196);
pub const OP_C_EBREAK: InstId = InstId::new(197);
pub const OP_C_JALR: InstId = InstId::new(198);
pub const OP_C_ADD: InstId = InstId::new(199);
pub const OP_C_FSDSP: InstId = InstId::new(200);
pub const OP_C_SWSP: InstId = InstId::new(201);
pub const OP_C_FSWSP: InstId = InstId::new(202);
pub const OP_C_SDSP: InstId = InstId::new(203);

// ===== Fixed-bit masks =====

/// funct3 + quadrant.
const F3: u32 = 0xE003;
/// funct3 + rd field + quadrant (c.nop, c.addi16sp).
const F3_RD: u32 = 0xEF83;
/// funct3 + funct2 + quadrant (c.srli, c.srai, c.andi).
const F3_F2: u32 = 0xEC03;
/// funct6 + funct2 + quadrant (CA format).
const CA: u32 = 0xFC63;
/// funct4 + quadrant (c.mv, c.add).
const F4: u32 = 0xF003;
/// funct4 + rs2 field + quadrant (c.jr, c.jalr).
const F4_RS2: u32 = 0xF07F;
const EXACT: u32 = 0xFFFF;

// ===== Immediate masks =====

const CIW_IMM: u32 = 0x1FE0;
/// CL and CS formats.
const CLS_IMM: u32 = 0x1C60;
/// CI format (and the shift amounts of CB-format shifts).
const CI_IMM: u32 = 0x107C;
const CJ_IMM: u32 = 0x1FFC;
const CB_IMM: u32 = 0x1C7C;
const CSS_IMM: u32 = 0x1F80;

// ===== Operands =====

const RDP: Operand = Operand::int(OperandMode::Write, C_RDP_MASK);
const FRDP: Operand = Operand::fp(OperandMode::Write, C_RDP_MASK);
const RS1P: Operand = Operand::int(OperandMode::Read, C_RS1P_MASK);
const RS1P_RW: Operand = Operand::int(OperandMode::ReadWrite, C_RS1P_MASK);
const RS2P: Operand = Operand::int(OperandMode::Read, C_RDP_MASK);
const FRS2P: Operand = Operand::fp(OperandMode::Read, C_RDP_MASK);
const RD: Operand = Operand::int(OperandMode::Write, C_RD_MASK);
const RD_RW: Operand = Operand::int(OperandMode::ReadWrite, C_RD_MASK);
const FRD: Operand = Operand::fp(OperandMode::Write, C_RD_MASK);
const RS1: Operand = Operand::int(OperandMode::Read, C_RD_MASK);
const RS2: Operand = Operand::int(OperandMode::Read, C_RS2_MASK);
const FRS2: Operand = Operand::fp(OperandMode::Read, C_RS2_MASK);

const RVC: ExtensionSet = ExtensionSet::C;
const RVC_F: ExtensionSet = ExtensionSet::C.union(ExtensionSet::F);
const RVC_D: ExtensionSet = ExtensionSet::C.union(ExtensionSet::D);

const fn c(name: &'static str, id: InstId, code: u32, mask: u32, category: Cat) -> Desc {
    Desc::new(name, id, code, mask, category).requires(RVC)
}

/// Compressed instructions, quadrants 0-2.
pub const C_INSTRUCTIONS: &[Desc] = &[
    // Quadrant 0
    c("c.addi4spn", OP_C_ADDI4SPN, 0x0000, F3, Cat::Int).operands([RDP, Operand::imm(CIW_IMM)]),
    c("c.fld", OP_C_FLD, 0x2000, F3, Cat::Load)
        .operands([FRDP, RS1P, Operand::imm(CLS_IMM)])
        .requires(RVC_D),
    c("c.lw", OP_C_LW, 0x4000, F3, Cat::Load).operands([RDP, RS1P, Operand::imm(CLS_IMM)]),
    c("c.flw", OP_C_FLW, 0x6000, F3, Cat::Load)
        .operands([FRDP, RS1P, Operand::imm(CLS_IMM)])
        .requires(RVC_F)
        .rv32_only(),
    c("c.ld", OP_C_LD, 0x6000, F3, Cat::Load)
        .operands([RDP, RS1P, Operand::imm(CLS_IMM)])
        .rv64_only(),
    c("c.fsd", OP_C_FSD, 0xA000, F3, Cat::Store)
        .operands([FRS2P, RS1P, Operand::imm(CLS_IMM)])
        .requires(RVC_D),
    c("c.sw", OP_C_SW, 0xC000, F3, Cat::Store).operands([RS2P, RS1P, Operand::imm(CLS_IMM)]),
    c("c.fsw", OP_C_FSW, 0xE000, F3, Cat::Store)
        .operands([FRS2P, RS1P, Operand::imm(CLS_IMM)])
        .requires(RVC_F)
        .rv32_only(),
    c("c.sd", OP_C_SD, 0xE000, F3, Cat::Store)
        .operands([RS2P, RS1P, Operand::imm(CLS_IMM)])
        .rv64_only(),
    // Quadrant 1
    c("c.nop", OP_C_NOP, 0x0001, F3_RD, Cat::Int).operands([Operand::imm(CI_IMM)]),
    c("c.addi", OP_C_ADDI, 0x0001, F3, Cat::Int).operands([RD_RW, Operand::imm(CI_IMM)]),
    c("c.jal", OP_C_JAL, 0x2001, F3, Cat::Branch)
        .operands([Operand::imm(CJ_IMM)])
        .rv32_only(),
    c("c.addiw", OP_C_ADDIW, 0x2001, F3, Cat::Int)
        .operands([RD_RW, Operand::imm(CI_IMM)])
        .rv64_only(),
    c("c.li", OP_C_LI, 0x4001, F3, Cat::Int).operands([RD, Operand::imm(CI_IMM)]),
    c("c.addi16sp", OP_C_ADDI16SP, 0x6101, F3_RD, Cat::Int).operands([Operand::imm(CI_IMM)]),
    c("c.lui", OP_C_LUI, 0x6001, F3, Cat::Int).operands([RD, Operand::imm(CI_IMM)]),
    c("c.srli", OP_C_SRLI, 0x8001, F3_F2, Cat::Int).operands([RS1P_RW, Operand::imm(CI_IMM)]),
    c("c.srai", OP_C_SRAI, 0x8401, F3_F2, Cat::Int).operands([RS1P_RW, Operand::imm(CI_IMM)]),
    c("c.andi", OP_C_ANDI, 0x8801, F3_F2, Cat::Int).operands([RS1P_RW, Operand::imm(CI_IMM)]),
    c("c.sub", OP_C_SUB, 0x8C01, CA, Cat::Int).operands([RS1P_RW, RS2P]),
    c("c.xor", OP_C_XOR, 0x8C21, CA, Cat::Int).operands([RS1P_RW, RS2P]),
    c("c.or", OP_C_OR, 0x8C41, CA, Cat::Int).operands([RS1P_RW, RS2P]),
    c("c.and", OP_C_AND, 0x8C61, CA, Cat::Int).operands([RS1P_RW, RS2P]),
    c("c.subw", OP_C_SUBW, 0x9C01, CA, Cat::Int)
        .operands([RS1P_RW, RS2P])
        .rv64_only(),
    c("c.addw", OP_C_ADDW, 0x9C21, CA, Cat::Int)
        .operands([RS1P_RW, RS2P])
        .rv64_only(),
    c("c.j", OP_C_J, 0xA001, F3, Cat::Branch).operands([Operand::imm(CJ_IMM)]),
    c("c.beqz", OP_C_BEQZ, 0xC001, F3, Cat::Branch).operands([RS1P, Operand::imm(CB_IMM)]),
    c("c.bnez", OP_C_BNEZ, 0xE001, F3, Cat::Branch).operands([RS1P, Operand::imm(CB_IMM)]),
    // Quadrant 2
    c("c.slli", OP_C_SLLI, 0x0002, F3, Cat::Int).operands([RD_RW, Operand::imm(CI_IMM)]),
    c("c.fldsp", OP_C_FLDSP, 0x2002, F3, Cat::Load)
        .operands([FRD, Operand::imm(CI_IMM)])
        .requires(RVC_D),
    c("c.lwsp", OP_C_LWSP, 0x4002, F3, Cat::Load).operands([RD, Operand::imm(CI_IMM)]),
    c("c.flwsp", OP_C_FLWSP, 0x6002, F3, Cat::Load)
        .operands([FRD, Operand::imm(CI_IMM)])
        .requires(RVC_F)
        .rv32_only(),
    c("c.ldsp", OP_C_LDSP, 0x6002, F3, Cat::Load)
        .operands([RD, Operand::imm(CI_IMM)])
        .rv64_only(),
    c("c.jr", OP_C_JR, 0x8002, F4_RS2, Cat::Branch).operands([RS1]),
    c("c.mv", OP_C_MV, 0x8002, F4, Cat::Int).operands([RD, RS2]),
    c("c.ebreak", OP_C_EBREAK, 0x9002, EXACT, Cat::Int),
    c("c.jalr", OP_C_JALR, 0x9002, F4_RS2, Cat::Branch).operands([RS1]),
    c("c.add", OP_C_ADD, 0x9002, F4, Cat::Int).operands([RD_RW, RS2]),
    c("c.fsdsp", OP_C_FSDSP, 0xA002, F3, Cat::Store)
        .operands([FRS2, Operand::imm(CSS_IMM)])
        .requires(RVC_D),
    c("c.swsp", OP_C_SWSP, 0xC002, F3, Cat::Store).operands([RS2, Operand::imm(CSS_IMM)]),
    c("c.fswsp", OP_C_FSWSP, 0xE002, F3, Cat::Store)
        .operands([FRS2, Operand::imm(CSS_IMM)])
        .requires(RVC_F)
        .rv32_only(),
    c("c.sdsp", OP_C_SDSP, 0xE002, F3, Cat::Store)
        .operands([RS2, Operand::imm(CSS_IMM)])
        .rv64_only(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_compressed;

    #[test]
    fn test_all_compressed() {
        for desc in C_INSTRUCTIONS {
            assert!(is_compressed(desc.code()), "{}", desc.name());
            assert_eq!(desc.mask() & !0xFFFF, 0, "{}", desc.name());
            assert_eq!(desc.size(), 2);
        }
    }

    #[test]
    fn test_width_variants_share_encoding() {
        let pairs = [
            (OP_C_FLW, OP_C_LD),
            (OP_C_FSW, OP_C_SD),
            (OP_C_JAL, OP_C_ADDIW),
            (OP_C_FLWSP, OP_C_LDSP),
            (OP_C_FSWSP, OP_C_SDSP),
        ];
        let by_id = |id: InstId| {
            C_INSTRUCTIONS
                .iter()
                .find(|d| d.id() == id)
                .copied()
                .unwrap()
        };
        for (rv32, rv64) in pairs {
            let (a, b) = (by_id(rv32), by_id(rv64));
            assert_eq!((a.code(), a.mask()), (b.code(), b.mask()));
            assert!(a.xlen().admits(32) && !a.xlen().admits(64));
            assert!(b.xlen().admits(64) && !b.xlen().admits(32));
        }
    }
}
