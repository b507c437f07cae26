//! Base I extension (RV32I/RV64I).

use super::{EXACT_MASK, F3_MASK, OPCODE_MASK, R_MASK, X_RD, X_RS1, X_RS2};
use crate::{
    I_IMM_MASK, InstCategory as Cat, InstId, InstructionDescriptor as Desc, Operand, S_IMM_MASK,
    SHAMT_MASK, SHAMTW_MASK, U_IMM_MASK,
};

// ===== InstId Constants =====

pub const OP_LUI: InstId = InstId::new(1);
pub const OP_AUIPC: InstId = InstId::new(2);
pub const OP_JAL: InstId = InstId::new(3);
pub const OP_JALR: InstId = InstId::new(4);
pub const OP_BEQ: InstId = InstId::new(5);
pub const OP_BNE: InstId = InstId::new(6);
pub const OP_BLT: InstId = InstId::new(7);
pub const OP_BGE: InstId = InstId::new(8);
pub const OP_BLTU: InstId = InstId::new(9);
pub const OP_BGEU: InstId = InstId::new(10);
pub const OP_LB: InstId = InstId::new(11);
pub const OP_LH: InstId = InstId::new(12);
pub const OP_LW: InstId = InstId::new(13);
pub const OP_LBU: InstId = InstId::new(14);
pub const OP_LHU: InstId = InstId::new(15);
pub const OP_SB: InstId = InstId::new(16);
pub const OP_SH: InstId = InstId::new(17);
pub const OP_SW: InstId = InstId::new(18);
pub const OP_ADDI: InstId = InstId::new(19);
pub const OP_SLTI: InstId = InstId::new(20);
pub const OP_SLTIU: InstId = InstId::new(21);
pub const OP_XORI: InstId = InstId::new(22);
pub const OP_ORI: InstId = InstId::new(23);
pub const OP_ANDI: InstId = InstId::new(24);
pub const OP_SLLI: InstId = InstId::new(25);
pub const OP_SRLI: InstId = InstId::new(26);
pub const OP_SRAI: InstId = InstId::new(27);
pub const OP_ADD: InstId = InstId::new(28);
pub const OP_SUB: InstId = InstId::new(29);
pub const OP_SLL: InstId = InstId::new(30);
pub const OP_SLT: InstId = InstId::new(31);
pub const OP_SLTU: InstId = InstId::new(32);
pub const OP_XOR: InstId = InstId::new(33);
pub const OP_SRL: InstId = InstId::new(34);
pub const OP_SRA: InstId = InstId::new(35);
pub const OP_OR: InstId = InstId::new(36);
pub const OP_AND: InstId = InstId::new(37);
pub const OP_FENCE: InstId = InstId::new(38);
pub const OP_ECALL: InstId = InstId::new(39);
pub const OP_EBREAK: InstId = InstId::new(40);
// RV64I
pub const OP_LWU: InstId = InstId::new(41);
pub const OP_LD: InstId = InstId::new(42);
pub const OP_SD: InstId = InstId::new(43);
pub const OP_ADDIW: InstId = InstId::new(44);
pub const OP_SLLIW: InstId = InstId::new(45);
pub const OP_SRLIW: InstId = InstId::new(46);
pub const OP_SRAIW: InstId = InstId::new(47);
pub const OP_ADDW: InstId = InstId::new(48);
pub const OP_SUBW: InstId = InstId::new(49);
pub const OP_SLLW: InstId = InstId::new(50);
pub const OP_SRLW: InstId = InstId::new(51);
pub const OP_SRAW: InstId = InstId::new(52);

/// Shift-immediate mask: opcode, funct3 and the top six bits above shamt.
const SHIFT_MASK: u32 = 0xFC00_707F;
/// fence predecessor set, bits [27:24].
const FENCE_PRED_MASK: u32 = 0x0F00_0000;
/// fence successor set, bits [23:20].
const FENCE_SUCC_MASK: u32 = 0x00F0_0000;

const I_IMM: Operand = Operand::imm(I_IMM_MASK);
const S_IMM: Operand = Operand::imm(S_IMM_MASK);
const U_IMM: Operand = Operand::imm(U_IMM_MASK);

const fn r_type(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, R_MASK, Cat::Int).operands([X_RD, X_RS1, X_RS2])
}

const fn i_type(name: &'static str, id: InstId, code: u32, category: Cat) -> Desc {
    Desc::new(name, id, code, F3_MASK, category).operands([X_RD, X_RS1, I_IMM])
}

const fn store(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Store).operands([X_RS2, X_RS1, S_IMM])
}

const fn branch(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Branch).operands([X_RS1, X_RS2, S_IMM])
}

const fn shift_imm(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, SHIFT_MASK, Cat::Int).operands([X_RD, X_RS1, Operand::imm(SHAMT_MASK)])
}

const fn shift_imm_w(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, R_MASK, Cat::Int)
        .operands([X_RD, X_RS1, Operand::imm(SHAMTW_MASK)])
        .rv64_only()
}

/// Base integer instructions.
pub const BASE_INSTRUCTIONS: &[Desc] = &[
    Desc::new("lui", OP_LUI, 0x0000_0037, OPCODE_MASK, Cat::Int).operands([X_RD, U_IMM]),
    Desc::new("auipc", OP_AUIPC, 0x0000_0017, OPCODE_MASK, Cat::Int).operands([X_RD, U_IMM]),
    Desc::new("jal", OP_JAL, 0x0000_006F, OPCODE_MASK, Cat::Branch).operands([X_RD, U_IMM]),
    i_type("jalr", OP_JALR, 0x0000_0067, Cat::Branch),
    branch("beq", OP_BEQ, 0x0000_0063),
    branch("bne", OP_BNE, 0x0000_1063),
    branch("blt", OP_BLT, 0x0000_4063),
    branch("bge", OP_BGE, 0x0000_5063),
    branch("bltu", OP_BLTU, 0x0000_6063),
    branch("bgeu", OP_BGEU, 0x0000_7063),
    i_type("lb", OP_LB, 0x0000_0003, Cat::Load),
    i_type("lh", OP_LH, 0x0000_1003, Cat::Load),
    i_type("lw", OP_LW, 0x0000_2003, Cat::Load),
    i_type("lbu", OP_LBU, 0x0000_4003, Cat::Load),
    i_type("lhu", OP_LHU, 0x0000_5003, Cat::Load),
    store("sb", OP_SB, 0x0000_0023),
    store("sh", OP_SH, 0x0000_1023),
    store("sw", OP_SW, 0x0000_2023),
    i_type("addi", OP_ADDI, 0x0000_0013, Cat::Int),
    i_type("slti", OP_SLTI, 0x0000_2013, Cat::Int),
    i_type("sltiu", OP_SLTIU, 0x0000_3013, Cat::Int),
    i_type("xori", OP_XORI, 0x0000_4013, Cat::Int),
    i_type("ori", OP_ORI, 0x0000_6013, Cat::Int),
    i_type("andi", OP_ANDI, 0x0000_7013, Cat::Int),
    shift_imm("slli", OP_SLLI, 0x0000_1013),
    shift_imm("srli", OP_SRLI, 0x0000_5013),
    shift_imm("srai", OP_SRAI, 0x4000_5013),
    r_type("add", OP_ADD, 0x0000_0033),
    r_type("sub", OP_SUB, 0x4000_0033),
    r_type("sll", OP_SLL, 0x0000_1033),
    r_type("slt", OP_SLT, 0x0000_2033),
    r_type("sltu", OP_SLTU, 0x0000_3033),
    r_type("xor", OP_XOR, 0x0000_4033),
    r_type("srl", OP_SRL, 0x0000_5033),
    r_type("sra", OP_SRA, 0x4000_5033),
    r_type("or", OP_OR, 0x0000_6033),
    r_type("and", OP_AND, 0x0000_7033),
    Desc::new("fence", OP_FENCE, 0x0000_000F, F3_MASK, Cat::Int)
        .operands([Operand::imm(FENCE_PRED_MASK), Operand::imm(FENCE_SUCC_MASK)]),
    Desc::new("ecall", OP_ECALL, 0x0000_0073, EXACT_MASK, Cat::Int),
    Desc::new("ebreak", OP_EBREAK, 0x0010_0073, EXACT_MASK, Cat::Int),
    // RV64I
    i_type("lwu", OP_LWU, 0x0000_6003, Cat::Load).rv64_only(),
    i_type("ld", OP_LD, 0x0000_3003, Cat::Load).rv64_only(),
    store("sd", OP_SD, 0x0000_3023).rv64_only(),
    i_type("addiw", OP_ADDIW, 0x0000_001B, Cat::Int).rv64_only(),
    shift_imm_w("slliw", OP_SLLIW, 0x0000_101B),
    shift_imm_w("srliw", OP_SRLIW, 0x0000_501B),
    shift_imm_w("sraiw", OP_SRAIW, 0x4000_501B),
    r_type("addw", OP_ADDW, 0x0000_003B).rv64_only(),
    r_type("subw", OP_SUBW, 0x4000_003B).rv64_only(),
    r_type("sllw", OP_SLLW, 0x0000_103B).rv64_only(),
    r_type("srlw", OP_SRLW, 0x0000_503B).rv64_only(),
    r_type("sraw", OP_SRAW, 0x4000_503B).rv64_only(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_ids_dense() {
        for (i, desc) in BASE_INSTRUCTIONS.iter().enumerate() {
            assert_eq!(desc.id().index(), i + 1, "{}", desc.name());
        }
    }

    #[test]
    fn test_branch_operands_read_only() {
        let beq = BASE_INSTRUCTIONS[OP_BEQ.index() - 1];
        assert!(beq.is_branch());
        assert!(beq.is_read(0) && beq.is_read(1));
        assert!(!beq.is_write(0) && !beq.is_write(1));
    }
}
