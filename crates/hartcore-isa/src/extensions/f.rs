//! F extension (single-precision floating point).
//!
//! Arithmetic instructions leave the rounding-mode field (bits [14:12])
//! free; it is neither fixed nor an operand. The fused multiply-add forms
//! (R4 format) also leave rs3 free: see [`RS3_MASK`](crate::RS3_MASK).

use super::{F_RD, F_RS1, F_RS2, F3_MASK, X_RD, X_RS1};
use crate::{
    ExtensionSet, I_IMM_MASK, InstCategory as Cat, InstId, InstructionDescriptor as Desc, Operand,
    S_IMM_MASK,
};

pub const OP_FLW: InstId = InstId::new(95);
pub const OP_FSW: InstId = InstId::new(96);
pub const OP_FADD_S: InstId = InstId::new(97);
pub const OP_FSUB_S: InstId = InstId::new(98);
pub const OP_FMUL_S: InstId = InstId::new(99);
pub const OP_FDIV_S: InstId = InstId::new(100);
pub const OP_FSQRT_S: InstId = InstId::new(101);
pub const OP_FSGNJ_S: InstId = InstId::new(102);
pub const OP_FSGNJN_S: InstId = InstId::new(103);
pub const OP_FSGNJX_S: InstId = InstId::new(104);
pub const OP_FMIN_S: InstId = InstId::new(105);
pub const OP_FMAX_S: InstId = InstId::new(106);
pub const OP_FCVT_W_S: InstId = InstId::new(107);
pub const OP_FCVT_WU_S: InstId = InstId::new(108);
pub const OP_FMV_X_W: InstId = InstId::new(109);
pub const OP_FEQ_S: InstId = InstId::new(110);
pub const OP_FLT_S: InstId = InstId::new(111);
pub const OP_FLE_S: InstId = InstId::new(112);
pub const OP_FCLASS_S: InstId = InstId::new(113);
pub const OP_FCVT_S_W: InstId = InstId::new(114);
pub const OP_FCVT_S_WU: InstId = InstId::new(115);
pub const OP_FMV_W_X: InstId = InstId::new(116);
pub const OP_FMADD_S: InstId = InstId::new(117);
pub const OP_FMSUB_S: InstId = InstId::new(118);
pub const OP_FNMSUB_S: InstId = InstId::new(119);
pub const OP_FNMADD_S: InstId = InstId::new(120);
pub const OP_FCVT_L_S: InstId = InstId::new(121);
pub const OP_FCVT_LU_S: InstId = InstId::new(122);
pub const OP_FCVT_S_L: InstId = InstId::new(123);
pub const OP_FCVT_S_LU: InstId = InstId::new(124);

/// funct7 + opcode; rounding mode free.
pub(super) const FP_RM_MASK: u32 = 0xFE00_007F;
/// funct7 + funct3 + opcode.
pub(super) const FP_F3_MASK: u32 = 0xFE00_707F;
/// funct7 + rs2 selector + opcode; rounding mode free.
pub(super) const FP_UNARY_RM_MASK: u32 = 0xFFF0_007F;
/// funct7 + rs2 selector + funct3 + opcode.
pub(super) const FP_UNARY_F3_MASK: u32 = 0xFFF0_707F;
/// fmt + opcode (R4 format); rs3 and rounding mode free.
const FP_FUSED_MASK: u32 = 0x0600_007F;

pub(super) const fn fp_binary(name: &'static str, id: InstId, code: u32, mask: u32) -> Desc {
    Desc::new(name, id, code, mask, Cat::Float).operands([F_RD, F_RS1, F_RS2])
}

pub(super) const fn fp_unary(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, FP_UNARY_RM_MASK, Cat::Float).operands([F_RD, F_RS1])
}

/// Fused multiply-add: rd, rs1, rs2 in the slots, rs3 outside them.
pub(super) const fn fp_fused(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, FP_FUSED_MASK, Cat::Float).operands([F_RD, F_RS1, F_RS2])
}

/// Comparison writing an integer register.
pub(super) const fn fp_compare(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, FP_F3_MASK, Cat::Float).operands([X_RD, F_RS1, F_RS2])
}

/// FP register to integer register (conversions, moves, fclass).
pub(super) const fn fp_to_int(name: &'static str, id: InstId, code: u32, mask: u32) -> Desc {
    Desc::new(name, id, code, mask, Cat::Float).operands([X_RD, F_RS1])
}

/// Integer register to FP register (conversions, moves).
pub(super) const fn int_to_fp(name: &'static str, id: InstId, code: u32, mask: u32) -> Desc {
    Desc::new(name, id, code, mask, Cat::Float).operands([F_RD, X_RS1])
}

pub(super) const fn fp_load(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Load).operands([F_RD, X_RS1, Operand::imm(I_IMM_MASK)])
}

pub(super) const fn fp_store(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, F3_MASK, Cat::Store).operands([F_RS2, X_RS1, Operand::imm(S_IMM_MASK)])
}

/// Single-precision instructions.
pub const F_INSTRUCTIONS: &[Desc] = &[
    fp_load("flw", OP_FLW, 0x0000_2007).requires(ExtensionSet::F),
    fp_store("fsw", OP_FSW, 0x0000_2027).requires(ExtensionSet::F),
    fp_binary("fadd.s", OP_FADD_S, 0x0000_0053, FP_RM_MASK).requires(ExtensionSet::F),
    fp_binary("fsub.s", OP_FSUB_S, 0x0800_0053, FP_RM_MASK).requires(ExtensionSet::F),
    fp_binary("fmul.s", OP_FMUL_S, 0x1000_0053, FP_RM_MASK).requires(ExtensionSet::F),
    fp_binary("fdiv.s", OP_FDIV_S, 0x1800_0053, FP_RM_MASK).requires(ExtensionSet::F),
    fp_unary("fsqrt.s", OP_FSQRT_S, 0x5800_0053).requires(ExtensionSet::F),
    fp_binary("fsgnj.s", OP_FSGNJ_S, 0x2000_0053, FP_F3_MASK).requires(ExtensionSet::F),
    fp_binary("fsgnjn.s", OP_FSGNJN_S, 0x2000_1053, FP_F3_MASK).requires(ExtensionSet::F),
    fp_binary("fsgnjx.s", OP_FSGNJX_S, 0x2000_2053, FP_F3_MASK).requires(ExtensionSet::F),
    fp_binary("fmin.s", OP_FMIN_S, 0x2800_0053, FP_F3_MASK).requires(ExtensionSet::F),
    fp_binary("fmax.s", OP_FMAX_S, 0x2800_1053, FP_F3_MASK).requires(ExtensionSet::F),
    fp_to_int("fcvt.w.s", OP_FCVT_W_S, 0xC000_0053, FP_UNARY_RM_MASK).requires(ExtensionSet::F),
    fp_to_int("fcvt.wu.s", OP_FCVT_WU_S, 0xC010_0053, FP_UNARY_RM_MASK).requires(ExtensionSet::F),
    fp_to_int("fmv.x.w", OP_FMV_X_W, 0xE000_0053, FP_UNARY_F3_MASK).requires(ExtensionSet::F),
    fp_compare("feq.s", OP_FEQ_S, 0xA000_2053).requires(ExtensionSet::F),
    fp_compare("flt.s", OP_FLT_S, 0xA000_1053).requires(ExtensionSet::F),
    fp_compare("fle.s", OP_FLE_S, 0xA000_0053).requires(ExtensionSet::F),
    fp_to_int("fclass.s", OP_FCLASS_S, 0xE000_1053, FP_UNARY_F3_MASK).requires(ExtensionSet::F),
    int_to_fp("fcvt.s.w", OP_FCVT_S_W, 0xD000_0053, FP_UNARY_RM_MASK).requires(ExtensionSet::F),
    int_to_fp("fcvt.s.wu", OP_FCVT_S_WU, 0xD010_0053, FP_UNARY_RM_MASK).requires(ExtensionSet::F),
    int_to_fp("fmv.w.x", OP_FMV_W_X, 0xF000_0053, FP_UNARY_F3_MASK).requires(ExtensionSet::F),
    fp_fused("fmadd.s", OP_FMADD_S, 0x0000_0043).requires(ExtensionSet::F),
    fp_fused("fmsub.s", OP_FMSUB_S, 0x0000_0047).requires(ExtensionSet::F),
    fp_fused("fnmsub.s", OP_FNMSUB_S, 0x0000_004B).requires(ExtensionSet::F),
    fp_fused("fnmadd.s", OP_FNMADD_S, 0x0000_004F).requires(ExtensionSet::F),
    // RV64F
    fp_to_int("fcvt.l.s", OP_FCVT_L_S, 0xC020_0053, FP_UNARY_RM_MASK)
        .requires(ExtensionSet::F)
        .rv64_only(),
    fp_to_int("fcvt.lu.s", OP_FCVT_LU_S, 0xC030_0053, FP_UNARY_RM_MASK)
        .requires(ExtensionSet::F)
        .rv64_only(),
    int_to_fp("fcvt.s.l", OP_FCVT_S_L, 0xD020_0053, FP_UNARY_RM_MASK)
        .requires(ExtensionSet::F)
        .rv64_only(),
    int_to_fp("fcvt.s.lu", OP_FCVT_S_LU, 0xD030_0053, FP_UNARY_RM_MASK)
        .requires(ExtensionSet::F)
        .rv64_only(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OperandType, RS3_MASK};

    fn single(id: InstId) -> Desc {
        F_INSTRUCTIONS[id.index() - OP_FLW.index()]
    }

    #[test]
    fn test_f_ids_follow_slice_order() {
        for (i, desc) in F_INSTRUCTIONS.iter().enumerate() {
            assert_eq!(desc.id().index(), OP_FLW.index() + i, "{}", desc.name());
        }
    }

    #[test]
    fn test_fp_moves_cross_register_files() {
        let fmv_x_w = single(OP_FMV_X_W);
        assert_eq!(fmv_x_w.name(), "fmv.x.w");
        assert_eq!(fmv_x_w.operand_type(0), OperandType::IntReg);
        assert_eq!(fmv_x_w.operand_type(1), OperandType::FpReg);

        let fmv_w_x = single(OP_FMV_W_X);
        assert_eq!(fmv_w_x.operand_type(0), OperandType::FpReg);
        assert_eq!(fmv_w_x.operand_type(1), OperandType::IntReg);
    }

    #[test]
    fn test_fp_load_store_category() {
        assert!(F_INSTRUCTIONS[0].is_load());
        assert!(F_INSTRUCTIONS[1].is_store());
        assert!(F_INSTRUCTIONS[2].is_float());
    }

    #[test]
    fn test_fused_leaves_rs3_free() {
        // fmadd.s f1, f2, f3, f4
        let word = 0x2031_70C3;
        let fmadd = single(OP_FMADD_S);
        assert!(fmadd.matches(word));
        assert_eq!(fmadd.mask() & RS3_MASK, 0);
        assert_eq!(fmadd.operand_bits(0, word), 1);
        assert_eq!(fmadd.operand_bits(1, word), 2);
        assert_eq!(fmadd.operand_bits(2, word), 3);
        assert_eq!((word & RS3_MASK) >> 27, 4);
        for i in 0..3 {
            assert_eq!(fmadd.operand_mask(i) & RS3_MASK, 0);
        }
    }

    #[test]
    fn test_long_conversions_rv64_only() {
        for id in [OP_FCVT_L_S, OP_FCVT_LU_S, OP_FCVT_S_L, OP_FCVT_S_LU] {
            let desc = single(id);
            assert!(desc.xlen().admits(64) && !desc.xlen().admits(32), "{}", desc.name());
        }
    }
}
