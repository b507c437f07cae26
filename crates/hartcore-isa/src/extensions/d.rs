//! D extension (double-precision floating point).
//!
//! Same formats as F with fmt = 01 (bit 25 set).

use super::f::{
    FP_F3_MASK, FP_RM_MASK, FP_UNARY_F3_MASK, FP_UNARY_RM_MASK, fp_binary, fp_compare, fp_fused,
    fp_load, fp_store, fp_to_int, fp_unary, int_to_fp,
};
use crate::{ExtensionSet, InstId, InstructionDescriptor as Desc};

pub const OP_FLD: InstId = InstId::new(125);
pub const OP_FSD: InstId = InstId::new(126);
pub const OP_FADD_D: InstId = InstId::new(127);
pub const OP_FSUB_D: InstId = InstId::new(128);
pub const OP_FMUL_D: InstId = InstId::new(129);
pub const OP_FDIV_D: InstId = InstId::new(130);
pub const OP_FSQRT_D: InstId = InstId::new(131);
pub const OP_FMADD_D: InstId = InstId::new(132);
pub const OP_FMSUB_D: InstId = InstId::new(133);
pub const OP_FNMSUB_D: InstId = InstId::new(134);
pub const OP_FNMADD_D: InstId = InstId::new(135);
pub const OP_FSGNJ_D: InstId = InstId::new(136);
pub const OP_FSGNJN_D: InstId = InstId::new(137);
pub const OP_FSGNJX_D: InstId = InstId::new(138);
pub const OP_FMIN_D: InstId = InstId::new(139);
pub const OP_FMAX_D: InstId = InstId::new(140);
pub const OP_FCVT_S_D: InstId = InstId::new(141);
pub const OP_FCVT_D_S: InstId = InstId::new(142);
pub const OP_FEQ_D: InstId = InstId::new(143);
pub const OP_FLT_D: InstId = InstId::new(144);
pub const OP_FLE_D: InstId = InstId::new(145);
pub const OP_FCLASS_D: InstId = InstId::new(146);
pub const OP_FCVT_W_D: InstId = InstId::new(147);
pub const OP_FCVT_WU_D: InstId = InstId::new(148);
pub const OP_FCVT_D_W: InstId = InstId::new(149);
pub const OP_FCVT_D_WU: InstId = InstId::new(150);
pub const OP_FCVT_L_D: InstId = InstId::new(151);
pub const OP_FCVT_LU_D: InstId = InstId::new(152);
pub const OP_FCVT_D_L: InstId = InstId::new(153);
pub const OP_FCVT_D_LU: InstId = InstId::new(154);
pub const OP_FMV_X_D: InstId = InstId::new(155);
pub const OP_FMV_D_X: InstId = InstId::new(156);

const D: ExtensionSet = ExtensionSet::D;

/// Double-precision instructions.
pub const D_INSTRUCTIONS: &[Desc] = &[
    fp_load("fld", OP_FLD, 0x0000_3007).requires(D),
    fp_store("fsd", OP_FSD, 0x0000_3027).requires(D),
    fp_binary("fadd.d", OP_FADD_D, 0x0200_0053, FP_RM_MASK).requires(D),
    fp_binary("fsub.d", OP_FSUB_D, 0x0A00_0053, FP_RM_MASK).requires(D),
    fp_binary("fmul.d", OP_FMUL_D, 0x1200_0053, FP_RM_MASK).requires(D),
    fp_binary("fdiv.d", OP_FDIV_D, 0x1A00_0053, FP_RM_MASK).requires(D),
    fp_unary("fsqrt.d", OP_FSQRT_D, 0x5A00_0053).requires(D),
    fp_fused("fmadd.d", OP_FMADD_D, 0x0200_0043).requires(D),
    fp_fused("fmsub.d", OP_FMSUB_D, 0x0200_0047).requires(D),
    fp_fused("fnmsub.d", OP_FNMSUB_D, 0x0200_004B).requires(D),
    fp_fused("fnmadd.d", OP_FNMADD_D, 0x0200_004F).requires(D),
    fp_binary("fsgnj.d", OP_FSGNJ_D, 0x2200_0053, FP_F3_MASK).requires(D),
    fp_binary("fsgnjn.d", OP_FSGNJN_D, 0x2200_1053, FP_F3_MASK).requires(D),
    fp_binary("fsgnjx.d", OP_FSGNJX_D, 0x2200_2053, FP_F3_MASK).requires(D),
    fp_binary("fmin.d", OP_FMIN_D, 0x2A00_0053, FP_F3_MASK).requires(D),
    fp_binary("fmax.d", OP_FMAX_D, 0x2A00_1053, FP_F3_MASK).requires(D),
    fp_unary("fcvt.s.d", OP_FCVT_S_D, 0x4010_0053).requires(D),
    fp_unary("fcvt.d.s", OP_FCVT_D_S, 0x4200_0053).requires(D),
    fp_compare("feq.d", OP_FEQ_D, 0xA200_2053).requires(D),
    fp_compare("flt.d", OP_FLT_D, 0xA200_1053).requires(D),
    fp_compare("fle.d", OP_FLE_D, 0xA200_0053).requires(D),
    fp_to_int("fclass.d", OP_FCLASS_D, 0xE200_1053, FP_UNARY_F3_MASK).requires(D),
    fp_to_int("fcvt.w.d", OP_FCVT_W_D, 0xC200_0053, FP_UNARY_RM_MASK).requires(D),
    fp_to_int("fcvt.wu.d", OP_FCVT_WU_D, 0xC210_0053, FP_UNARY_RM_MASK).requires(D),
    int_to_fp("fcvt.d.w", OP_FCVT_D_W, 0xD200_0053, FP_UNARY_RM_MASK).requires(D),
    int_to_fp("fcvt.d.wu", OP_FCVT_D_WU, 0xD210_0053, FP_UNARY_RM_MASK).requires(D),
    // RV64D
    fp_to_int("fcvt.l.d", OP_FCVT_L_D, 0xC220_0053, FP_UNARY_RM_MASK)
        .requires(D)
        .rv64_only(),
    fp_to_int("fcvt.lu.d", OP_FCVT_LU_D, 0xC230_0053, FP_UNARY_RM_MASK)
        .requires(D)
        .rv64_only(),
    int_to_fp("fcvt.d.l", OP_FCVT_D_L, 0xD220_0053, FP_UNARY_RM_MASK)
        .requires(D)
        .rv64_only(),
    int_to_fp("fcvt.d.lu", OP_FCVT_D_LU, 0xD230_0053, FP_UNARY_RM_MASK)
        .requires(D)
        .rv64_only(),
    fp_to_int("fmv.x.d", OP_FMV_X_D, 0xE200_0053, FP_UNARY_F3_MASK)
        .requires(D)
        .rv64_only(),
    int_to_fp("fmv.d.x", OP_FMV_D_X, 0xF200_0053, FP_UNARY_F3_MASK)
        .requires(D)
        .rv64_only(),
];
