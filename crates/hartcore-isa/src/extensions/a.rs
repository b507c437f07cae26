//! A extension (atomics).
//!
//! `lr` and the AMOs are classified as loads (they return memory contents),
//! `sc` as a store. The aq/rl ordering bits are neither fixed nor operands.

use super::{X_RD, X_RS1, X_RS2};
use crate::{ExtensionSet, InstCategory as Cat, InstId, InstructionDescriptor as Desc};

pub const OP_LR_W: InstId = InstId::new(73);
pub const OP_SC_W: InstId = InstId::new(74);
pub const OP_AMOSWAP_W: InstId = InstId::new(75);
pub const OP_AMOADD_W: InstId = InstId::new(76);
pub const OP_AMOXOR_W: InstId = InstId::new(77);
pub const OP_AMOAND_W: InstId = InstId::new(78);
pub const OP_AMOOR_W: InstId = InstId::new(79);
pub const OP_AMOMIN_W: InstId = InstId::new(80);
pub const OP_AMOMAX_W: InstId = InstId::new(81);
pub const OP_AMOMINU_W: InstId = InstId::new(82);
pub const OP_AMOMAXU_W: InstId = InstId::new(83);
// RV64A
pub const OP_LR_D: InstId = InstId::new(84);
pub const OP_SC_D: InstId = InstId::new(85);
pub const OP_AMOSWAP_D: InstId = InstId::new(86);
pub const OP_AMOADD_D: InstId = InstId::new(87);
pub const OP_AMOXOR_D: InstId = InstId::new(88);
pub const OP_AMOAND_D: InstId = InstId::new(89);
pub const OP_AMOOR_D: InstId = InstId::new(90);
pub const OP_AMOMIN_D: InstId = InstId::new(91);
pub const OP_AMOMAX_D: InstId = InstId::new(92);
pub const OP_AMOMINU_D: InstId = InstId::new(93);
pub const OP_AMOMAXU_D: InstId = InstId::new(94);

/// funct5 + funct3 + opcode; aq/rl and the three registers are free.
const AMO_MASK: u32 = 0xF800_707F;
/// As `AMO_MASK` with the rs2 field fixed to zero.
const LR_MASK: u32 = 0xF9F0_707F;

const fn lr(name: &'static str, id: InstId, code: u32) -> Desc {
    Desc::new(name, id, code, LR_MASK, Cat::Load)
        .operands([X_RD, X_RS1])
        .requires(ExtensionSet::A)
}

const fn amo(name: &'static str, id: InstId, code: u32, category: Cat) -> Desc {
    Desc::new(name, id, code, AMO_MASK, category)
        .operands([X_RD, X_RS1, X_RS2])
        .requires(ExtensionSet::A)
}

/// Atomic memory instructions.
pub const A_INSTRUCTIONS: &[Desc] = &[
    lr("lr.w", OP_LR_W, 0x1000_202F),
    amo("sc.w", OP_SC_W, 0x1800_202F, Cat::Store),
    amo("amoswap.w", OP_AMOSWAP_W, 0x0800_202F, Cat::Load),
    amo("amoadd.w", OP_AMOADD_W, 0x0000_202F, Cat::Load),
    amo("amoxor.w", OP_AMOXOR_W, 0x2000_202F, Cat::Load),
    amo("amoand.w", OP_AMOAND_W, 0x6000_202F, Cat::Load),
    amo("amoor.w", OP_AMOOR_W, 0x4000_202F, Cat::Load),
    amo("amomin.w", OP_AMOMIN_W, 0x8000_202F, Cat::Load),
    amo("amomax.w", OP_AMOMAX_W, 0xA000_202F, Cat::Load),
    amo("amominu.w", OP_AMOMINU_W, 0xC000_202F, Cat::Load),
    amo("amomaxu.w", OP_AMOMAXU_W, 0xE000_202F, Cat::Load),
    lr("lr.d", OP_LR_D, 0x1000_302F).rv64_only(),
    amo("sc.d", OP_SC_D, 0x1800_302F, Cat::Store).rv64_only(),
    amo("amoswap.d", OP_AMOSWAP_D, 0x0800_302F, Cat::Load).rv64_only(),
    amo("amoadd.d", OP_AMOADD_D, 0x0000_302F, Cat::Load).rv64_only(),
    amo("amoxor.d", OP_AMOXOR_D, 0x2000_302F, Cat::Load).rv64_only(),
    amo("amoand.d", OP_AMOAND_D, 0x6000_302F, Cat::Load).rv64_only(),
    amo("amoor.d", OP_AMOOR_D, 0x4000_302F, Cat::Load).rv64_only(),
    amo("amomin.d", OP_AMOMIN_D, 0x8000_302F, Cat::Load).rv64_only(),
    amo("amomax.d", OP_AMOMAX_D, 0xA000_302F, Cat::Load).rv64_only(),
    amo("amominu.d", OP_AMOMINU_D, 0xC000_302F, Cat::Load).rv64_only(),
    amo("amomaxu.d", OP_AMOMAXU_D, 0xE000_302F, Cat::Load).rv64_only(),
];
