//! Operand metadata: what an operand selects and how it is accessed.

/// Kind of value an operand specifier selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OperandType {
    /// Integer register (x0-x31).
    IntReg,
    /// Floating-point register (f0-f31).
    FpReg,
    /// Control and status register.
    CsReg,
    /// Immediate value.
    Imm,
    /// No operand in this slot.
    #[default]
    None,
}

/// How an instruction accesses an operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OperandMode {
    Read,
    Write,
    ReadWrite,
    #[default]
    None,
}

impl OperandMode {
    /// True for `Read` and `ReadWrite`.
    #[must_use]
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// True for `Write` and `ReadWrite`.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// One operand slot of an instruction descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Operand {
    pub ty: OperandType,
    pub mode: OperandMode,
    /// Bits of the instruction word that carry this operand's specifier.
    pub mask: u32,
}

impl Operand {
    /// Empty slot.
    pub const NONE: Self = Self {
        ty: OperandType::None,
        mode: OperandMode::None,
        mask: 0,
    };

    #[must_use]
    pub const fn new(ty: OperandType, mode: OperandMode, mask: u32) -> Self {
        Self { ty, mode, mask }
    }

    /// Integer register operand.
    #[must_use]
    pub const fn int(mode: OperandMode, mask: u32) -> Self {
        Self::new(OperandType::IntReg, mode, mask)
    }

    /// Floating-point register operand.
    #[must_use]
    pub const fn fp(mode: OperandMode, mask: u32) -> Self {
        Self::new(OperandType::FpReg, mode, mask)
    }

    /// CSR operand (always read-write from the table's point of view).
    #[must_use]
    pub const fn csr(mask: u32) -> Self {
        Self::new(OperandType::CsReg, OperandMode::ReadWrite, mask)
    }

    /// Immediate operand.
    #[must_use]
    pub const fn imm(mask: u32) -> Self {
        Self::new(OperandType::Imm, OperandMode::Read, mask)
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.ty, OperandType::None)
    }
}

// ===== Specifier masks (32-bit formats) =====

/// rd, bits [11:7].
pub const RD_MASK: u32 = 0x0000_0F80;
/// rs1, bits [19:15].
pub const RS1_MASK: u32 = 0x000F_8000;
/// rs2, bits [24:20].
pub const RS2_MASK: u32 = 0x01F0_0000;
/// rs3 of the R4 format, bits [31:27].
///
/// Fused multiply-add descriptors fill their three slots with rd, rs1 and
/// rs2; rs3 has no slot and is read from the word with this mask.
pub const RS3_MASK: u32 = 0xF800_0000;
/// CSR number, bits [31:20].
pub const CSR_MASK: u32 = 0xFFF0_0000;
/// I-type immediate, bits [31:20].
pub const I_IMM_MASK: u32 = 0xFFF0_0000;
/// S-type and B-type immediate, bits [31:25] and [11:7].
pub const S_IMM_MASK: u32 = 0xFE00_0F80;
/// U-type and J-type immediate, bits [31:12].
pub const U_IMM_MASK: u32 = 0xFFFF_F000;
/// 6-bit shift amount, bits [25:20].
pub const SHAMT_MASK: u32 = 0x03F0_0000;
/// 5-bit shift amount of the word shifts, bits [24:20].
pub const SHAMTW_MASK: u32 = 0x01F0_0000;
/// Zero-extended CSR immediate, carried in the rs1 field.
pub const ZIMM_MASK: u32 = RS1_MASK;

// ===== Specifier masks (16-bit formats) =====

/// Full rd/rs1 field of CR/CI formats, bits [11:7].
pub const C_RD_MASK: u32 = 0x0F80;
/// Full rs2 field of CR/CSS formats, bits [6:2].
pub const C_RS2_MASK: u32 = 0x007C;
/// Compressed rd'/rs2' field, bits [4:2].
pub const C_RDP_MASK: u32 = 0x001C;
/// Compressed rs1' field, bits [9:7].
pub const C_RS1P_MASK: u32 = 0x0380;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_predicates() {
        assert!(OperandMode::Read.is_read());
        assert!(!OperandMode::Read.is_write());
        assert!(OperandMode::Write.is_write());
        assert!(!OperandMode::Write.is_read());
        assert!(OperandMode::ReadWrite.is_read());
        assert!(OperandMode::ReadWrite.is_write());
        assert!(!OperandMode::None.is_read());
        assert!(!OperandMode::None.is_write());
    }

    #[test]
    fn test_register_masks_disjoint() {
        assert_eq!(RD_MASK & RS1_MASK, 0);
        assert_eq!(RS1_MASK & RS2_MASK, 0);
        assert_eq!(RD_MASK & RS2_MASK, 0);
        assert_eq!(C_RS1P_MASK & C_RDP_MASK, 0);
        assert_eq!(C_RD_MASK & C_RS2_MASK, 0);
    }
}
