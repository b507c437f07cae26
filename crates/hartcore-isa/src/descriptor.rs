//! Instruction descriptors.

use crate::{DecodeConfig, ExtensionSet, InstId, Operand, OperandMode, OperandType, XlenReq};

/// Number of operand slots in a descriptor.
pub const MAX_OPERANDS: usize = 3;

/// Broad instruction category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstCategory {
    Load,
    Store,
    Multiply,
    Divide,
    Branch,
    #[default]
    Int,
    Float,
    Csr,
}

/// Opcode and operand information of one instruction variant.
///
/// A raw word matches the descriptor iff `(word & mask) == code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    name: &'static str,
    id: InstId,
    /// Instruction bits with every operand specifier set to zero.
    code: u32,
    /// One for every bit that is not part of an operand specifier.
    mask: u32,
    category: InstCategory,
    operands: [Operand; MAX_OPERANDS],
    requires: ExtensionSet,
    xlen: XlenReq,
}

impl InstructionDescriptor {
    /// Descriptor with no operands, available in the base ISA at any width.
    #[must_use]
    pub const fn new(
        name: &'static str,
        id: InstId,
        code: u32,
        mask: u32,
        category: InstCategory,
    ) -> Self {
        Self {
            name,
            id,
            code,
            mask,
            category,
            operands: [Operand::NONE; MAX_OPERANDS],
            requires: ExtensionSet::I,
            xlen: XlenReq::Any,
        }
    }

    /// The descriptor returned for anything that does not decode.
    #[must_use]
    pub const fn illegal() -> Self {
        Self::new("illegal", InstId::ILLEGAL, 0, u32::MAX, InstCategory::Int)
            .requires(ExtensionSet::EMPTY)
    }

    /// Set the operand slots; slots past `N` stay empty.
    #[must_use]
    pub const fn operands<const N: usize>(mut self, ops: [Operand; N]) -> Self {
        let mut i = 0;
        while i < N && i < MAX_OPERANDS {
            self.operands[i] = ops[i];
            i += 1;
        }
        self
    }

    /// Extensions that must all be enabled for this variant to exist.
    #[must_use]
    pub const fn requires(mut self, extensions: ExtensionSet) -> Self {
        self.requires = extensions;
        self
    }

    /// Restrict this variant to RV32.
    #[must_use]
    pub const fn rv32_only(mut self) -> Self {
        self.xlen = XlenReq::Rv32;
        self
    }

    /// Restrict this variant to RV64.
    #[must_use]
    pub const fn rv64_only(mut self) -> Self {
        self.xlen = XlenReq::Rv64;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn id(&self) -> InstId {
        self.id
    }

    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    #[must_use]
    pub const fn category(&self) -> InstCategory {
        self.category
    }

    #[must_use]
    pub const fn required_extensions(&self) -> ExtensionSet {
        self.requires
    }

    #[must_use]
    pub const fn xlen(&self) -> XlenReq {
        self.xlen
    }

    /// Size in bytes of instructions matching this descriptor.
    #[must_use]
    pub const fn size(&self) -> u8 {
        crate::instruction_size(self.code)
    }

    /// True if `word` carries this descriptor's fixed bits.
    #[inline]
    #[must_use]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.code
    }

    /// True if this variant exists under `config`.
    #[must_use]
    pub const fn is_available(&self, config: &DecodeConfig) -> bool {
        config.extensions().contains(self.requires) && self.xlen.admits(config.xlen())
    }

    /// Operand in slot `i`, or an empty operand past the last slot.
    #[must_use]
    pub const fn operand(&self, i: usize) -> Operand {
        if i < MAX_OPERANDS {
            self.operands[i]
        } else {
            Operand::NONE
        }
    }

    /// Number of non-empty operand slots.
    #[must_use]
    pub const fn operand_count(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < MAX_OPERANDS {
            if !self.operands[i].is_none() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Type of the `i`th operand (`None` if no such operand).
    #[must_use]
    pub const fn operand_type(&self, i: usize) -> OperandType {
        self.operand(i).ty
    }

    /// Access mode of the `i`th operand (`None` if no such operand).
    #[must_use]
    pub const fn operand_mode(&self, i: usize) -> OperandMode {
        self.operand(i).mode
    }

    /// Specifier bits of the `i`th operand (0 if no such operand).
    #[must_use]
    pub const fn operand_mask(&self, i: usize) -> u32 {
        self.operand(i).mask
    }

    /// Extract the raw specifier of the `i`th operand from `word`, packed
    /// down to the low bits in ascending bit order.
    ///
    /// Immediates whose encoding scatters bits (B, J and most compressed
    /// formats) come back in encoding order, not value order.
    #[must_use]
    pub const fn operand_bits(&self, i: usize, word: u32) -> u32 {
        let mut mask = self.operand_mask(i);
        let mut out = 0;
        let mut out_bit = 0;
        while mask != 0 {
            let bit = mask.trailing_zeros();
            out |= ((word >> bit) & 1) << out_bit;
            out_bit += 1;
            mask &= mask - 1;
        }
        out
    }

    /// True if the `i`th operand is read.
    #[must_use]
    pub const fn is_read(&self, i: usize) -> bool {
        self.operand_mode(i).is_read()
    }

    /// True if the `i`th operand is written.
    #[must_use]
    pub const fn is_write(&self, i: usize) -> bool {
        self.operand_mode(i).is_write()
    }

    /// Load instruction (lb, lw, flw, lr.w, ...).
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self.category, InstCategory::Load)
    }

    /// Store instruction (sb, sw, fsw, sc.w, ...).
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self.category, InstCategory::Store)
    }

    /// Branch or jump (beq, jal, c.j, ...).
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self.category, InstCategory::Branch)
    }

    /// Multiply (mul, mulh, ...).
    #[must_use]
    pub const fn is_multiply(&self) -> bool {
        matches!(self.category, InstCategory::Multiply)
    }

    /// Divide or remainder (div, rem, ...).
    #[must_use]
    pub const fn is_divide(&self) -> bool {
        matches!(self.category, InstCategory::Divide)
    }

    #[must_use]
    pub const fn is_csr(&self) -> bool {
        matches!(self.category, InstCategory::Csr)
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self.category, InstCategory::Float)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{I_IMM_MASK, RD_MASK, RS1_MASK};

    const ADDI: InstructionDescriptor =
        InstructionDescriptor::new("addi", InstId::new(19), 0x0000_0013, 0x0000_707F, InstCategory::Int)
            .operands([
                Operand::int(OperandMode::Write, RD_MASK),
                Operand::int(OperandMode::Read, RS1_MASK),
                Operand::imm(I_IMM_MASK),
            ]);

    #[test]
    fn test_operand_accessors() {
        assert_eq!(ADDI.operand_count(), 3);
        assert_eq!(ADDI.operand_type(0), OperandType::IntReg);
        assert_eq!(ADDI.operand_type(2), OperandType::Imm);
        assert!(ADDI.is_write(0));
        assert!(!ADDI.is_read(0));
        assert!(ADDI.is_read(1));
        assert_eq!(ADDI.operand_mask(1), RS1_MASK);
    }

    #[test]
    fn test_out_of_range_operand() {
        assert_eq!(ADDI.operand_type(3), OperandType::None);
        assert_eq!(ADDI.operand_mode(7), OperandMode::None);
        assert_eq!(ADDI.operand_mask(usize::MAX), 0);
        assert!(!ADDI.is_read(3));
        assert!(!ADDI.is_write(3));
    }

    #[test]
    fn test_operand_bits() {
        // addi x1, x2, 42
        let word = 0x02A1_0093;
        assert!(ADDI.matches(word));
        assert_eq!(ADDI.operand_bits(0, word), 1);
        assert_eq!(ADDI.operand_bits(1, word), 2);
        assert_eq!(ADDI.operand_bits(2, word), 42);
        assert_eq!(ADDI.operand_bits(3, word), 0);
    }

    #[test]
    fn test_partial_operands() {
        let lui = InstructionDescriptor::new("x", InstId::new(1), 0x37, 0x7F, InstCategory::Int)
            .operands([Operand::int(OperandMode::Write, RD_MASK)]);
        assert_eq!(lui.operand_count(), 1);
        assert_eq!(lui.operand_type(1), OperandType::None);
    }

    #[test]
    fn test_illegal_descriptor() {
        let illegal = InstructionDescriptor::illegal();
        assert_eq!(illegal.id(), InstId::ILLEGAL);
        assert_eq!(illegal.operand_count(), 0);
        assert!(!illegal.is_load());
        assert!(!illegal.is_store());
        assert!(!illegal.is_branch());
        assert!(!illegal.is_multiply());
        assert!(!illegal.is_divide());
        assert!(!illegal.is_csr());
    }

    #[test]
    fn test_availability() {
        let ld = InstructionDescriptor::new("x", InstId::new(2), 0x3003, 0x707F, InstCategory::Load)
            .rv64_only();
        assert!(ld.is_available(&DecodeConfig::rv64gc()));
        assert!(!ld.is_available(&DecodeConfig::rv32gc()));

        let flw = InstructionDescriptor::new("y", InstId::new(3), 0x2007, 0x707F, InstCategory::Load)
            .requires(ExtensionSet::F);
        let no_float = DecodeConfig::rv64gc().without_extension(ExtensionSet::F);
        assert!(flw.is_available(&DecodeConfig::rv64gc()));
        assert!(!flw.is_available(&no_float));
    }
}
