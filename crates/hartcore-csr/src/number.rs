//! CSR numbers.

use std::fmt::{self, Display};

use crate::PrivilegeMode;

/// 12-bit CSR number.
///
/// The number encodes its own access rules: bits [9:8] give the lowest
/// privilege mode allowed to access the register and bits [11:10] set to
/// `0b11` mark it read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CsrNumber(u16);

impl CsrNumber {
    /// Largest CSR number.
    pub const MAX: u16 = 0xFFF;

    /// Number of distinct CSR numbers.
    pub const COUNT: usize = Self::MAX as usize + 1;

    // ===== Machine information (read-only) =====
    pub const MVENDORID: Self = Self(0xF11);
    pub const MARCHID: Self = Self(0xF12);
    pub const MIMPID: Self = Self(0xF13);
    pub const MHARTID: Self = Self(0xF14);

    // ===== Machine trap setup =====
    pub const MSTATUS: Self = Self(0x300);
    pub const MISA: Self = Self(0x301);
    pub const MEDELEG: Self = Self(0x302);
    pub const MIDELEG: Self = Self(0x303);
    pub const MIE: Self = Self(0x304);
    pub const MTVEC: Self = Self(0x305);
    pub const MCOUNTEREN: Self = Self(0x306);

    // ===== Machine trap handling =====
    pub const MSCRATCH: Self = Self(0x340);
    pub const MEPC: Self = Self(0x341);
    pub const MCAUSE: Self = Self(0x342);
    pub const MTVAL: Self = Self(0x343);
    pub const MIP: Self = Self(0x344);

    // ===== Machine counters =====
    pub const MCYCLE: Self = Self(0xB00);
    pub const MINSTRET: Self = Self(0xB02);
    pub const MCYCLEH: Self = Self(0xB80);
    pub const MINSTRETH: Self = Self(0xB82);

    // ===== Supervisor trap setup =====
    pub const SSTATUS: Self = Self(0x100);
    pub const SEDELEG: Self = Self(0x102);
    pub const SIDELEG: Self = Self(0x103);
    pub const SIE: Self = Self(0x104);
    pub const STVEC: Self = Self(0x105);
    pub const SCOUNTEREN: Self = Self(0x106);

    // ===== Supervisor trap handling =====
    pub const SSCRATCH: Self = Self(0x140);
    pub const SEPC: Self = Self(0x141);
    pub const SCAUSE: Self = Self(0x142);
    pub const STVAL: Self = Self(0x143);
    pub const SIP: Self = Self(0x144);

    /// Supervisor address translation and protection.
    pub const SATP: Self = Self(0x180);

    // ===== User trap setup and handling =====
    pub const USTATUS: Self = Self(0x000);
    pub const UIE: Self = Self(0x004);
    pub const UTVEC: Self = Self(0x005);
    pub const USCRATCH: Self = Self(0x040);
    pub const UEPC: Self = Self(0x041);
    pub const UCAUSE: Self = Self(0x042);
    pub const UTVAL: Self = Self(0x043);
    pub const UIP: Self = Self(0x044);

    // ===== User floating point =====
    pub const FFLAGS: Self = Self(0x001);
    pub const FRM: Self = Self(0x002);
    pub const FCSR: Self = Self(0x003);

    // ===== User counters (read-only) =====
    pub const CYCLE: Self = Self(0xC00);
    pub const TIME: Self = Self(0xC01);
    pub const INSTRET: Self = Self(0xC02);
    pub const CYCLEH: Self = Self(0xC80);
    pub const TIMEH: Self = Self(0xC81);
    pub const INSTRETH: Self = Self(0xC82);

    // ===== Debug trigger =====
    pub const TSELECT: Self = Self(0x7A0);
    pub const TDATA1: Self = Self(0x7A1);
    pub const TDATA2: Self = Self(0x7A2);
    pub const TDATA3: Self = Self(0x7A3);

    // ===== Debug mode =====
    pub const DCSR: Self = Self(0x7B0);
    pub const DPC: Self = Self(0x7B1);
    pub const DSCRATCH: Self = Self(0x7B2);

    /// `raw` as a CSR number, or `None` if it does not fit in 12 bits.
    #[must_use]
    pub const fn new(raw: u16) -> Option<Self> {
        if raw <= Self::MAX {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// CSR field (bits [31:20]) of a Zicsr instruction.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_instruction(word: u32) -> Self {
        Self((word >> 20) as u16)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position in a dense 4096-entry table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowest privilege mode allowed to access this register.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn privilege(self) -> PrivilegeMode {
        PrivilegeMode::from_bits(((self.0 >> 8) & 0b11) as u8)
    }

    /// True if every write to this register must fail.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        (self.0 >> 10) & 0b11 == 0b11
    }

    // ===== Numbered families =====

    /// `pmpcfg{n}`, `n` in 0..4.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn pmpcfg(n: u16) -> Self {
        assert!(n < 4, "pmpcfg index out of range");
        Self(0x3A0 + n)
    }

    /// `pmpaddr{n}`, `n` in 0..16.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn pmpaddr(n: u16) -> Self {
        assert!(n < 16, "pmpaddr index out of range");
        Self(0x3B0 + n)
    }

    /// `mhpmcounter{n}`, `n` in 3..32.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn mhpmcounter(n: u16) -> Self {
        assert!(n >= 3 && n < 32, "hpm counter index out of range");
        Self(0xB00 + n)
    }

    /// `mhpmcounter{n}h`, `n` in 3..32.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn mhpmcounterh(n: u16) -> Self {
        assert!(n >= 3 && n < 32, "hpm counter index out of range");
        Self(0xB80 + n)
    }

    /// `mhpmevent{n}`, `n` in 3..32.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn mhpmevent(n: u16) -> Self {
        assert!(n >= 3 && n < 32, "hpm event index out of range");
        Self(0x320 + n)
    }

    /// `hpmcounter{n}`, `n` in 3..32.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn hpmcounter(n: u16) -> Self {
        assert!(n >= 3 && n < 32, "hpm counter index out of range");
        Self(0xC00 + n)
    }

    /// `hpmcounter{n}h`, `n` in 3..32.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of range.
    #[must_use]
    pub const fn hpmcounterh(n: u16) -> Self {
        assert!(n >= 3 && n < 32, "hpm counter index out of range");
        Self(0xC80 + n)
    }
}

impl Display for CsrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

impl From<CsrNumber> for u16 {
    fn from(number: CsrNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wide_numbers() {
        assert_eq!(CsrNumber::new(0x340), Some(CsrNumber::MSCRATCH));
        assert_eq!(CsrNumber::new(0xFFF).map(CsrNumber::raw), Some(0xFFF));
        assert_eq!(CsrNumber::new(0x1000), None);
    }

    #[test]
    fn test_from_instruction() {
        // csrrw x1, mscratch, x2
        assert_eq!(CsrNumber::from_instruction(0x3401_10F3), CsrNumber::MSCRATCH);
        // csrr x5, mhartid
        assert_eq!(CsrNumber::from_instruction(0xF140_22F3), CsrNumber::MHARTID);
    }

    #[test]
    fn test_privilege_from_number() {
        assert_eq!(CsrNumber::USTATUS.privilege(), PrivilegeMode::User);
        assert_eq!(CsrNumber::CYCLE.privilege(), PrivilegeMode::User);
        assert_eq!(CsrNumber::SSTATUS.privilege(), PrivilegeMode::Supervisor);
        assert_eq!(CsrNumber::SATP.privilege(), PrivilegeMode::Supervisor);
        assert_eq!(CsrNumber::MSTATUS.privilege(), PrivilegeMode::Machine);
        assert_eq!(CsrNumber::MHARTID.privilege(), PrivilegeMode::Machine);
        assert_eq!(CsrNumber::DCSR.privilege(), PrivilegeMode::Machine);
        assert_eq!(CsrNumber(0x200).privilege(), PrivilegeMode::Reserved);
    }

    #[test]
    fn test_read_only_from_number() {
        assert!(CsrNumber::MVENDORID.is_read_only());
        assert!(CsrNumber::MHARTID.is_read_only());
        assert!(CsrNumber::CYCLE.is_read_only());
        assert!(CsrNumber::hpmcounterh(31).is_read_only());
        assert!(!CsrNumber::MSCRATCH.is_read_only());
        assert!(!CsrNumber::MCYCLE.is_read_only());
        assert!(!CsrNumber::TSELECT.is_read_only());
        assert!(!CsrNumber::USTATUS.is_read_only());
    }

    #[test]
    fn test_families() {
        assert_eq!(CsrNumber::pmpcfg(3).raw(), 0x3A3);
        assert_eq!(CsrNumber::pmpaddr(15).raw(), 0x3BF);
        assert_eq!(CsrNumber::mhpmcounter(3).raw(), 0xB03);
        assert_eq!(CsrNumber::mhpmcounterh(31).raw(), 0xB9F);
        assert_eq!(CsrNumber::mhpmevent(3).raw(), 0x323);
        assert_eq!(CsrNumber::mhpmevent(31).raw(), 0x33F);
        assert_eq!(CsrNumber::hpmcounter(4).raw(), 0xC04);
    }

    #[test]
    #[should_panic(expected = "hpm counter index out of range")]
    fn test_family_out_of_range() {
        let _ = CsrNumber::hpmcounter(2);
    }

    #[test]
    fn test_display() {
        assert_eq!(CsrNumber::MSCRATCH.to_string(), "0x340");
        assert_eq!(CsrNumber::FFLAGS.to_string(), "0x001");
    }
}
