//! Field view of the machine status register.
//!
//! | Field | Offset | Width |
//! |-------|--------|-------|
//! | UIE   | 0      | 1     |
//! | SIE   | 1      | 1     |
//! | MIE   | 3      | 1     |
//! | UPIE  | 4      | 1     |
//! | SPIE  | 5      | 1     |
//! | MPIE  | 7      | 1     |
//! | SPP   | 8      | 1     |
//! | MPP   | 11     | 2     |
//! | FS    | 13     | 2     |
//! | XS    | 15     | 2     |
//! | MPRV  | 17     | 1     |
//! | SUM   | 18     | 1     |
//! | MXR   | 19     | 1     |
//! | TVM   | 20     | 1     |
//! | TW    | 21     | 1     |
//! | TSR   | 22     | 1     |
//! | SD    | XLEN-1 | 1     |
//!
//! Bits 2, 6, 9-10 and 23 to XLEN-2 are reserved.

use std::fmt;
use std::marker::PhantomData;

use hartcore_xlen::{Xlen, bits};

use crate::PrivilegeMode;

/// Bit position of a field inside a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub offset: u32,
    pub width: u32,
}

impl FieldLayout {
    #[must_use]
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// The field's bits in place.
    #[must_use]
    pub const fn mask(self) -> u64 {
        bits::mask(self.width) << self.offset
    }
}

/// Named field of `mstatus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MstatusField {
    Uie,
    Sie,
    Mie,
    Upie,
    Spie,
    Mpie,
    Spp,
    Mpp,
    Fs,
    Xs,
    Mprv,
    Sum,
    Mxr,
    Tvm,
    Tw,
    Tsr,
    Sd,
}

impl MstatusField {
    pub const ALL: [Self; 17] = [
        Self::Uie,
        Self::Sie,
        Self::Mie,
        Self::Upie,
        Self::Spie,
        Self::Mpie,
        Self::Spp,
        Self::Mpp,
        Self::Fs,
        Self::Xs,
        Self::Mprv,
        Self::Sum,
        Self::Mxr,
        Self::Tvm,
        Self::Tw,
        Self::Tsr,
        Self::Sd,
    ];

    /// Position of this field in a register of `xlen` bits.
    ///
    /// # Panics
    ///
    /// Panics if `xlen` is neither 32 nor 64.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn layout(self, xlen: u8) -> FieldLayout {
        assert!(xlen == 32 || xlen == 64, "mstatus width must be 32 or 64");
        let (offset, width) = match self {
            Self::Uie => (0, 1),
            Self::Sie => (1, 1),
            Self::Mie => (3, 1),
            Self::Upie => (4, 1),
            Self::Spie => (5, 1),
            Self::Mpie => (7, 1),
            Self::Spp => (8, 1),
            Self::Mpp => (11, 2),
            Self::Fs => (13, 2),
            Self::Xs => (15, 2),
            Self::Mprv => (17, 1),
            Self::Sum => (18, 1),
            Self::Mxr => (19, 1),
            Self::Tvm => (20, 1),
            Self::Tw => (21, 1),
            Self::Tsr => (22, 1),
            Self::Sd => (xlen as u32 - 1, 1),
        };
        FieldLayout::new(offset, width)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uie => "UIE",
            Self::Sie => "SIE",
            Self::Mie => "MIE",
            Self::Upie => "UPIE",
            Self::Spie => "SPIE",
            Self::Mpie => "MPIE",
            Self::Spp => "SPP",
            Self::Mpp => "MPP",
            Self::Fs => "FS",
            Self::Xs => "XS",
            Self::Mprv => "MPRV",
            Self::Sum => "SUM",
            Self::Mxr => "MXR",
            Self::Tvm => "TVM",
            Self::Tw => "TW",
            Self::Tsr => "TSR",
            Self::Sd => "SD",
        }
    }
}

/// Reserved bits of `mstatus` for a register of `xlen` bits.
///
/// # Panics
///
/// Panics if `xlen` is neither 32 nor 64.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn mstatus_reserved_mask(xlen: u8) -> u64 {
    assert!(xlen == 32 || xlen == 64, "mstatus width must be 32 or 64");
    let wpri_high = FieldLayout::new(23, xlen as u32 - 24);
    (1 << 2) | (1 << 6) | FieldLayout::new(9, 2).mask() | wpri_high.mask()
}

/// `mstatus` value viewed as named fields.
///
/// Owns a copy of the raw value; read it back with [`raw`](Self::raw) and
/// store it through the register space.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mstatus<X: Xlen> {
    value: X::Reg,
    _xlen: PhantomData<X>,
}

impl<X: Xlen> Mstatus<X> {
    #[must_use]
    pub const fn new(value: X::Reg) -> Self {
        Self {
            value,
            _xlen: PhantomData,
        }
    }

    #[must_use]
    pub const fn raw(&self) -> X::Reg {
        self.value
    }

    /// Current value of `field`, shifted down to bit 0.
    #[must_use]
    pub fn get(&self, field: MstatusField) -> u64 {
        let FieldLayout { offset, width } = field.layout(X::VALUE);
        bits::extract(X::to_u64(self.value), offset, width)
    }

    /// Store `value` (truncated to the field width) into `field`; no other
    /// bit changes.
    pub fn set(&mut self, field: MstatusField, value: u64) {
        let FieldLayout { offset, width } = field.layout(X::VALUE);
        self.value = X::from_u64(bits::insert(X::to_u64(self.value), offset, width, value));
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: MstatusField, value: u64) -> Self {
        self.set(field, value);
        self
    }

    fn flag(&self, field: MstatusField) -> bool {
        self.get(field) != 0
    }

    fn set_flag(&mut self, field: MstatusField, on: bool) {
        self.set(field, u64::from(on));
    }

    /// Privilege mode before the last trap into machine mode.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mpp(&self) -> PrivilegeMode {
        PrivilegeMode::from_bits(self.get(MstatusField::Mpp) as u8)
    }

    pub fn set_mpp(&mut self, mode: PrivilegeMode) {
        self.set(MstatusField::Mpp, u64::from(mode.bits()));
    }

    /// Privilege mode before the last trap into supervisor mode.
    #[must_use]
    pub fn spp(&self) -> PrivilegeMode {
        if self.flag(MstatusField::Spp) {
            PrivilegeMode::Supervisor
        } else {
            PrivilegeMode::User
        }
    }

    /// SPP holds one bit: any mode above user records as supervisor.
    pub fn set_spp(&mut self, mode: PrivilegeMode) {
        self.set_flag(MstatusField::Spp, mode != PrivilegeMode::User);
    }

    #[must_use]
    pub fn mie(&self) -> bool {
        self.flag(MstatusField::Mie)
    }

    pub fn set_mie(&mut self, on: bool) {
        self.set_flag(MstatusField::Mie, on);
    }

    #[must_use]
    pub fn sie(&self) -> bool {
        self.flag(MstatusField::Sie)
    }

    pub fn set_sie(&mut self, on: bool) {
        self.set_flag(MstatusField::Sie, on);
    }

    #[must_use]
    pub fn uie(&self) -> bool {
        self.flag(MstatusField::Uie)
    }

    pub fn set_uie(&mut self, on: bool) {
        self.set_flag(MstatusField::Uie, on);
    }

    #[must_use]
    pub fn mpie(&self) -> bool {
        self.flag(MstatusField::Mpie)
    }

    pub fn set_mpie(&mut self, on: bool) {
        self.set_flag(MstatusField::Mpie, on);
    }

    #[must_use]
    pub fn spie(&self) -> bool {
        self.flag(MstatusField::Spie)
    }

    pub fn set_spie(&mut self, on: bool) {
        self.set_flag(MstatusField::Spie, on);
    }

    #[must_use]
    pub fn upie(&self) -> bool {
        self.flag(MstatusField::Upie)
    }

    pub fn set_upie(&mut self, on: bool) {
        self.set_flag(MstatusField::Upie, on);
    }

    /// Dirty-state summary bit.
    #[must_use]
    pub fn sd(&self) -> bool {
        self.flag(MstatusField::Sd)
    }
}

impl<X: Xlen> Default for Mstatus<X> {
    fn default() -> Self {
        Self::new(X::Reg::default())
    }
}

impl<X: Xlen> fmt::Debug for Mstatus<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Mstatus");
        s.field("raw", &format_args!("{:#x}", self.value));
        for field in MstatusField::ALL {
            let value = self.get(field);
            if value != 0 {
                s.field(field.name(), &value);
            }
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hartcore_xlen::{Rv32, Rv64};

    #[test]
    fn test_layout_depends_on_width() {
        assert_eq!(MstatusField::Sd.layout(32), FieldLayout::new(31, 1));
        assert_eq!(MstatusField::Sd.layout(64), FieldLayout::new(63, 1));
        assert_eq!(MstatusField::Mpp.layout(32), MstatusField::Mpp.layout(64));
        assert_eq!(mstatus_reserved_mask(32) & (0xFF << 23), 0xFF << 23);
    }

    #[test]
    #[should_panic(expected = "32 or 64")]
    fn test_layout_rejects_narrow_width() {
        let _ = MstatusField::Sd.layout(16);
    }

    #[test]
    #[should_panic(expected = "32 or 64")]
    fn test_reserved_mask_rejects_odd_width() {
        let _ = mstatus_reserved_mask(48);
    }

    #[test]
    fn test_fields_tile_register() {
        for xlen in [32u8, 64] {
            let mut seen = mstatus_reserved_mask(xlen);
            for field in MstatusField::ALL {
                let mask = field.layout(xlen).mask();
                assert_eq!(seen & mask, 0, "{} overlaps at xlen {xlen}", field.name());
                seen |= mask;
            }
            assert_eq!(seen, bits::mask(u32::from(xlen)), "gap at xlen {xlen}");
        }
    }

    #[test]
    fn test_set_mpp_touches_only_mpp() {
        let mut status = Mstatus::<Rv64>::new(0xA5A5_A5A5_A5A5_A5A5);
        let before = status.raw();
        status.set_mpp(PrivilegeMode::Supervisor);
        assert_eq!(status.mpp(), PrivilegeMode::Supervisor);
        assert_eq!(status.raw() & !0x1800, before & !0x1800);
        assert_eq!(status.raw() & 0x1800, 0x0800);
    }

    #[test]
    fn test_set_truncates_to_width() {
        let mut status = Mstatus::<Rv32>::default();
        status.set(MstatusField::Fs, 0b111);
        assert_eq!(status.get(MstatusField::Fs), 0b11);
        assert_eq!(status.raw(), 0b11 << 13);
    }

    #[test]
    fn test_flags() {
        let mut status = Mstatus::<Rv32>::default();
        status.set_mie(true);
        status.set_sie(true);
        status.set_mpie(true);
        assert_eq!(status.raw(), (1 << 3) | (1 << 1) | (1 << 7));
        assert!(status.mie() && status.sie() && status.mpie());
        assert!(!status.uie() && !status.spie() && !status.upie());
        status.set_mie(false);
        assert!(!status.mie());
        assert_eq!(status.raw(), (1 << 1) | (1 << 7));
    }

    #[test]
    fn test_spp() {
        let mut status = Mstatus::<Rv64>::default();
        assert_eq!(status.spp(), PrivilegeMode::User);
        status.set_spp(PrivilegeMode::Supervisor);
        assert_eq!(status.spp(), PrivilegeMode::Supervisor);
        assert_eq!(status.raw(), 1 << 8);
    }

    #[test]
    fn test_sd_is_top_bit() {
        let status = Mstatus::<Rv32>::new(0x8000_0000);
        assert!(status.sd());
        let status = Mstatus::<Rv64>::new(0x8000_0000);
        assert!(!status.sd());
        assert_eq!(status.get(MstatusField::Sd), 0);
    }
}
