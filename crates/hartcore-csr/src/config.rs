//! Register-space configuration.

/// `misa` extension bit for the letter `ext`.
const fn misa_bit(ext: u8) -> u64 {
    1 << (ext - b'A')
}

/// Default `misa` extension bits: RV64GC-style IMAFDC with S and U modes.
pub const DEFAULT_MISA_EXTENSIONS: u64 = misa_bit(b'I')
    | misa_bit(b'M')
    | misa_bit(b'A')
    | misa_bit(b'F')
    | misa_bit(b'D')
    | misa_bit(b'C')
    | misa_bit(b'S')
    | misa_bit(b'U');

/// Which CSRs exist and what they hold at reset.
///
/// Registers outside the enabled groups are still defined, so they can be
/// found by name, but they are marked unimplemented and every access to
/// them fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrConfig {
    /// `mhartid` value.
    pub hart_id: u64,
    /// `mvendorid` value.
    pub vendor_id: u64,
    /// `marchid` value.
    pub arch_id: u64,
    /// `mimpid` value.
    pub impl_id: u64,
    /// Extension bits of `misa` (bits [25:0]). The MXL field is derived
    /// from the register width.
    pub misa_extensions: u64,
    /// Implement the supervisor-mode registers.
    pub supervisor: bool,
    /// Implement the user-mode trap registers (N extension).
    pub user_traps: bool,
    /// Implement `fflags`, `frm` and `fcsr`.
    pub float: bool,
    /// Implement the trigger and debug-mode registers.
    pub debug: bool,
}

impl Default for CsrConfig {
    fn default() -> Self {
        Self {
            hart_id: 0,
            vendor_id: 0,
            arch_id: 0,
            impl_id: 0,
            misa_extensions: DEFAULT_MISA_EXTENSIONS,
            supervisor: true,
            user_traps: false,
            float: true,
            debug: false,
        }
    }
}

impl CsrConfig {
    /// Configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_hart_id(mut self, hart_id: u64) -> Self {
        self.hart_id = hart_id;
        self
    }

    /// Set the `mvendorid`, `marchid` and `mimpid` values.
    #[must_use]
    pub const fn with_ids(mut self, vendor_id: u64, arch_id: u64, impl_id: u64) -> Self {
        self.vendor_id = vendor_id;
        self.arch_id = arch_id;
        self.impl_id = impl_id;
        self
    }

    #[must_use]
    pub const fn with_misa_extensions(mut self, bits: u64) -> Self {
        self.misa_extensions = bits & MISA_EXTENSION_MASK;
        self
    }

    #[must_use]
    pub const fn with_supervisor(mut self, enabled: bool) -> Self {
        self.supervisor = enabled;
        self
    }

    #[must_use]
    pub const fn with_user_traps(mut self, enabled: bool) -> Self {
        self.user_traps = enabled;
        self
    }

    #[must_use]
    pub const fn with_float(mut self, enabled: bool) -> Self {
        self.float = enabled;
        self
    }

    #[must_use]
    pub const fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// `misa` value for a register of `xlen` bits.
    #[must_use]
    pub const fn misa(&self, xlen: u8) -> u64 {
        let mxl: u64 = if xlen == 32 { 1 } else { 2 };
        (mxl << (xlen - 2)) | (self.misa_extensions & MISA_EXTENSION_MASK)
    }
}

/// Bits [25:0] of `misa`, one per extension letter.
const MISA_EXTENSION_MASK: u64 = (1 << 26) - 1;
