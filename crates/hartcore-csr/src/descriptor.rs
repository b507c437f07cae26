//! CSR descriptors.

use hartcore_xlen::Xlen;

use crate::{CsrNumber, PrivilegeMode};

/// One control and status register.
///
/// Lookups hand out clones; only the owning
/// [`RegisterSpace`](crate::RegisterSpace) changes the stored value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrDescriptor<X: Xlen> {
    name: String,
    number: CsrNumber,
    /// False if the configuration leaves this register unimplemented.
    valid: bool,
    pub(crate) value: X::Reg,
}

impl<X: Xlen> CsrDescriptor<X> {
    pub(crate) const fn new(name: String, number: CsrNumber, valid: bool, value: X::Reg) -> Self {
        Self {
            name,
            number,
            valid,
            value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn number(&self) -> CsrNumber {
        self.number
    }

    /// True if the register is implemented.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn value(&self) -> X::Reg {
        self.value
    }

    #[must_use]
    pub const fn privilege(&self) -> PrivilegeMode {
        self.number.privilege()
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.number.is_read_only()
    }
}
