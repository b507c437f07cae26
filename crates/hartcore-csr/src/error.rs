//! CSR access errors.

use thiserror::Error;

use crate::{CsrNumber, PrivilegeMode};

/// Why a CSR read or write was refused.
///
/// The caller turns this into an illegal-instruction trap; the register
/// space never traps on its own.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("no CSR at {0}")]
    Absent(CsrNumber),

    #[error("CSR {0} is not implemented")]
    Unimplemented(CsrNumber),

    #[error("CSR {number} requires {required} mode, hart is in {current} mode")]
    Privilege {
        number: CsrNumber,
        required: PrivilegeMode,
        current: PrivilegeMode,
    },

    #[error("CSR {0} is read-only")]
    ReadOnly(CsrNumber),
}

impl AccessDenied {
    /// The register the access targeted.
    #[must_use]
    pub const fn number(&self) -> CsrNumber {
        match *self {
            Self::Absent(number)
            | Self::Unimplemented(number)
            | Self::Privilege { number, .. }
            | Self::ReadOnly(number) => number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AccessDenied::Privilege {
            number: CsrNumber::MSCRATCH,
            required: PrivilegeMode::Machine,
            current: PrivilegeMode::Supervisor,
        };
        assert_eq!(
            err.to_string(),
            "CSR 0x340 requires machine mode, hart is in supervisor mode"
        );
        assert_eq!(err.number(), CsrNumber::MSCRATCH);
        assert_eq!(AccessDenied::ReadOnly(CsrNumber::CYCLE).to_string(), "CSR 0xc00 is read-only");
    }
}
