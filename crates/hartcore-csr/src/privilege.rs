//! Privilege modes.

use std::fmt::{self, Display};

/// Hart privilege mode, ordered by its two-bit encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrivilegeMode {
    User = 0,
    Supervisor = 1,
    Reserved = 2,
    #[default]
    Machine = 3,
}

impl PrivilegeMode {
    /// Decode the low two bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::User,
            1 => Self::Supervisor,
            2 => Self::Reserved,
            _ => Self::Machine,
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Display for PrivilegeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Supervisor => "supervisor",
            Self::Reserved => "reserved",
            Self::Machine => "machine",
        };
        f.write_str(name)
    }
}
