//! Instruction identifiers.

use std::fmt::{self, Display};

/// Dense instruction identifier.
///
/// Each semantic operation has its own id, so two aliased encodings (same
/// code and mask) still carry different ids. Id 0 is reserved for the
/// illegal instruction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct InstId(u16);

impl InstId {
    /// The illegal-instruction sentinel.
    pub const ILLEGAL: Self = Self(0);

    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position in a dense id-indexed table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_illegal(self) -> bool {
        self.0 == Self::ILLEGAL.0
    }
}

impl Display for InstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstId({})", self.0)
    }
}
