//! Decode context: register width and enabled extensions.

use std::fmt;
use std::ops::BitOr;

use hartcore_xlen::{Rv32, Rv64, Xlen};

/// Set of ISA extensions, one bit per extension.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtensionSet(u32);

impl ExtensionSet {
    pub const EMPTY: Self = Self(0);
    /// Base integer ISA.
    pub const I: Self = Self(1 << 0);
    pub const M: Self = Self(1 << 1);
    pub const A: Self = Self(1 << 2);
    pub const F: Self = Self(1 << 3);
    pub const D: Self = Self(1 << 4);
    pub const C: Self = Self(1 << 5);
    pub const ZICSR: Self = Self(1 << 6);
    pub const ZIFENCEI: Self = Self(1 << 7);
    /// Supervisor mode (sret, sfence.vma).
    pub const S: Self = Self(1 << 8);
    /// User-level traps (uret).
    pub const N: Self = Self(1 << 9);

    /// I, M, A, F, D, Zicsr and Zifencei.
    pub const G: Self = Self::I
        .union(Self::M)
        .union(Self::A)
        .union(Self::F)
        .union(Self::D)
        .union(Self::ZICSR)
        .union(Self::ZIFENCEI);

    const NAMES: [(Self, &'static str); 10] = [
        (Self::I, "i"),
        (Self::M, "m"),
        (Self::A, "a"),
        (Self::F, "f"),
        (Self::D, "d"),
        (Self::C, "c"),
        (Self::ZICSR, "zicsr"),
        (Self::ZIFENCEI, "zifencei"),
        (Self::S, "s"),
        (Self::N, "n"),
    ];

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every extension in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ExtensionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Self::NAMES
            .iter()
            .filter(|(ext, _)| self.contains(*ext))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "ExtensionSet({})", names.join("_"))
    }
}

/// Register width an instruction is restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XlenReq {
    #[default]
    Any,
    Rv32,
    Rv64,
}

impl XlenReq {
    /// True if an instruction with this requirement exists at `xlen` bits.
    #[must_use]
    pub const fn admits(self, xlen: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Rv32 => xlen == 32,
            Self::Rv64 => xlen == 64,
        }
    }
}

/// Decode configuration consulted by [`FeaturePolicy`](crate::FeaturePolicy).
///
/// The width is always 32 or 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    xlen: u8,
    extensions: ExtensionSet,
}

impl DecodeConfig {
    /// # Panics
    ///
    /// Panics if `xlen` is neither 32 nor 64.
    #[must_use]
    pub const fn new(xlen: u8, extensions: ExtensionSet) -> Self {
        assert!(xlen == 32 || xlen == 64, "decode width must be 32 or 64");
        Self { xlen, extensions }
    }

    /// Configuration for the width of `X`.
    #[must_use]
    pub const fn for_xlen<X: Xlen>(extensions: ExtensionSet) -> Self {
        Self::new(X::VALUE, extensions)
    }

    /// RV32GC with supervisor mode.
    #[must_use]
    pub const fn rv32gc() -> Self {
        Self::for_xlen::<Rv32>(ExtensionSet::G.union(ExtensionSet::C).union(ExtensionSet::S))
    }

    /// RV64GC with supervisor mode.
    #[must_use]
    pub const fn rv64gc() -> Self {
        Self::for_xlen::<Rv64>(ExtensionSet::G.union(ExtensionSet::C).union(ExtensionSet::S))
    }

    /// Register width (32 or 64).
    #[must_use]
    pub const fn xlen(&self) -> u8 {
        self.xlen
    }

    #[must_use]
    pub const fn extensions(&self) -> ExtensionSet {
        self.extensions
    }

    /// Enable an extension.
    #[must_use]
    pub const fn with_extension(mut self, ext: ExtensionSet) -> Self {
        self.extensions = self.extensions.union(ext);
        self
    }

    /// Disable an extension.
    #[must_use]
    pub const fn without_extension(mut self, ext: ExtensionSet) -> Self {
        self.extensions = self.extensions.difference(ext);
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::rv64gc()
    }
}
