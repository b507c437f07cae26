//! Alias resolution policies.
//!
//! The table reports every descriptor matching a word. Which one is the
//! real instruction depends on context the table does not own (register
//! width, enabled extensions), so the caller passes a policy.

use crate::{DecodeConfig, InstructionDescriptor};

/// Picks one descriptor out of the candidates matching a word.
pub trait AliasPolicy {
    /// Choose among `candidates` (in table order, never empty). Return
    /// `None` to reject the word as illegal.
    fn resolve<'a>(
        &self,
        candidates: &[&'a InstructionDescriptor],
    ) -> Option<&'a InstructionDescriptor>;
}

/// Take the first candidate in table order, ignoring context.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl AliasPolicy for FirstMatch {
    fn resolve<'a>(
        &self,
        candidates: &[&'a InstructionDescriptor],
    ) -> Option<&'a InstructionDescriptor> {
        candidates.first().copied()
    }
}

/// Keep candidates available under a [`DecodeConfig`], then prefer the one
/// with the most fixed bits (`c.jr` over `c.mv`, `c.nop` over `c.addi`).
/// Ties go to the earlier table entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeaturePolicy {
    config: DecodeConfig,
}

impl FeaturePolicy {
    #[must_use]
    pub const fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &DecodeConfig {
        &self.config
    }
}

impl AliasPolicy for FeaturePolicy {
    fn resolve<'a>(
        &self,
        candidates: &[&'a InstructionDescriptor],
    ) -> Option<&'a InstructionDescriptor> {
        // max_by_key keeps the last maximum; walk backwards so ties keep the first.
        candidates
            .iter()
            .rev()
            .copied()
            .filter(|desc| desc.is_available(&self.config))
            .max_by_key(|desc| desc.mask().count_ones())
    }
}
