//! Indexed instruction table.

use std::slice;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    AliasPolicy, InstId, InstructionDescriptor, MAX_OPERANDS, is_full_size, standard_descriptors,
};

/// Bits every 32-bit mask must fix: the major opcode.
const FULL_KEY_MASK: u32 = 0x0000_007F;
/// Bits every 16-bit mask must fix: funct3 and the quadrant.
const COMPRESSED_KEY_MASK: u32 = 0x0000_E003;

static ILLEGAL: InstructionDescriptor = InstructionDescriptor::illegal();

/// Bits of `word` that select its bucket.
const fn key_mask(word: u32) -> u32 {
    if is_full_size(word) {
        FULL_KEY_MASK
    } else {
        COMPRESSED_KEY_MASK
    }
}

/// Rejected custom table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("`{name}` uses the reserved illegal-instruction id")]
    ReservedId { name: &'static str },

    #[error("{id} is used by both `{first}` and `{second}`")]
    DuplicateId {
        id: InstId,
        first: &'static str,
        second: &'static str,
    },

    #[error("name `{name}` appears more than once")]
    DuplicateName { name: &'static str },

    #[error("`{name}`: code {code:#x} has bits outside mask {mask:#x}")]
    CodeOutsideMask {
        name: &'static str,
        code: u32,
        mask: u32,
    },

    #[error("`{name}`: operand {index} mask {operand:#x} overlaps fixed mask {mask:#x}")]
    OperandOverlapsMask {
        name: &'static str,
        index: usize,
        operand: u32,
        mask: u32,
    },

    #[error("`{name}`: mask {mask:#x} does not fix opcode bits {required:#x}")]
    UnkeyedMask {
        name: &'static str,
        mask: u32,
        required: u32,
    },
}

/// Every descriptor matching a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matches<'a> {
    /// Nothing matches; the word is illegal.
    None,
    /// Exactly one descriptor matches.
    Unique(&'a InstructionDescriptor),
    /// Several descriptors match, in table order.
    Aliased(Vec<&'a InstructionDescriptor>),
}

impl<'a> Matches<'a> {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_aliased(&self) -> bool {
        matches!(self, Self::Aliased(_))
    }

    /// Matching descriptors in table order.
    #[must_use]
    pub fn as_slice(&self) -> &[&'a InstructionDescriptor] {
        match self {
            Self::None => &[],
            Self::Unique(desc) => slice::from_ref(desc),
            Self::Aliased(descs) => descs,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_none()
    }
}

/// Instruction descriptors indexed by id, by name, and by opcode bucket.
///
/// Built once, then shared read-only. Lookups by id or name never fail:
/// unknown keys yield the illegal-instruction descriptor.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    descriptors: Vec<InstructionDescriptor>,
    /// Position in `descriptors`, indexed by [`InstId::index`].
    by_id: Vec<Option<usize>>,
    by_name: FxHashMap<&'static str, usize>,
    /// Positions in `descriptors`, keyed by the fixed opcode bits.
    buckets: FxHashMap<u32, Vec<usize>>,
}

impl DecodeTable {
    /// Table of the built-in RV32/RV64 IMAFDC, Zicsr, Zifencei and
    /// privileged instructions.
    #[must_use]
    pub fn standard() -> Self {
        let descriptors: Vec<_> = standard_descriptors().copied().collect();
        Self::try_new(&descriptors).expect("built-in instruction table is consistent")
    }

    /// Build a table from custom descriptors, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] naming the first inconsistent descriptor.
    pub fn try_new(descriptors: &[InstructionDescriptor]) -> Result<Self, TableError> {
        let mut by_id: Vec<Option<usize>> = Vec::new();
        let mut by_name = FxHashMap::default();
        let mut buckets: FxHashMap<u32, Vec<usize>> = FxHashMap::default();

        for (pos, desc) in descriptors.iter().enumerate() {
            validate(desc)?;

            let slot = desc.id().index();
            if slot >= by_id.len() {
                by_id.resize(slot + 1, None);
            }
            if let Some(prev) = by_id[slot] {
                return Err(TableError::DuplicateId {
                    id: desc.id(),
                    first: descriptors[prev].name(),
                    second: desc.name(),
                });
            }
            by_id[slot] = Some(pos);

            if by_name.insert(desc.name(), pos).is_some() {
                return Err(TableError::DuplicateName { name: desc.name() });
            }

            buckets
                .entry(desc.code() & key_mask(desc.code()))
                .or_default()
                .push(pos);
        }

        debug!(
            instructions = descriptors.len(),
            buckets = buckets.len(),
            "decode table built"
        );

        Ok(Self {
            descriptors: descriptors.to_vec(),
            by_id,
            by_name,
            buckets,
        })
    }

    /// The descriptor returned for anything that does not decode.
    #[must_use]
    pub fn illegal() -> &'static InstructionDescriptor {
        &ILLEGAL
    }

    /// Descriptor with the given id, or the illegal descriptor.
    #[must_use]
    pub fn by_id(&self, id: InstId) -> &InstructionDescriptor {
        self.position_of(id)
            .map_or(&ILLEGAL, |pos| &self.descriptors[pos])
    }

    /// Descriptor with the given mnemonic, or the illegal descriptor.
    #[must_use]
    pub fn by_name(&self, name: &str) -> &InstructionDescriptor {
        self.by_name
            .get(name)
            .map_or(&ILLEGAL, |&pos| &self.descriptors[pos])
    }

    #[must_use]
    pub fn contains_id(&self, id: InstId) -> bool {
        self.position_of(id).is_some()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every descriptor whose fixed bits match `word`.
    #[must_use]
    pub fn candidates(&self, word: u32) -> Matches<'_> {
        let Some(bucket) = self.buckets.get(&(word & key_mask(word))) else {
            return Matches::None;
        };
        let mut found: Vec<&InstructionDescriptor> = bucket
            .iter()
            .map(|&pos| &self.descriptors[pos])
            .filter(|desc| desc.matches(word))
            .collect();
        match found.len() {
            0 => Matches::None,
            1 => Matches::Unique(found.swap_remove(0)),
            _ => Matches::Aliased(found),
        }
    }

    /// Decode `word`, letting `policy` choose among the candidates.
    ///
    /// Returns the illegal descriptor when nothing matches or the policy
    /// rejects every candidate.
    #[must_use]
    pub fn decode<P: AliasPolicy + ?Sized>(&self, word: u32, policy: &P) -> &InstructionDescriptor {
        let matches = self.candidates(word);
        if matches.is_none() {
            return &ILLEGAL;
        }
        let chosen = policy.resolve(matches.as_slice()).unwrap_or(&ILLEGAL);
        if matches.is_aliased() {
            trace!(
                word = format!("{word:#x}"),
                candidates = matches.len(),
                chosen = chosen.name(),
                "aliased encoding"
            );
        }
        chosen
    }

    /// Other descriptors sharing the code and mask of `id`.
    #[must_use]
    pub fn aliases(&self, id: InstId) -> Vec<&InstructionDescriptor> {
        let Some(pos) = self.position_of(id) else {
            return Vec::new();
        };
        let desc = &self.descriptors[pos];
        self.buckets
            .get(&(desc.code() & key_mask(desc.code())))
            .into_iter()
            .flatten()
            .filter(|&&other| other != pos)
            .map(|&other| &self.descriptors[other])
            .filter(|other| other.code() == desc.code() && other.mask() == desc.mask())
            .collect()
    }

    /// Descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionDescriptor> {
        self.descriptors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    fn position_of(&self, id: InstId) -> Option<usize> {
        self.by_id.get(id.index()).copied().flatten()
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a DecodeTable {
    type Item = &'a InstructionDescriptor;
    type IntoIter = slice::Iter<'a, InstructionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

fn validate(desc: &InstructionDescriptor) -> Result<(), TableError> {
    let name = desc.name();
    let (code, mask) = (desc.code(), desc.mask());

    if desc.id().is_illegal() {
        return Err(TableError::ReservedId { name });
    }
    if code & !mask != 0 {
        return Err(TableError::CodeOutsideMask { name, code, mask });
    }
    let required = key_mask(code);
    if mask & required != required {
        return Err(TableError::UnkeyedMask {
            name,
            mask,
            required,
        });
    }
    // Slots need not be packed; check every one.
    for index in 0..MAX_OPERANDS {
        if desc.operand(index).is_none() {
            continue;
        }
        let operand = desc.operand_mask(index);
        if operand & mask != 0 {
            return Err(TableError::OperandOverlapsMask {
                name,
                index,
                operand,
                mask,
            });
        }
    }
    Ok(())
}
