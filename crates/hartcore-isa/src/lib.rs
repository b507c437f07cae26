//! RISC-V instruction information table.
//!
//! This crate answers "what does this instruction word encode": which
//! operation, which bits select operands, and how each operand is accessed.
//! Every extension (I, M, A, F, D, C, Zicsr, privileged) contributes a
//! static slice of [`InstructionDescriptor`]s under `extensions/`; a
//! [`DecodeTable`] indexes them by id, by name and by opcode bucket.
//!
//! Some encodings alias (the same bits mean `c.flw` on RV32 and `c.ld` on
//! RV64). The table reports every match and leaves the choice to an
//! [`AliasPolicy`] supplied by the caller.

mod config;
mod descriptor;
pub mod extensions;
mod id;
mod operand;
mod policy;
mod size;
mod table;

pub use config::*;
pub use descriptor::*;
pub use extensions::*;
pub use id::*;
pub use operand::*;
pub use policy::*;
pub use size::*;
pub use table::*;
