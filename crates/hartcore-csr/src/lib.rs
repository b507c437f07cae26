//! RISC-V control and status registers.
//!
//! A [`RegisterSpace`] holds every CSR of one hart, indexed by its 12-bit
//! number and by name. Access control needs no permission table: the
//! number itself encodes the lowest privilege mode allowed to touch the
//! register (bits [9:8]) and whether it is read-only (bits [11:10] == 0b11).
//!
//! [`Mstatus`] projects the machine status register onto named fields.

mod config;
mod descriptor;
mod error;
mod mstatus;
mod number;
mod privilege;
mod shared;
mod space;

pub use config::*;
pub use descriptor::*;
pub use error::*;
pub use mstatus::*;
pub use number::*;
pub use privilege::*;
pub use shared::*;
pub use space::*;

pub use hartcore_xlen::{Rv32, Rv64, Xlen};
