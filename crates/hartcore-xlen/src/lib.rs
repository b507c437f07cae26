//! Register width types (XLEN) and bit-field helpers.
//!
//! This crate knows about "32 vs 64 bit" and about fields inside a word,
//! nothing else. The CSR model and the instruction table build on it.

pub mod bits;
mod xlen;

pub use xlen::*;
