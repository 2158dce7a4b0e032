//! Typed, zero-cost access to the RISC-V Control and Status Registers.
//!
//! Every CSR is described once, declaratively, in [`registers`]; the
//! `csr_reg!` macro expands each entry into a provider type whose
//! operations are single `csr*` instructions. On top of that sit the
//! capability wrappers: [`reg::Csr`] for whole registers and
//! [`field::CsrField`] for bit fields, both zero-sized handles that only
//! expose the operations their access marker allows. Handing out a
//! [`access::ReadOnly`] handle makes writing a missing-method compile
//! error, never a runtime check.
#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![no_std]
#![allow(clippy::missing_safety_doc)]

#[macro_use]
mod macros;

pub mod access;
pub mod field;
pub mod ops;
pub mod reg;
pub mod registers;

pub use access::{ReadOnly, ReadWrite, WriteOnly};
pub use field::CsrField;
pub use ops::{fits_imm, CsrRead, CsrReadWrite, CsrSpec, CsrWrite, Privilege, IMM_BITS};
pub use reg::Csr;
