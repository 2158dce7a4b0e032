//! Bit-field accessors at sub-register granularity.

use crate::access::{Readable, Writable};
use crate::ops::{fits_imm, CsrRead, CsrWrite};
use core::marker::PhantomData;

/// A zero-sized handle to one bit field of a CSR.
///
/// The field descriptor lives entirely in the const parameters: `OFFSET`
/// is the position of the first bit and `MASK` the field's bits already
/// shifted into place. `csr_reg!` computes `MASK` from the declared
/// offset and width. Like [`Csr`](crate::reg::Csr), the handle is
/// non-copyable and owns nothing.
pub struct CsrField<O, A, const OFFSET: usize, const MASK: usize> {
    _handle: PhantomData<(O, A)>,
}

impl<O, A, const OFFSET: usize, const MASK: usize> CsrField<O, A, OFFSET, MASK> {
    /// Create a handle to this field.
    ///
    /// # Safety
    ///
    /// Same contract as [`Csr::new`](crate::reg::Csr::new): the CSR must
    /// exist and be accessible at the current privilege level.
    #[inline]
    pub const unsafe fn new() -> Self {
        Self {
            _handle: PhantomData,
        }
    }

    /// Position of the first bit of this field.
    #[inline]
    pub const fn offset() -> usize {
        OFFSET
    }

    /// Mask of this field, shifted into place within the register.
    #[inline]
    pub const fn mask() -> usize {
        MASK
    }

    /// Width of this field in bits.
    #[inline]
    pub const fn width() -> u32 {
        (MASK >> OFFSET).count_ones()
    }
}

impl<O: CsrRead, A: Readable, const OFFSET: usize, const MASK: usize>
    CsrField<O, A, OFFSET, MASK>
{
    /// Read this field, shifted down to bit zero.
    #[inline(always)]
    pub fn read(&self) -> usize {
        (unsafe { O::read() } & MASK) >> OFFSET
    }
}

impl<O: CsrWrite, A: Writable, const OFFSET: usize, const MASK: usize>
    CsrField<O, A, OFFSET, MASK>
{
    /// Set every bit of this field to one.
    ///
    /// A single `csrs` instruction, atomic against any other access to
    /// the register; immediate-encoded when the mask fits 5 bits.
    #[inline(always)]
    pub fn set(&self) {
        if fits_imm(MASK) {
            unsafe { O::set_bits_imm::<MASK>() }
        } else {
            unsafe { O::set_bits(MASK) }
        }
    }

    /// Clear every bit of this field.
    ///
    /// A single `csrc` instruction, atomic against any other access to
    /// the register; immediate-encoded when the mask fits 5 bits.
    #[inline(always)]
    pub fn clr(&self) {
        if fits_imm(MASK) {
            unsafe { O::clr_bits_imm::<MASK>() }
        } else {
            unsafe { O::clr_bits(MASK) }
        }
    }
}

impl<O: CsrRead + CsrWrite, A: Readable + Writable, const OFFSET: usize, const MASK: usize>
    CsrField<O, A, OFFSET, MASK>
{
    /// Write `value` into this field, leaving all sibling bits untouched.
    ///
    /// One register read followed by one register write. NOTE - not
    /// atomic: an interrupt handler modifying the same register between
    /// the two accesses will have its update lost. Callers needing
    /// atomicity must use the register-level `set`/`clr` primitives.
    #[inline(always)]
    pub fn write(&self, value: usize) {
        let old = unsafe { O::read() };
        let new = (old & !MASK) | ((value << OFFSET) & MASK);
        unsafe { O::write(new) };
    }

    /// Write `value` into this field and return the value the field held
    /// before.
    ///
    /// Same read-then-write sequence as [`CsrField::write`]; NOTE - not
    /// atomic.
    #[inline(always)]
    pub fn read_write(&self, value: usize) -> usize {
        let old = unsafe { O::read() };
        let new = (old & !MASK) | ((value << OFFSET) & MASK);
        unsafe { O::write(new) };
        (old & MASK) >> OFFSET
    }
}
