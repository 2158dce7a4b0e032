//! Capability wrappers around the raw register operation providers.

use crate::access::{Readable, Writable};
use crate::ops::{fits_imm, CsrRead, CsrReadWrite, CsrWrite};
use core::marker::PhantomData;
use core::ops::BitOrAssign;

/// A zero-sized handle to one CSR, restricted to the access mode `A`.
///
/// The handle owns nothing; it is a view onto hardware state, and any
/// number of handles to the same CSR are interchangeable. It is
/// deliberately neither `Copy` nor `Clone` so a handle can be given away
/// without silently leaving a second one behind.
///
/// Methods only exist for the capabilities `A` grants, so writing through
/// a [`ReadOnly`](crate::access::ReadOnly) handle is a compile error.
pub struct Csr<O, A> {
    _handle: PhantomData<(O, A)>,
}

impl<O, A> Csr<O, A> {
    /// Create a handle to this CSR.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the CSR exists on the executing core
    /// and that the current privilege level is allowed to access it.
    #[inline]
    pub const unsafe fn new() -> Self {
        Self {
            _handle: PhantomData,
        }
    }
}

impl<O: CsrRead, A: Readable> Csr<O, A> {
    /// Read the raw bits of this CSR.
    #[inline(always)]
    pub fn read(&self) -> usize {
        unsafe { O::read() }
    }
}

impl<O: CsrWrite, A: Writable> Csr<O, A> {
    /// Overwrite this CSR.
    #[inline(always)]
    pub fn write(&self, bits: usize) {
        unsafe { O::write(bits) }
    }

    /// Overwrite this CSR with a constant.
    ///
    /// Picks the immediate-encoded instruction when `V` fits the 5-bit
    /// immediate, the general form otherwise. The choice is made on a
    /// monomorphization-time constant and folds to straight-line code.
    #[inline(always)]
    pub fn write_const<const V: usize>(&self) {
        if fits_imm(V) {
            unsafe { O::write_imm::<V>() }
        } else {
            unsafe { O::write(V) }
        }
    }

    /// Set all bits of `mask` inside this CSR.
    ///
    /// A single instruction, atomic against any other access to this CSR.
    #[inline(always)]
    pub fn set(&self, mask: usize) {
        unsafe { O::set_bits(mask) }
    }

    /// Set all bits of a constant mask, immediate-encoded when possible.
    #[inline(always)]
    pub fn set_const<const M: usize>(&self) {
        if fits_imm(M) {
            unsafe { O::set_bits_imm::<M>() }
        } else {
            unsafe { O::set_bits(M) }
        }
    }

    /// Clear all bits of `mask` inside this CSR.
    ///
    /// A single instruction, atomic against any other access to this CSR.
    #[inline(always)]
    pub fn clr(&self, mask: usize) {
        unsafe { O::clr_bits(mask) }
    }

    /// Clear all bits of a constant mask, immediate-encoded when possible.
    #[inline(always)]
    pub fn clr_const<const M: usize>(&self) {
        if fits_imm(M) {
            unsafe { O::clr_bits_imm::<M>() }
        } else {
            unsafe { O::clr_bits(M) }
        }
    }
}

impl<O: CsrReadWrite, A: Readable + Writable> Csr<O, A> {
    /// Overwrite this CSR and return the value it held before.
    #[inline(always)]
    pub fn read_write(&self, bits: usize) -> usize {
        unsafe { O::read_write(bits) }
    }

    /// Overwrite this CSR with a constant and return the previous value,
    /// immediate-encoded when possible.
    #[inline(always)]
    pub fn read_write_const<const V: usize>(&self) -> usize {
        if fits_imm(V) {
            unsafe { O::read_write_imm::<V>() }
        } else {
            unsafe { O::read_write(V) }
        }
    }

    /// Set all bits of `mask` and return the value the CSR held before.
    #[inline(always)]
    pub fn read_set_bits(&self, mask: usize) -> usize {
        unsafe { O::read_set_bits(mask) }
    }

    /// Set a constant mask and return the previous value.
    #[inline(always)]
    pub fn read_set_bits_const<const M: usize>(&self) -> usize {
        if fits_imm(M) {
            unsafe { O::read_set_bits_imm::<M>() }
        } else {
            unsafe { O::read_set_bits(M) }
        }
    }

    /// Clear all bits of `mask` and return the value the CSR held before.
    #[inline(always)]
    pub fn read_clr_bits(&self, mask: usize) -> usize {
        unsafe { O::read_clr_bits(mask) }
    }

    /// Clear a constant mask and return the previous value.
    #[inline(always)]
    pub fn read_clr_bits_const<const M: usize>(&self) -> usize {
        if fits_imm(M) {
            unsafe { O::read_clr_bits_imm::<M>() }
        } else {
            unsafe { O::read_clr_bits(M) }
        }
    }
}

/// `csr |= mask` as an alias for [`Csr::set`].
impl<O: CsrWrite, A: Writable> BitOrAssign<usize> for Csr<O, A> {
    #[inline(always)]
    fn bitor_assign(&mut self, mask: usize) {
        self.set(mask);
    }
}
