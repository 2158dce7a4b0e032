//! Raw per-register operation providers.
//!
//! Each CSR gets its own uninhabited provider type implementing the traits
//! below; the implementations are generated by `csr_reg!` and every
//! method is exactly one `csr*` instruction. Nothing is cached: each call
//! goes straight to hardware.

/// Width of the immediate operand in the `csrrwi` family of instructions.
pub const IMM_BITS: u32 = 5;

/// Returns true if `value` can be encoded in the 5-bit immediate of the
/// `csrwi`/`csrsi`/`csrci` instruction forms.
#[inline(always)]
pub const fn fits_imm(value: usize) -> bool {
    value & ((1 << IMM_BITS) - 1) == value
}

/// CSR accessibility tag, straight from the register listing of the
/// privileged spec. Descriptive only; consumed by external tooling and
/// never checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// User-level, read-write.
    Urw,
    /// User-level, read-only.
    Uro,
    /// Supervisor-level, read-write.
    Srw,
    /// Supervisor-level, read-only.
    Sro,
    /// Hypervisor-level, read-write.
    Hrw,
    /// Hypervisor-level, read-only.
    Hro,
    /// Machine-level, read-write.
    Mrw,
    /// Machine-level, read-only.
    Mro,
    /// Debug-mode, read-write.
    Drw,
    /// Debug-mode, read-only.
    Dro,
}

/// Compile-time description of one CSR.
pub trait CsrSpec {
    /// The CSR number as encoded in the instruction.
    const NUM: u16;
    /// The accessibility tag of this CSR.
    const PRIVILEGE: Privilege;
}

/// Provider of the raw read operation of one CSR.
pub trait CsrRead: CsrSpec {
    /// Read the raw bits out of this CSR.
    unsafe fn read() -> usize;
}

/// Provider of the raw write operations of one CSR.
///
/// The `_imm` forms take their operand as a const generic so the value is
/// encoded directly into the instruction. The generated implementations
/// mask the operand to [`IMM_BITS`]; callers must only reach an `_imm`
/// form with a value for which [`fits_imm`] holds.
pub trait CsrWrite: CsrSpec {
    /// Overwrite this CSR with the given bits.
    unsafe fn write(bits: usize);

    /// Overwrite this CSR with an immediate-encoded constant.
    unsafe fn write_imm<const V: usize>();

    /// Set all bits specified by the mask inside this CSR.
    ///
    /// A single instruction, atomic against any other access to this CSR.
    unsafe fn set_bits(mask: usize);

    /// Set all bits specified by an immediate-encoded mask.
    unsafe fn set_bits_imm<const M: usize>();

    /// Clear all bits specified by the mask inside this CSR.
    ///
    /// A single instruction, atomic against any other access to this CSR.
    unsafe fn clr_bits(mask: usize);

    /// Clear all bits specified by an immediate-encoded mask.
    unsafe fn clr_bits_imm<const M: usize>();
}

/// Provider of the raw operations that modify one CSR and return its
/// previous value, still as single instructions.
pub trait CsrReadWrite: CsrRead + CsrWrite {
    /// Overwrite this CSR and return the value it held before.
    unsafe fn read_write(bits: usize) -> usize;

    /// Overwrite this CSR with an immediate-encoded constant and return
    /// the value it held before.
    unsafe fn read_write_imm<const V: usize>() -> usize;

    /// Set the masked bits and return the value the CSR held before.
    unsafe fn read_set_bits(mask: usize) -> usize;

    /// Set an immediate-encoded mask and return the previous value.
    unsafe fn read_set_bits_imm<const M: usize>() -> usize;

    /// Clear the masked bits and return the value the CSR held before.
    unsafe fn read_clr_bits(mask: usize) -> usize;

    /// Clear an immediate-encoded mask and return the previous value.
    unsafe fn read_clr_bits_imm<const M: usize>() -> usize;
}
