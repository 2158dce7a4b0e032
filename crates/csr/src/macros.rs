#![allow(unused_macros)]

//! Macros that expand one declarative register description into its
//! provider type, instruction implementations and handle aliases.
//!
//! The per-register output is mechanical data; the whole CSR table in
//! [`crate::registers`] is regenerable from the register listing of the
//! privileged spec.

/// Generate the [`CsrRead`](crate::ops::CsrRead) implementation for one
/// provider type. `csrr` with the register number as a literal.
macro_rules! csr_read_ops {
    ($ops:ident, $num:literal) => {
        #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
        impl $crate::ops::CsrRead for $ops {
            #[inline(always)]
            unsafe fn read() -> usize {
                let bits: usize;
                core::arch::asm!("csrr {}, {num}", out(reg) bits, num = const $num);
                bits
            }
        }
    };
}

/// Generate the [`CsrWrite`](crate::ops::CsrWrite) implementation for one
/// provider type.
///
/// The immediate forms mask their operand to 5 bits so that the
/// never-taken arm of a `_const` dispatch still assembles; the reachable
/// arm only ever carries values the mask leaves unchanged.
macro_rules! csr_write_ops {
    ($ops:ident, $num:literal) => {
        #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
        impl $crate::ops::CsrWrite for $ops {
            #[inline(always)]
            unsafe fn write(bits: usize) {
                core::arch::asm!("csrw {num}, {}", in(reg) bits, num = const $num);
            }

            #[inline(always)]
            unsafe fn write_imm<const V: usize>() {
                core::arch::asm!("csrwi {num}, {v}", num = const $num, v = const V & 0x1F);
            }

            #[inline(always)]
            unsafe fn set_bits(mask: usize) {
                core::arch::asm!("csrs {num}, {}", in(reg) mask, num = const $num);
            }

            #[inline(always)]
            unsafe fn set_bits_imm<const M: usize>() {
                core::arch::asm!("csrsi {num}, {m}", num = const $num, m = const M & 0x1F);
            }

            #[inline(always)]
            unsafe fn clr_bits(mask: usize) {
                core::arch::asm!("csrc {num}, {}", in(reg) mask, num = const $num);
            }

            #[inline(always)]
            unsafe fn clr_bits_imm<const M: usize>() {
                core::arch::asm!("csrci {num}, {m}", num = const $num, m = const M & 0x1F);
            }
        }
    };
}

/// Generate the [`CsrReadWrite`](crate::ops::CsrReadWrite) implementation
/// for one provider type. Same instructions as `csr_write_ops!`, in
/// their value-returning forms.
macro_rules! csr_read_write_ops {
    ($ops:ident, $num:literal) => {
        #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
        impl $crate::ops::CsrReadWrite for $ops {
            #[inline(always)]
            unsafe fn read_write(bits: usize) -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrw {}, {num}, {}",
                    out(reg) old,
                    in(reg) bits,
                    num = const $num,
                );
                old
            }

            #[inline(always)]
            unsafe fn read_write_imm<const V: usize>() -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrwi {}, {num}, {v}",
                    out(reg) old,
                    num = const $num,
                    v = const V & 0x1F,
                );
                old
            }

            #[inline(always)]
            unsafe fn read_set_bits(mask: usize) -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrs {}, {num}, {}",
                    out(reg) old,
                    in(reg) mask,
                    num = const $num,
                );
                old
            }

            #[inline(always)]
            unsafe fn read_set_bits_imm<const M: usize>() -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrsi {}, {num}, {m}",
                    out(reg) old,
                    num = const $num,
                    m = const M & 0x1F,
                );
                old
            }

            #[inline(always)]
            unsafe fn read_clr_bits(mask: usize) -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrc {}, {num}, {}",
                    out(reg) old,
                    in(reg) mask,
                    num = const $num,
                );
                old
            }

            #[inline(always)]
            unsafe fn read_clr_bits_imm<const M: usize>() -> usize {
                let old: usize;
                core::arch::asm!(
                    "csrrci {}, {num}, {m}",
                    out(reg) old,
                    num = const $num,
                    m = const M & 0x1F,
                );
                old
            }
        }
    };
}

/// Expand one declarative register description into a module holding the
/// provider type, its instruction implementations and the handle aliases.
///
/// ```ignore
/// csr_reg! {
///     /// Machine status register.
///     pub rw mstatus: 0x300, Mrw {
///         /// Machine interrupt enable.
///         Mie: 3, 1;
///     }
/// }
/// ```
macro_rules! csr_reg {
    (
        $(#[$doc:meta])*
        pub rw $name:ident: $num:literal, $priv:ident $({
            $(
                $(#[$fdoc:meta])*
                $field:ident: $offset:literal, $width:literal;
            )*
        })?
    ) => {
        $(#[$doc])*
        pub mod $name {
            /// Raw operations bound to this CSR.
            pub enum Ops {}

            impl $crate::ops::CsrSpec for Ops {
                const NUM: u16 = $num;
                const PRIVILEGE: $crate::ops::Privilege = $crate::ops::Privilege::$priv;
            }

            csr_read_ops!(Ops, $num);
            csr_write_ops!(Ops, $num);
            csr_read_write_ops!(Ops, $num);

            /// Handle with full access to this CSR.
            pub type Reg = $crate::reg::Csr<Ops, $crate::access::ReadWrite>;

            $($(
                $(#[$fdoc])*
                pub type $field = $crate::field::CsrField<
                    Ops,
                    $crate::access::ReadWrite,
                    $offset,
                    { ((1usize << $width) - 1) << $offset },
                >;
            )*)?
        }
    };

    (
        $(#[$doc:meta])*
        pub ro $name:ident: $num:literal, $priv:ident $({
            $(
                $(#[$fdoc:meta])*
                $field:ident: $offset:literal, $width:literal;
            )*
        })?
    ) => {
        $(#[$doc])*
        pub mod $name {
            /// Raw operations bound to this CSR.
            pub enum Ops {}

            impl $crate::ops::CsrSpec for Ops {
                const NUM: u16 = $num;
                const PRIVILEGE: $crate::ops::Privilege = $crate::ops::Privilege::$priv;
            }

            csr_read_ops!(Ops, $num);

            /// Handle with read access to this CSR.
            pub type Reg = $crate::reg::Csr<Ops, $crate::access::ReadOnly>;

            $($(
                $(#[$fdoc])*
                pub type $field = $crate::field::CsrField<
                    Ops,
                    $crate::access::ReadOnly,
                    $offset,
                    { ((1usize << $width) - 1) << $offset },
                >;
            )*)?
        }
    };
}
