//! Tests for the capability wrappers and field accessors, driven through
//! mock providers that store the register bits in an atomic and count how
//! often an immediate-encoded primitive was picked.

use core::sync::atomic::{AtomicUsize, Ordering};
use csr::registers::{mstatus, time};
use csr::{fits_imm, Csr, CsrField, CsrRead, CsrReadWrite, CsrSpec, CsrWrite, Privilege};
use csr::{ReadOnly, ReadWrite};

/// Declare a fresh mock register. Every test gets its own so the tests
/// can run in parallel without sharing bits.
macro_rules! mock_csr {
    ($name:ident) => {
        mod $name {
            use super::*;

            pub static BITS: AtomicUsize = AtomicUsize::new(0);
            pub static IMM_OPS: AtomicUsize = AtomicUsize::new(0);

            pub enum Ops {}

            impl CsrSpec for Ops {
                const NUM: u16 = 0x7C0;
                const PRIVILEGE: Privilege = Privilege::Mrw;
            }

            impl CsrRead for Ops {
                unsafe fn read() -> usize {
                    BITS.load(Ordering::SeqCst)
                }
            }

            impl CsrWrite for Ops {
                unsafe fn write(bits: usize) {
                    BITS.store(bits, Ordering::SeqCst);
                }

                unsafe fn write_imm<const V: usize>() {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.store(V, Ordering::SeqCst);
                }

                unsafe fn set_bits(mask: usize) {
                    BITS.fetch_or(mask, Ordering::SeqCst);
                }

                unsafe fn set_bits_imm<const M: usize>() {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.fetch_or(M, Ordering::SeqCst);
                }

                unsafe fn clr_bits(mask: usize) {
                    BITS.fetch_and(!mask, Ordering::SeqCst);
                }

                unsafe fn clr_bits_imm<const M: usize>() {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.fetch_and(!M, Ordering::SeqCst);
                }
            }

            impl CsrReadWrite for Ops {
                unsafe fn read_write(bits: usize) -> usize {
                    BITS.swap(bits, Ordering::SeqCst)
                }

                unsafe fn read_write_imm<const V: usize>() -> usize {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.swap(V, Ordering::SeqCst)
                }

                unsafe fn read_set_bits(mask: usize) -> usize {
                    BITS.fetch_or(mask, Ordering::SeqCst)
                }

                unsafe fn read_set_bits_imm<const M: usize>() -> usize {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.fetch_or(M, Ordering::SeqCst)
                }

                unsafe fn read_clr_bits(mask: usize) -> usize {
                    BITS.fetch_and(!mask, Ordering::SeqCst)
                }

                unsafe fn read_clr_bits_imm<const M: usize>() -> usize {
                    IMM_OPS.fetch_add(1, Ordering::SeqCst);
                    BITS.fetch_and(!M, Ordering::SeqCst)
                }
            }
        }
    };
}

mock_csr!(m_write_read);
mock_csr!(m_read_write);
mock_csr!(m_set_clr);
mock_csr!(m_read_set_clr);
mock_csr!(m_const_write);
mock_csr!(m_const_masks);
mock_csr!(m_field_write);
mock_csr!(m_field_read_write);
mock_csr!(m_field_set_clr);
mock_csr!(m_read_only);

#[test]
fn write_then_read_returns_value() {
    let reg = unsafe { Csr::<m_write_read::Ops, ReadWrite>::new() };
    reg.write(0xABCD);
    assert_eq!(reg.read(), 0xABCD);
}

#[test]
fn read_write_returns_previous_value() {
    let reg = unsafe { Csr::<m_read_write::Ops, ReadWrite>::new() };
    reg.write(0x11);
    assert_eq!(reg.read_write(0x22), 0x11);
    assert_eq!(reg.read(), 0x22);
}

#[test]
fn set_and_clr_toggle_masked_bits() {
    let mut reg = unsafe { Csr::<m_set_clr::Ops, ReadWrite>::new() };
    reg.write(0b1010);
    reg.set(0b0101);
    assert_eq!(reg.read(), 0b1111);
    reg.clr(0b0011);
    assert_eq!(reg.read(), 0b1100);

    // `|=` is an alias for set
    reg |= 0b0001;
    assert_eq!(reg.read(), 0b1101);
}

#[test]
fn read_set_and_read_clr_return_previous_value() {
    let reg = unsafe { Csr::<m_read_set_clr::Ops, ReadWrite>::new() };
    reg.write(0b1000);
    assert_eq!(reg.read_set_bits(0b0001), 0b1000);
    assert_eq!(reg.read_clr_bits(0b1000), 0b1001);
    assert_eq!(reg.read(), 0b0001);
}

#[test]
fn const_write_picks_immediate_form_when_value_fits() {
    let reg = unsafe { Csr::<m_const_write::Ops, ReadWrite>::new() };

    // 0x1F is the largest value the 5-bit immediate can carry
    reg.write_const::<0x1F>();
    assert_eq!(m_const_write::IMM_OPS.load(Ordering::SeqCst), 1);
    assert_eq!(reg.read(), 0x1F);

    // 0x20 does not fit and must go through the general form
    reg.write_const::<0x20>();
    assert_eq!(m_const_write::IMM_OPS.load(Ordering::SeqCst), 1);
    assert_eq!(reg.read(), 0x20);
}

#[test]
fn const_set_clr_and_read_write_dispatch_on_immediate_width() {
    let reg = unsafe { Csr::<m_const_masks::Ops, ReadWrite>::new() };

    reg.write(0);
    reg.set_const::<0b10001>();
    reg.clr_const::<0b00001>();
    assert_eq!(m_const_masks::IMM_OPS.load(Ordering::SeqCst), 2);
    assert_eq!(reg.read(), 0b10000);

    assert_eq!(reg.read_write_const::<0x3>(), 0b10000);
    assert_eq!(m_const_masks::IMM_OPS.load(Ordering::SeqCst), 3);

    // none of the wide masks below fit the immediate
    reg.set_const::<0x100>();
    reg.clr_const::<0x200>();
    assert_eq!(reg.read_set_bits_const::<0x400>(), 0x103);
    assert_eq!(reg.read_clr_bits_const::<0x500>(), 0x503);
    assert_eq!(m_const_masks::IMM_OPS.load(Ordering::SeqCst), 3);
    assert_eq!(reg.read(), 0x003);
}

#[test]
fn immediate_predicate_matches_five_bit_range() {
    assert!(fits_imm(0));
    assert!(fits_imm(1));
    assert!(fits_imm(31));
    assert!(!fits_imm(32));
    assert!(!fits_imm(usize::MAX));
}

#[test]
fn field_write_preserves_sibling_bits() {
    let reg = unsafe { Csr::<m_field_write::Ops, ReadWrite>::new() };
    let field = unsafe { CsrField::<m_field_write::Ops, ReadWrite, 4, 0xF0>::new() };

    reg.write(0xFFFF);
    field.write(0xA);
    assert_eq!(field.read(), 0xA);
    assert_eq!(reg.read(), 0xFFAF);

    // a value wider than the field is projected onto the mask
    field.write(0x1C);
    assert_eq!(field.read(), 0xC);
    assert_eq!(reg.read() & !0xF0, 0xFF0F);
}

#[test]
fn field_read_write_returns_previous_field_value() {
    let reg = unsafe { Csr::<m_field_read_write::Ops, ReadWrite>::new() };
    let field = unsafe { CsrField::<m_field_read_write::Ops, ReadWrite, 4, 0xF0>::new() };

    reg.write(0x0075);
    assert_eq!(field.read_write(0x3), 0x7);
    assert_eq!(reg.read(), 0x0035);
}

#[test]
fn field_set_and_clr_dispatch_on_mask_width() {
    let reg = unsafe { Csr::<m_field_set_clr::Ops, ReadWrite>::new() };

    // mask 0b11000 fits the immediate
    let low = unsafe { CsrField::<m_field_set_clr::Ops, ReadWrite, 3, 0b11000>::new() };
    low.set();
    assert_eq!(m_field_set_clr::IMM_OPS.load(Ordering::SeqCst), 1);
    assert_eq!(reg.read(), 0b11000);
    low.clr();
    assert_eq!(m_field_set_clr::IMM_OPS.load(Ordering::SeqCst), 2);
    assert_eq!(reg.read(), 0);

    // mask 0xF0 does not fit and must use the register form
    let high = unsafe { CsrField::<m_field_set_clr::Ops, ReadWrite, 4, 0xF0>::new() };
    high.set();
    assert_eq!(m_field_set_clr::IMM_OPS.load(Ordering::SeqCst), 2);
    assert_eq!(reg.read(), 0xF0);
}

#[test]
fn field_descriptor_introspection() {
    type Mpp = CsrField<mstatus::Ops, ReadWrite, 11, 0x1800>;

    assert_eq!(Mpp::offset(), 11);
    assert_eq!(Mpp::mask(), 0b11 << 11);
    assert_eq!(Mpp::width(), 2);
}

#[test]
fn read_only_handles_expose_read() {
    m_read_only::BITS.store(0x55, Ordering::SeqCst);
    let reg = unsafe { Csr::<m_read_only::Ops, ReadOnly>::new() };
    assert_eq!(reg.read(), 0x55);
    // reg.write(..) does not exist on a ReadOnly handle
}

#[test]
fn register_table_carries_spec_metadata() {
    assert_eq!(mstatus::Ops::NUM, 0x300);
    assert_eq!(mstatus::Ops::PRIVILEGE, Privilege::Mrw);
    assert_eq!(time::Ops::NUM, 0xC01);
    assert_eq!(time::Ops::PRIVILEGE, Privilege::Uro);

    assert_eq!(mstatus::Mie::mask(), 1 << 3);
    assert_eq!(mstatus::Mpp::width(), 2);
    assert_eq!(mstatus::Mpp::offset(), 11);
}
