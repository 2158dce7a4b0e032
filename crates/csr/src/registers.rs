//! The CSR table.
//!
//! One `csr_reg!` entry per register: number, accessibility tag and the
//! fields worth naming. This is mechanical data, regenerable from the
//! register listing of the privileged spec. XLEN-dependent fields
//! (`mstatus.SD`, the `satp` layout) are left to raw register reads so
//! the table builds on both riscv32 and riscv64.

csr_reg! {
    /// Vendor ID register.
    pub ro mvendorid: 0xF11, Mro
}

csr_reg! {
    /// Architecture ID register.
    pub ro marchid: 0xF12, Mro
}

csr_reg! {
    /// Implementation ID register.
    pub ro mimpid: 0xF13, Mro
}

csr_reg! {
    /// Hardware thread ID register.
    pub ro mhartid: 0xF14, Mro
}

csr_reg! {
    /// Machine status register.
    pub rw mstatus: 0x300, Mrw {
        /// Supervisor interrupt enable.
        Sie: 1, 1;
        /// Machine interrupt enable.
        Mie: 3, 1;
        /// Supervisor prior interrupt enable.
        Spie: 5, 1;
        /// Machine prior interrupt enable.
        Mpie: 7, 1;
        /// Supervisor previous privilege mode.
        Spp: 8, 1;
        /// Machine previous privilege mode.
        Mpp: 11, 2;
        /// Floating-point unit state.
        Fs: 13, 2;
        /// Extension unit state.
        Xs: 15, 2;
        /// Modify privilege of loads and stores.
        Mprv: 17, 1;
        /// Permit supervisor access to user memory.
        Sum: 18, 1;
        /// Make executable pages readable.
        Mxr: 19, 1;
        /// Trap virtual memory management operations.
        Tvm: 20, 1;
        /// Trap the WFI instruction after its timeout.
        Tw: 21, 1;
        /// Trap the SRET instruction.
        Tsr: 22, 1;
    }
}

csr_reg! {
    /// Machine ISA register.
    pub rw misa: 0x301, Mrw
}

csr_reg! {
    /// Machine exception delegation register.
    pub rw medeleg: 0x302, Mrw
}

csr_reg! {
    /// Machine interrupt delegation register.
    pub rw mideleg: 0x303, Mrw
}

csr_reg! {
    /// Machine interrupt enable register.
    pub rw mie: 0x304, Mrw {
        /// Enable supervisor software interrupts.
        Ssie: 1, 1;
        /// Enable machine software interrupts.
        Msie: 3, 1;
        /// Enable supervisor timer interrupts.
        Stie: 5, 1;
        /// Enable machine timer interrupts.
        Mtie: 7, 1;
        /// Enable supervisor external interrupts.
        Seie: 9, 1;
        /// Enable machine external interrupts.
        Meie: 11, 1;
    }
}

csr_reg! {
    /// Machine trap vector base address register.
    pub rw mtvec: 0x305, Mrw {
        /// Trap vector mode (direct or vectored).
        Mode: 0, 2;
    }
}

csr_reg! {
    /// Machine counter enable register.
    pub rw mcounteren: 0x306, Mrw {
        /// Permit cycle counter access to the next lower privilege.
        Cy: 0, 1;
        /// Permit time counter access to the next lower privilege.
        Tm: 1, 1;
        /// Permit instret counter access to the next lower privilege.
        Ir: 2, 1;
    }
}

csr_reg! {
    /// Machine scratch register.
    pub rw mscratch: 0x340, Mrw
}

csr_reg! {
    /// Machine exception program counter.
    pub rw mepc: 0x341, Mrw
}

csr_reg! {
    /// Machine trap cause register.
    pub rw mcause: 0x342, Mrw
}

csr_reg! {
    /// Machine trap value register.
    pub rw mtval: 0x343, Mrw
}

csr_reg! {
    /// Machine interrupt pending register.
    pub rw mip: 0x344, Mrw {
        /// Supervisor software interrupt pending.
        Ssip: 1, 1;
        /// Machine software interrupt pending.
        Msip: 3, 1;
        /// Supervisor timer interrupt pending.
        Stip: 5, 1;
        /// Machine timer interrupt pending.
        Mtip: 7, 1;
        /// Supervisor external interrupt pending.
        Seip: 9, 1;
        /// Machine external interrupt pending.
        Meip: 11, 1;
    }
}

csr_reg! {
    /// Supervisor status register.
    pub rw sstatus: 0x100, Srw {
        /// Supervisor interrupt enable.
        Sie: 1, 1;
        /// Supervisor prior interrupt enable.
        Spie: 5, 1;
        /// Supervisor previous privilege mode.
        Spp: 8, 1;
        /// Permit supervisor access to user memory.
        Sum: 18, 1;
        /// Make executable pages readable.
        Mxr: 19, 1;
    }
}

csr_reg! {
    /// Supervisor interrupt enable register.
    pub rw sie: 0x104, Srw {
        /// Enable supervisor software interrupts.
        Ssie: 1, 1;
        /// Enable supervisor timer interrupts.
        Stie: 5, 1;
        /// Enable supervisor external interrupts.
        Seie: 9, 1;
    }
}

csr_reg! {
    /// Supervisor trap vector base address register.
    pub rw stvec: 0x105, Srw {
        /// Trap vector mode (direct or vectored).
        Mode: 0, 2;
    }
}

csr_reg! {
    /// Supervisor counter enable register.
    pub rw scounteren: 0x106, Srw {
        /// Permit cycle counter access to user mode.
        Cy: 0, 1;
        /// Permit time counter access to user mode.
        Tm: 1, 1;
        /// Permit instret counter access to user mode.
        Ir: 2, 1;
    }
}

csr_reg! {
    /// Supervisor scratch register.
    pub rw sscratch: 0x140, Srw
}

csr_reg! {
    /// Supervisor exception program counter.
    pub rw sepc: 0x141, Srw
}

csr_reg! {
    /// Supervisor trap cause register.
    pub rw scause: 0x142, Srw
}

csr_reg! {
    /// Supervisor trap value register.
    pub rw stval: 0x143, Srw
}

csr_reg! {
    /// Supervisor interrupt pending register.
    pub rw sip: 0x144, Srw {
        /// Supervisor software interrupt pending.
        Ssip: 1, 1;
        /// Supervisor timer interrupt pending.
        Stip: 5, 1;
        /// Supervisor external interrupt pending.
        Seip: 9, 1;
    }
}

csr_reg! {
    /// Supervisor address translation and protection register.
    pub rw satp: 0x180, Srw
}

csr_reg! {
    /// Cycle counter, read-only user-mode shadow.
    pub ro cycle: 0xC00, Uro
}

csr_reg! {
    /// Timer counter, read-only user-mode shadow of `mtime`.
    pub ro time: 0xC01, Uro
}

csr_reg! {
    /// Retired instruction counter, read-only user-mode shadow.
    pub ro instret: 0xC02, Uro
}
