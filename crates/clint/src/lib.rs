//! Driver for the machine timer of the RISC-V core-local interruptor.
//!
//! The CLINT exposes the free-running counter `mtime` and the one-shot
//! compare register `mtimecmp`; a timer interrupt is pending whenever
//! `mtime >= mtimecmp`. Both live in hardware for the lifetime of the
//! device. The driver stores nothing but the configured addresses and the
//! tick frequency; every operation goes straight to the memory-mapped
//! registers.
//!
//! On 64-bit targets the registers are accessed with single aligned
//! loads and stores. On 32-bit targets each register is a pair of words
//! and the access protocols in [`split`] are required for a torn-free
//! read and a spurious-interrupt-free compare update.
#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![no_std]
#![allow(clippy::missing_safety_doc)]

pub mod split;

use core::time::Duration;
use voladdress::{Safe, VolAddress};

/// Platform description of the CLINT timer block.
///
/// The register addresses and the tick frequency are platform data and
/// are never hard-coded in the driver.
pub trait ClintConfig {
    /// Physical address of the `mtime` counter.
    const MTIME_ADDR: usize;
    /// Physical address of the `mtimecmp` register of this hart.
    const MTIMECMP_ADDR: usize;
    /// Increment frequency of `mtime` in Hz.
    const MTIME_FREQ_HZ: u64;
}

/// Convert a raw tick count into a [`Duration`], truncating toward zero.
#[inline]
pub const fn ticks_to_duration(ticks: u64, freq_hz: u64) -> Duration {
    let secs = ticks / freq_hz;
    let nanos = (ticks % freq_hz) as u128 * 1_000_000_000 / freq_hz as u128;
    Duration::new(secs, nanos as u32)
}

/// Convert a [`Duration`] into a raw tick count, truncating toward zero.
///
/// Matches the truncation of a standard duration cast: `1000ms` at
/// `32768Hz` is exactly `32768` ticks, and any fraction of a tick is
/// dropped.
#[inline]
pub const fn duration_to_ticks(duration: Duration, freq_hz: u64) -> u64 {
    (duration.as_nanos() * freq_hz as u128 / 1_000_000_000) as u64
}

/// Handle to the machine timer of one hart.
#[cfg(not(target_pointer_width = "32"))]
pub struct MachineTimer {
    /// The free-running counter.
    mtime: VolAddress<u64, Safe, Safe>,
    /// The one-shot compare register.
    mtimecmp: VolAddress<u64, Safe, Safe>,
    /// Increment frequency of the counter in Hz.
    freq_hz: u64,
}

/// Handle to the machine timer of one hart.
///
/// The counter is wider than the bus, so each register is kept as its
/// two word halves.
#[cfg(target_pointer_width = "32")]
pub struct MachineTimer {
    mtime_lo: VolAddress<u32, Safe, Safe>,
    mtime_hi: VolAddress<u32, Safe, Safe>,
    mtimecmp_lo: VolAddress<u32, Safe, Safe>,
    mtimecmp_hi: VolAddress<u32, Safe, Safe>,
    /// Increment frequency of the counter in Hz.
    freq_hz: u64,
}

#[cfg(not(target_pointer_width = "32"))]
impl MachineTimer {
    /// Create a timer handle from raw register addresses.
    ///
    /// # Safety
    ///
    /// Both addresses must point to the mapped `mtime` / `mtimecmp`
    /// registers of the executing hart, and `freq_hz` must be the real
    /// timebase frequency.
    pub const unsafe fn new(mtime_addr: usize, mtimecmp_addr: usize, freq_hz: u64) -> Self {
        Self {
            mtime: VolAddress::new(mtime_addr),
            mtimecmp: VolAddress::new(mtimecmp_addr),
            freq_hz,
        }
    }

    /// Read the current counter value in raw ticks.
    ///
    /// One aligned load; the counter cannot tear.
    #[inline]
    pub fn get_raw_time(&self) -> u64 {
        self.mtime.read()
    }

    /// Arm the compare register `offset` ticks from now.
    ///
    /// Offsets are not validated; an absurd offset arms an absurd
    /// deadline.
    #[inline]
    pub fn set_raw_time_cmp(&self, offset: u64) {
        self.mtimecmp.write(self.get_raw_time().wrapping_add(offset));
    }

    /// Returns true if the timer interrupt condition currently holds.
    #[inline]
    pub fn interrupt_pending(&self) -> bool {
        self.mtime.read() >= self.mtimecmp.read()
    }
}

#[cfg(target_pointer_width = "32")]
impl MachineTimer {
    /// Create a timer handle from raw register addresses.
    ///
    /// # Safety
    ///
    /// Both addresses must point to the mapped `mtime` / `mtimecmp`
    /// registers of the executing hart, and `freq_hz` must be the real
    /// timebase frequency.
    pub const unsafe fn new(mtime_addr: usize, mtimecmp_addr: usize, freq_hz: u64) -> Self {
        Self {
            mtime_lo: VolAddress::new(mtime_addr),
            mtime_hi: VolAddress::new(mtime_addr + 4),
            mtimecmp_lo: VolAddress::new(mtimecmp_addr),
            mtimecmp_hi: VolAddress::new(mtimecmp_addr + 4),
            freq_hz,
        }
    }

    /// Read the current counter value in raw ticks.
    ///
    /// The counter keeps incrementing while its halves are read, so this
    /// goes through the hi-lo-hi retry protocol of [`split::read`].
    #[inline]
    pub fn get_raw_time(&self) -> u64 {
        split::read(|| self.mtime_hi.read(), || self.mtime_lo.read())
    }

    /// Arm the compare register `offset` ticks from now.
    ///
    /// The two halves are written through the all-ones-guard protocol of
    /// [`split::write_cmp`] so a concurrent compare never sees a
    /// transient deadline in the past. Offsets are not validated.
    #[inline]
    pub fn set_raw_time_cmp(&self, offset: u64) {
        let target = self.get_raw_time().wrapping_add(offset);

        split::write_cmp(
            |hi| self.mtimecmp_hi.write(hi),
            |lo| self.mtimecmp_lo.write(lo),
            target,
        );
    }

    /// Returns true if the timer interrupt condition currently holds.
    #[inline]
    pub fn interrupt_pending(&self) -> bool {
        let cmp = split::read(|| self.mtimecmp_hi.read(), || self.mtimecmp_lo.read());
        self.get_raw_time() >= cmp
    }
}

impl MachineTimer {
    /// Create a timer handle from a platform configuration.
    ///
    /// # Safety
    ///
    /// The configuration must describe the CLINT of the executing hart.
    pub const unsafe fn from_config<C: ClintConfig>() -> Self {
        Self::new(C::MTIME_ADDR, C::MTIMECMP_ADDR, C::MTIME_FREQ_HZ)
    }

    /// Read the current counter value as a [`Duration`] since counter
    /// reset, truncated toward zero.
    #[inline]
    pub fn get_time(&self) -> Duration {
        ticks_to_duration(self.get_raw_time(), self.freq_hz)
    }

    /// Arm the compare register `duration` from now, truncating the
    /// duration toward zero ticks.
    #[inline]
    pub fn set_time_cmp(&self, duration: Duration) {
        self.set_raw_time_cmp(duration_to_ticks(duration, self.freq_hz));
    }

    /// The configured timebase frequency in Hz.
    #[inline]
    pub const fn freq_hz(&self) -> u64 {
        self.freq_hz
    }
}
