//! Protocols for accessing a 64-bit timer register through two 32-bit
//! words.
//!
//! On targets whose bus is narrower than the counter, `mtime` and
//! `mtimecmp` are a pair of memory words that cannot be accessed in one
//! instruction, while the counter keeps incrementing in hardware. The
//! functions here are generic over the word accessors so the protocols
//! can be exercised against simulated registers.

/// Read a 64-bit counter split into two 32-bit words.
///
/// Reads high, then low, then high again. If the two high reads differ,
/// the low half wrapped somewhere in between and the low read may belong
/// to either epoch, so the read is retried with the new high value. The
/// loop runs until two consecutive high reads agree; there is no
/// iteration cap, the bound is the wrap period of the low half (seconds
/// to hours of wall time per wrap).
#[inline]
pub fn read(mut read_hi: impl FnMut() -> u32, mut read_lo: impl FnMut() -> u32) -> u64 {
    let mut hi = read_hi();

    loop {
        let lo = read_lo();
        let again = read_hi();

        if hi == again {
            return (u64::from(hi) << 32) | u64::from(lo);
        }

        hi = again;
    }
}

/// Write a 64-bit compare value split into two 32-bit words.
///
/// Writing the halves naively can expose a transient compare value below
/// the intended target and fire a spurious timer interrupt. The protocol
/// therefore goes through three stores, in exactly this order:
///
/// 1. high half to all-ones, moving the compare out of reach,
/// 2. the true low half,
/// 3. the true high half.
///
/// A concurrent reader of the pair never observes a combined value below
/// the maximum of the old and the new compare value.
#[inline]
pub fn write_cmp(mut write_hi: impl FnMut(u32), mut write_lo: impl FnMut(u32), value: u64) {
    write_hi(u32::MAX);
    write_lo(value as u32);
    write_hi((value >> 32) as u32);
}
