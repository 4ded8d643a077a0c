//! Maps a raw key hash onto the first slot of its probe sequence.
//!
//! The scramble is `(hash * A + B) mod capacity` in wrapping 64-bit
//! arithmetic, with `A` and `B` the two largest primes below 2^64. It is not
//! cryptographic; it only keeps clustered low hash bits from clustering the
//! probe start positions.

use crate::common::config::{SCALE_INCREMENT, SCALE_MULTIPLIER, SlotIndex};

/// Returns the slot index in `[0, capacity)` where probing for `hash` starts.
///
/// `capacity` must be non-zero; both adaptors enforce that at construction.
#[inline]
pub const fn scale_hash(hash: u64, capacity: usize) -> SlotIndex {
    let mixed = hash
        .wrapping_mul(SCALE_MULTIPLIER)
        .wrapping_add(SCALE_INCREMENT);
    (mixed % capacity as u64) as SlotIndex
}
