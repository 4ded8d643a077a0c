//! Crate-wide constants.

/// Index of a slot inside a table's backing array.
pub type SlotIndex = usize;

/** Multiplier of the scaling function (the largest prime below 2^64). */
pub const SCALE_MULTIPLIER: u64 = 18_446_744_073_709_551_557;

/** Increment of the scaling function (the second largest prime below 2^64). */
pub const SCALE_INCREMENT: u64 = 18_446_744_073_709_551_533;

/** 64-bit FNV-1a offset basis */
pub const FNV1A_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/** 64-bit FNV-1a prime */
pub const FNV1A_PRIME: u64 = 0x0000_0100_0000_01b3;
