//! aesfold Kernel Constants
//!
//! Salts are stored as `(lo, hi)` 64-bit halves of a little-endian 128-bit
//! vector, i.e. byte 0 of the vector is the lowest byte of `lo`.

use static_assertions::const_assert_eq;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Size of a single 128-bit vector (one block) in bytes.
pub const VEC_SIZE: usize = 16;

/// Public alias: the unit of input consumption.
pub const BLOCK_SIZE: usize = VEC_SIZE;

/// Number of independent accumulator lanes in the unrolled path.
pub const UNROLL_LANES: usize = 8;

/// Inputs of at least this many bytes take the unrolled 8-lane path.
pub const UNROLL_THRESHOLD: usize = VEC_SIZE * UNROLL_LANES;

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
pub const GF_POLY: u8 = 0x1b;

// The pairwise reduction tree in `fold` is written for exactly 8 lanes.
const_assert_eq!(UNROLL_LANES, 8);
const_assert_eq!(UNROLL_THRESHOLD, 128);
const_assert_eq!(VEC_SIZE, core::mem::size_of::<u128>());

// =============================================================================
// FINALIZATION SALTS
// =============================================================================

/// Salt for the first full finalization round.
/// Words: `0x713B01D0 0x8F2F35DB 0xAF163956 0x85459F85`
pub const SALT1: (u64, u64) = (0x8F2F_35DB_713B_01D0, 0x8545_9F85_AF16_3956);

/// Salt for the second full finalization round.
/// Words: `0x1DE09647 0x92CFA39C 0x3DD99ACA 0xB89C054F`
pub const SALT2: (u64, u64) = (0x92CF_A39C_1DE0_9647, 0xB89C_054F_3DD9_9ACA);

/// Salt for the last finalization round.
/// Words: `0xC78B122B 0x5544B1B7 0x689D2B7D 0xD0012E32`
pub const SALT3: (u64, u64) = (0x5544_B1B7_C78B_122B, 0xD001_2E32_689D_2B7D);

// =============================================================================
// GOLDEN VALUES
// =============================================================================

/// `finalize(zero())`: the hash of the empty input.
pub const EMPTY_HASH: u64 = 0x59DE_74BD_F121_E971;
