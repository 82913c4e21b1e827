//! Cipher dimensions.

//======================================================================
// src/consts.rs
//======================================================================

/// Number of full rounds. The output transform adds a half round.
pub const ROUNDS: usize = 8;

/// Sub-keys in one expanded schedule: 6 per round plus 4 for the
/// output transform.
pub const SCHEDULE_WORDS: usize = 6 * ROUNDS + 4;

/// 16-bit words in the user key.
pub const KEY_WORDS: usize = 8;

/// 16-bit words in one block.
pub const BLOCK_WORDS: usize = 4;

/// User key size in bytes. The only supported key size.
pub const KEY_SIZE: usize = 2 * KEY_WORDS;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 2 * BLOCK_WORDS;
