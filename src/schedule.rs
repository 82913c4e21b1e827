//======================================================================
// src/schedule.rs
// Key schedule: expansion of the 128-bit user key into 52 encryption
// sub-keys, and derivation of the 52 decryption sub-keys from them.
//======================================================================

use crate::arith::{add_inv, mul_inv};
use crate::consts::{KEY_WORDS, ROUNDS, SCHEDULE_WORDS};

/// Expands eight user-key words into the 52-word encryption schedule.
///
/// Words 0..8 are the user key verbatim. Every further word is a 16-bit
/// window of the user key rotated left by 25 bits per group of eight
/// words, expressed word-wise: the low 7 bits of one earlier word become
/// the high bits, the high 9 bits of another become the low bits. Which
/// earlier words feed the window depends only on `i mod 8`.
pub(crate) fn expand(user_key: &[u16; KEY_WORDS]) -> [u16; SCHEDULE_WORDS] {
    let mut k = [0u16; SCHEDULE_WORDS];
    k[..KEY_WORDS].copy_from_slice(user_key);
    for i in KEY_WORDS..SCHEDULE_WORDS {
        k[i] = match i & 7 {
            0..=5 => (k[i - 7] & 127) << 9 | k[i - 6] >> 7,
            6 => (k[i - 7] & 127) << 9 | k[i - 14] >> 7,
            _ => (k[i - 15] & 127) << 9 | k[i - 14] >> 7,
        };
    }
    k
}

/// Derives the decryption schedule from an encryption schedule.
///
/// Decryption round `r` (0-based; `r == ROUNDS` is the output transform)
/// draws its four mul/add sub-keys from encryption slice `6 * (ROUNDS - r)`
/// and its two MA sub-keys, unchanged in value, from slice
/// `6 * (ROUNDS - 1 - r)`. Mul-role keys are replaced by their
/// multiplicative inverse and add-role keys by their additive inverse.
/// The two add-role keys swap places for interior rounds only: the round
/// function leaves x1/x2 swapped at round exit, and the neighboring
/// slices on the inverse path must compensate, while the slices adjacent
/// to block input and output transform see the words unswapped.
///
/// Each destination index is computed from (round, role) directly, so the
/// mapping holds for any round count without a parity special case.
pub(crate) fn invert(enc: &[u16; SCHEDULE_WORDS]) -> [u16; SCHEDULE_WORDS] {
    let mut dec = [0u16; SCHEDULE_WORDS];
    for r in 0..=ROUNDS {
        let dst = 6 * r;
        let src = 6 * (ROUNDS - r);
        dec[dst] = mul_inv(enc[src]);
        if r == 0 || r == ROUNDS {
            dec[dst + 1] = add_inv(enc[src + 1]);
            dec[dst + 2] = add_inv(enc[src + 2]);
        } else {
            dec[dst + 1] = add_inv(enc[src + 2]);
            dec[dst + 2] = add_inv(enc[src + 1]);
        }
        dec[dst + 3] = mul_inv(enc[src + 3]);
        if r < ROUNDS {
            let ma = 6 * (ROUNDS - 1 - r);
            dec[dst + 4] = enc[ma + 4];
            dec[dst + 5] = enc[ma + 5];
        }
    }
    dec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::mul;

    #[test]
    fn expansion_starts_with_user_key() {
        let user = [1u16, 2, 3, 4, 5, 6, 7, 8];
        let k = expand(&user);
        assert_eq!(&k[..8], &user);
    }

    #[test]
    fn expansion_window_rule() {
        let user = [0x0102u16, 0x0304, 0x0506, 0x0708, 0x090A, 0x0B0C, 0x0D0E, 0x0F10];
        let k = expand(&user);
        // i = 8: low 7 bits of k[1] shifted high, top 9 bits of k[2] low.
        assert_eq!(k[8], (user[1] & 127) << 9 | user[2] >> 7);
        // i = 14: the (i mod 8 == 6) rule reaches back to k[0].
        assert_eq!(k[14], (k[7] & 127) << 9 | k[0] >> 7);
        // i = 15: the (i mod 8 == 7) rule.
        assert_eq!(k[15], (k[0] & 127) << 9 | k[1] >> 7);
    }

    #[test]
    fn inversion_is_deterministic() {
        let k = expand(&[0xDEAD, 0xBEEF, 0xCAFE, 0xF00D, 1, 2, 3, 4]);
        assert_eq!(invert(&k), invert(&k));
    }

    #[test]
    fn inversion_inverts_mul_and_add_roles() {
        let enc = expand(&[9u16, 8, 7, 6, 5, 4, 3, 2]);
        let dec = invert(&enc);
        // Output-transform slot of the decryption schedule undoes the
        // first encryption round's keyed operations.
        assert_eq!(mul(enc[0], dec[48]), 1);
        assert_eq!(enc[1].wrapping_add(dec[49]), 0);
        assert_eq!(enc[2].wrapping_add(dec[50]), 0);
        assert_eq!(mul(enc[3], dec[51]), 1);
        // MA sub-keys relocate without inversion.
        assert_eq!(dec[4], enc[46]);
        assert_eq!(dec[5], enc[47]);
    }

    #[test]
    fn double_inversion_restores_schedule() {
        let enc = expand(&[0xFFFF, 0, 0xFFFF, 0, 0x8000, 0x0001, 0x7FFF, 0xAAAA]);
        assert_eq!(invert(&invert(&enc)), enc);
    }
}
