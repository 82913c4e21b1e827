//======================================================================
// src/arith.rs
// Group arithmetic on 16-bit words: addition modulo 2^16 and
// multiplication modulo 2^16 + 1, where the bit pattern 0 represents
// the residue 2^16. Every operation is total over u16.
//======================================================================

/// 2^16 + 1, the multiplicative modulus. Prime, so every residue class
/// has an inverse and the units form a group of order 2^16.
const MUL_MOD: u32 = 0x1_0001;

/// Multiplication in the group of units modulo 2^16 + 1.
///
/// An operand of 0 stands for the residue 2^16 ≡ -1, so `mul(0, b)`
/// collapses to negation of `b` (and symmetrically). The general case
/// folds the high half of the 32-bit product back into the low half,
/// using 2^16 ≡ -1. Truncation to u16 performs the final 0 ↔ 2^16
/// remapping.
#[inline(always)]
pub(crate) fn mul(a: u16, b: u16) -> u16 {
    if a == 0 {
        (MUL_MOD - b as u32) as u16
    } else if b == 0 {
        (MUL_MOD - a as u32) as u16
    } else {
        let p = a as u32 * b as u32;
        let lo = p & 0xFFFF;
        let hi = p >> 16;
        if lo >= hi {
            (lo - hi) as u16
        } else {
            (lo + MUL_MOD - hi) as u16
        }
    }
}

/// Multiplicative inverse in the units group modulo 2^16 + 1, by the
/// extended Stein (binary) GCD algorithm on signed accumulators.
///
/// 0 and 1 are their own inverses. The accumulators track Bezout
/// coefficients for the input and the modulus; halving a coefficient
/// first makes it even by shifting it one modulus in the direction of
/// its sign. Arithmetic right shift on negative values matches the
/// reference behavior.
pub(crate) fn mul_inv(x: u16) -> u16 {
    if x <= 1 {
        return x;
    }
    let modulus = MUL_MOD as i32;
    let n = x as i32;
    let mut n1 = n;
    let mut n2 = modulus;
    let mut a1: i32 = 1;
    let mut a2: i32 = 0;
    let mut b1: i32 = 0;
    let mut b2: i32 = 1;
    loop {
        while n1 & 1 == 0 {
            if a1 & 1 != 0 {
                if a1 < 0 {
                    a1 += modulus;
                    b1 -= n;
                } else {
                    a1 -= modulus;
                    b1 += n;
                }
            }
            n1 >>= 1;
            a1 >>= 1;
            b1 >>= 1;
        }
        if n1 < n2 {
            loop {
                n2 -= n1;
                a2 -= a1;
                b2 -= b1;
                if n2 == 0 {
                    return (if a1 < 0 { a1 + modulus } else { a1 }) as u16;
                }
                while n2 & 1 == 0 {
                    if a2 & 1 != 0 {
                        if a2 < 0 {
                            a2 += modulus;
                            b2 -= n;
                        } else {
                            a2 -= modulus;
                            b2 += n;
                        }
                    }
                    n2 >>= 1;
                    a2 >>= 1;
                    b2 >>= 1;
                }
                if n1 > n2 {
                    break;
                }
            }
        }
        n1 -= n2;
        a1 -= a2;
        b1 -= b2;
        if n1 == 0 {
            return (if a2 < 0 { a2 + modulus } else { a2 }) as u16;
        }
    }
}

/// Additive inverse modulo 2^16.
#[inline(always)]
pub(crate) fn add_inv(x: u16) -> u16 {
    0u16.wrapping_sub(x)
}
