//======================================================================
// src/backends/soft.rs
// The software (scalar) backend: the shared round function and the
// block-level encrypt/decrypt adapters. Direction is selected purely
// by which sub-key schedule is supplied.
//======================================================================

use crate::arith::mul;
use crate::block::Idea;
use crate::consts::{BLOCK_WORDS, ROUNDS, SCHEDULE_WORDS};
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

/// Eight rounds plus the output transform, in place.
///
/// Each round consumes six sub-keys: keyed mul on x0/x3, keyed add on
/// x1/x2, then the MA structure cross-couples all four words through two
/// more keyed multiplications. x1 and x2 leave the round swapped relative
/// to their entry roles; the output transform reads them crosswise to
/// compensate, so the swap must not be undone here.
pub(crate) fn crypt(x: &mut [u16; BLOCK_WORDS], key: &[u16; SCHEDULE_WORDS]) {
    let [mut x0, mut x1, mut x2, mut x3] = *x;
    let mut i = 0;
    for _ in 0..ROUNDS {
        x0 = mul(x0, key[i]);
        x1 = x1.wrapping_add(key[i + 1]);
        x2 = x2.wrapping_add(key[i + 2]);
        x3 = mul(x3, key[i + 3]);
        let t0 = mul(key[i + 4], x0 ^ x2);
        let t1 = mul(key[i + 5], (x1 ^ x3).wrapping_add(t0));
        let t0 = t0.wrapping_add(t1);
        x0 ^= t1;
        x3 ^= t0;
        let t0 = t0 ^ x1;
        x1 = x2 ^ t1;
        x2 = t0;
        i += 6;
    }
    x[0] = mul(x0, key[i]);
    x[1] = x2.wrapping_add(key[i + 1]);
    x[2] = x1.wrapping_add(key[i + 2]);
    x[3] = mul(x3, key[i + 3]);
}

/// Words are little-endian in the byte stream, matching libmcrypt.
#[inline(always)]
fn load(block: &[u8]) -> [u16; BLOCK_WORDS] {
    let mut x = [0u16; BLOCK_WORDS];
    for (w, chunk) in x.iter_mut().zip(block.chunks_exact(2)) {
        *w = u16::from_le_bytes([chunk[0], chunk[1]]);
    }
    x
}

#[inline(always)]
fn store(block: &mut [u8], x: &[u16; BLOCK_WORDS]) {
    for (w, chunk) in x.iter().zip(block.chunks_exact_mut(2)) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
}

pub(crate) struct EncBackend<'a>(pub(crate) &'a Idea);

impl BlockSizeUser for EncBackend<'_> {
    type BlockSize = cipher::consts::U8;
}

impl ParBlocksSizeUser for EncBackend<'_> {
    type ParBlocksSize = cipher::consts::U1;
}

impl BlockBackend for EncBackend<'_> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut x = load(block.get_in());
        crypt(&mut x, self.0.enc_schedule());
        store(block.get_out(), &x);
    }
}

pub(crate) struct DecBackend<'a>(pub(crate) &'a Idea);

impl BlockSizeUser for DecBackend<'_> {
    type BlockSize = cipher::consts::U8;
}

impl ParBlocksSizeUser for DecBackend<'_> {
    type ParBlocksSize = cipher::consts::U1;
}

impl BlockBackend for DecBackend<'_> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut x = load(block.get_in());
        crypt(&mut x, self.0.dec_schedule());
        store(block.get_out(), &x);
    }
}
