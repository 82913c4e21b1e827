//======================================================================
// src/block.rs
// The IDEA cipher context: an immutable pair of sub-key schedules and
// the RustCrypto block-cipher trait implementations on top of it.
//======================================================================

use core::fmt;

use cipher::{
    AlgorithmName, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key,
    KeyInit, KeySizeUser,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends::soft;
use crate::consts::{KEY_WORDS, SCHEDULE_WORDS};
use crate::schedule;

/// The IDEA block cipher.
///
/// Construction expands the 128-bit user key into the 52-word encryption
/// schedule and derives the decryption schedule from it; both are
/// immutable afterwards, so one instance can serve concurrent encrypt
/// and decrypt calls without synchronization. The only supported key
/// size is 16 bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Idea {
    enc: [u16; SCHEDULE_WORDS],
    dec: [u16; SCHEDULE_WORDS],
}

impl Idea {
    #[inline]
    pub(crate) fn enc_schedule(&self) -> &[u16; SCHEDULE_WORDS] {
        &self.enc
    }

    #[inline]
    pub(crate) fn dec_schedule(&self) -> &[u16; SCHEDULE_WORDS] {
        &self.dec
    }
}

impl KeySizeUser for Idea {
    type KeySize = cipher::consts::U16;
}

impl BlockSizeUser for Idea {
    type BlockSize = cipher::consts::U8;
}

impl KeyInit for Idea {
    /// Key bytes are read as little-endian 16-bit words, matching
    /// libmcrypt's interpretation.
    fn new(key: &Key<Self>) -> Self {
        let mut user_key = [0u16; KEY_WORDS];
        for (w, chunk) in user_key.iter_mut().zip(key.chunks_exact(2)) {
            *w = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
        let enc = schedule::expand(&user_key);
        let dec = schedule::invert(&enc);
        user_key.zeroize();
        Self { enc, dec }
    }
}

impl BlockCipher for Idea {}

impl BlockEncrypt for Idea {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut soft::EncBackend(self))
    }
}

impl BlockDecrypt for Idea {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut soft::DecBackend(self))
    }
}

impl AlgorithmName for Idea {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IDEA")
    }
}

impl fmt::Debug for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of debug output.
        f.write_str("Idea { ... }")
    }
}
