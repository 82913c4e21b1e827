#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================

// --- Module declarations ---
mod arith;
mod backends;
mod block;
mod schedule;

pub mod consts;

pub use crate::block::Idea;
pub use crate::self_test::{self_test, SelfTestError};

// Re-export cipher crate for downstream users.
pub use cipher;
