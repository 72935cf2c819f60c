//! # abikit-primitives
//!
//! Primitive types shared by the abikit crates.
//!
//! This crate provides the 20-byte [`Address`] with EIP-55 checksum support
//! and re-exports the 256-bit unsigned integer used for ABI words.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::keccak256;

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Size of an ABI word in bytes
pub const WORD_SIZE: usize = 32;
