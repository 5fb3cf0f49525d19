//! Byte-addressable memory and its typed accessors.
//!
//! This module provides the substrate every other part of the crate works against:
//!
//! - [`ByteStore`] - Fixed-size, zero-initialized byte memory with bounds-checked access
//! - [`Tag`] - Width and signedness of a typed access (`u8`, `s8`, `u16`, `s16`)
//! - [`MemoryConfig`] - Capacity and dump layout of a store
//! - Codec helpers ([`encode_s8`], [`decode_s8`], [`encode_s16`], [`decode_s16`]) and
//!   [`as_binary`] for rendering
//!
//! # Failure Semantics
//!
//! Every byte access is validated against the store's capacity, including both halves of a
//! 16-bit access. A failed access returns [`crate::Error::OutOfBounds`]; it never yields a
//! default value that could be confused with a stored zero.

mod codec;
mod config;
mod store;
mod tag;

pub use codec::{decode_s16, decode_s8, encode_s16, encode_s8};
pub use config::{MemoryConfig, DEFAULT_ROW_WIDTH, DEFAULT_SIZE};
pub use store::{as_binary, Address, ByteStore};
pub use tag::Tag;
