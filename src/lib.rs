// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # bytewise
//!
//! A flat, fixed-size byte memory with typed two's-complement accessors and a tiny
//! assembly-like instruction set. Everything is built to make integer width, signedness and
//! wraparound observable: store 254 as an unsigned byte and read it back as a signed one, and
//! you get -2.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytewise::prelude::*;
//!
//! let mut store = ByteStore::default();
//! let mut m = Machine::new(&mut store);
//!
//! let counter = Variable::new(0, Tag::S8);
//! m.mov(127_i64, counter)?;
//! m.add(1_i64, counter)?;
//! assert_eq!(m.display("counter =", counter)?, "counter = -128");
//! # Ok::<(), bytewise::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`memory`] - [`ByteStore`], the [`Tag`] enum and the scalar codec
//! - [`instruction`] - [`Variable`], [`Operand`], [`Machine`] and the input boundary
//! - [`scenario`] - Ready-made demonstration programs
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Memory Model
//!
//! The store holds a fixed number of bytes (32 by default) and is zeroed on creation. Every
//! access is bounds-checked, including both halves of a 16-bit access; failures come back as
//! [`Error::OutOfBounds`]. Values written under a tag are reduced modulo the tag's width, so
//! overflow is silent and reproducible.
//!
//! 16-bit values are stored high byte first.
//!
//! ## Error Handling
//!
//! ```rust
//! use bytewise::{ByteStore, Error};
//!
//! let store = ByteStore::default();
//! match store.load_u16(31) {
//!     Err(Error::OutOfBounds { address, .. }) => assert_eq!(address, 32),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! A [`ByteStore`] has no internal synchronization. [`Machine`] borrows it mutably, so the
//! borrow checker already guarantees a single writer.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use bytewise::prelude::*;
///
/// let mut store = ByteStore::default();
/// write(&mut store, Variable::new(0, Tag::U16), 70_000)?;
/// assert_eq!(read(&store, Variable::new(0, Tag::U16))?, 70_000 - 65_536);
/// # Ok::<(), bytewise::Error>(())
/// ```
pub mod prelude;

/// Byte store, width/sign tags and the two's-complement codec.
pub mod memory;

/// Variables, operands, the instruction set and the input boundary.
pub mod instruction;

/// Demonstration programs.
pub mod scenario;

/// `bytewise` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;

pub use memory::{
    as_binary, decode_s16, decode_s8, encode_s16, encode_s8, Address, ByteStore, MemoryConfig,
    Tag,
};

pub use instruction::{
    parse_integer, read, write, ConsoleInput, InputSource, Machine, Operand, ScriptedInput,
    Variable,
};

pub use scenario::{Scenario, Trace};
