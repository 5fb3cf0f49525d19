use std::num::ParseIntError;

use thiserror::Error;

use crate::memory::Address;

/// The generic Error type, which covers every recoverable failure this library can report.
///
/// Bounds violations and input failures are data-dependent conditions, so they surface as
/// values the caller can propagate, log, or abort on. Misuse of the instruction layer, such as
/// writing into a literal, is not represented here: destinations are typed as
/// [`crate::Variable`] and cannot be literals in the first place.
///
/// # Error Categories
///
/// ## Memory Errors
/// - [`Error::OutOfBounds`] - A byte access fell outside the store
///
/// ## Input Errors
/// - [`Error::InputParse`] - External input was not an integer
/// - [`Error::InputExhausted`] - The input source ran dry
/// - [`Error::Io`] - The console boundary failed
///
/// ## Configuration Errors
/// - [`Error::InvalidConfig`] - A [`crate::MemoryConfig`] that cannot be honored
///
/// # Examples
///
/// ```rust
/// use bytewise::{ByteStore, Error};
///
/// let store = ByteStore::new(32);
/// match store.load_byte(32) {
///     Err(Error::OutOfBounds { address, size }) => {
///         assert_eq!((address, size), (32, 32));
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A byte access was attempted outside `[0, size)`.
    ///
    /// Raised for direct byte accesses and for either half of a 16-bit access, so a
    /// 16-bit load starting at the last valid address fails as well.
    #[error("Seg fault - address {address} is outside of memory [0, {size})")]
    OutOfBounds {
        /// The offending address
        address: Address,
        /// The capacity of the store that rejected the access
        size: usize,
    },

    /// External input could not be interpreted as an integer.
    ///
    /// The raw text is kept so the caller can report it back; the value is never
    /// coerced to zero.
    #[error("'{input}' is not an integer - {source}")]
    InputParse {
        /// The text that failed to parse, trimmed of surrounding whitespace
        input: String,
        /// The underlying parse failure
        source: ParseIntError,
    },

    /// The input source has no more values to hand out.
    #[error("Input source is exhausted")]
    InputExhausted,

    /// I/O error on the console boundary.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The memory configuration cannot be used to build a store.
    #[error("Invalid memory configuration - {0}")]
    InvalidConfig(String),
}
