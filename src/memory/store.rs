//! Flat, fixed-size byte memory.
//!
//! [`ByteStore`] is the addressable substrate under every typed access. It holds exactly
//! `size` bytes for its whole lifetime, starts zeroed, and is only mutated through
//! bounds-checked stores that reduce their input modulo 256.
//!
//! # Address Space
//!
//! Addresses are signed ([`Address`]) so that a computed address below zero is a value the
//! store can reject with [`Error::OutOfBounds`] instead of something that cannot be
//! expressed. Valid addresses are `0..size`.
//!
//! # Memory Dump
//!
//! [`ByteStore::dump`] renders the store as rows of binary bytes, each row prefixed with the
//! address of its first byte:
//!
//! ```text
//!   0  00000000 00000000 00000000 11111110
//!   4  00000000 00000000 00000000 00000000
//! ```

use std::fmt;

use crate::{memory::MemoryConfig, Error, Result};

/// A signed byte offset into a [`ByteStore`].
pub type Address = i64;

/// Renders a byte as an 8-character binary string, most significant bit first.
///
/// # Examples
///
/// ```rust
/// use bytewise::as_binary;
///
/// assert_eq!(as_binary(0), "00000000");
/// assert_eq!(as_binary(254), "11111110");
/// ```
#[must_use]
pub fn as_binary(byte: u8) -> String {
    format!("{byte:08b}")
}

/// A fixed-length sequence of bytes.
///
/// The length never changes after construction. Every stored value is normalized into
/// `[0, 255]` by [`ByteStore::store_byte`], so the raw bytes are always in range.
///
/// # Examples
///
/// ```rust
/// use bytewise::ByteStore;
///
/// let mut store = ByteStore::new(32);
/// store.store_byte(300, 5)?;
/// assert_eq!(store.load_byte(5)?, 44);
///
/// store.clear();
/// assert!(store.as_bytes().iter().all(|&b| b == 0));
/// # Ok::<(), bytewise::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteStore {
    /// The backing bytes, zero-initialized
    bytes: Vec<u8>,
    /// Bytes per dump row
    row_width: usize,
}

impl ByteStore {
    /// Creates a zeroed store of `size` bytes with the default dump layout.
    #[must_use]
    pub fn new(size: usize) -> Self {
        ByteStore {
            bytes: vec![0; size],
            row_width: MemoryConfig::default().row_width,
        }
    }

    /// Creates a zeroed store from a [`MemoryConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration does not validate or the
    /// backing bytes cannot be allocated.
    pub fn with_config(config: &MemoryConfig) -> Result<Self> {
        config.validate()?;

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(config.size).map_err(|e| {
            Error::InvalidConfig(format!("cannot allocate {} bytes - {e}", config.size))
        })?;
        bytes.resize(config.size, 0);

        Ok(ByteStore {
            bytes,
            row_width: config.row_width,
        })
    }

    /// Returns the capacity of the store in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the store has no addressable bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Resets every byte to zero.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Resolves `address` to an index, or fails if it lies outside `[0, len)`.
    pub(crate) fn index(&self, address: Address) -> Result<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < self.bytes.len())
            .ok_or(Error::OutOfBounds {
                address,
                size: self.bytes.len(),
            })
    }

    /// Reads the byte at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `address < 0` or `address >= len`.
    pub fn load_byte(&self, address: Address) -> Result<u8> {
        let index = self.index(address)?;
        Ok(self.bytes[index])
    }

    /// Writes `value mod 256` to `address`.
    ///
    /// The reduction is open-ended: negative and oversized inputs wrap into `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `address < 0` or `address >= len`. Nothing is
    /// written in that case.
    pub fn store_byte(&mut self, value: i64, address: Address) -> Result<()> {
        let index = self.index(address)?;
        self.bytes[index] = value.rem_euclid(256) as u8;
        Ok(())
    }

    /// Renders the memory dump.
    ///
    /// One line per row of bytes, each line starting with the right-aligned address of its
    /// first byte followed by two spaces and the bytes in binary, separated by single spaces.
    /// Lines are joined with `\n` and there is no trailing newline.
    #[must_use]
    pub fn dump(&self) -> String {
        self.bytes
            .chunks(self.row_width)
            .enumerate()
            .map(|(row, chunk)| {
                let bits: Vec<String> = chunk.iter().map(|&b| as_binary(b)).collect();
                format!("{:>3}  {}", row * self.row_width, bits.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ByteStore {
    fn default() -> Self {
        ByteStore::new(MemoryConfig::default().size)
    }
}

impl fmt::Display for ByteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let store = ByteStore::new(32);
        assert_eq!(store.len(), 32);
        assert!(!store.is_empty());
        assert!(store.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_with_config_reports_allocation_failure() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let huge = MemoryConfig::new().with_size(i64::MAX as usize);

        match ByteStore::with_config(&huge) {
            Err(Error::InvalidConfig(message)) => assert!(message.contains("cannot allocate")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            ByteStore::with_config(&MemoryConfig::new().with_size(8))
                .unwrap()
                .len(),
            8
        );
    }

    #[test]
    fn test_store_byte_reduces_modulo_256() {
        let mut store = ByteStore::default();

        store.store_byte(256, 0).unwrap();
        store.store_byte(-1, 1).unwrap();
        store.store_byte(513, 2).unwrap();
        store.store_byte(-257, 3).unwrap();

        assert_eq!(store.as_bytes()[..4], [0, 255, 1, 255]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut store = ByteStore::new(32);

        assert!(matches!(
            store.load_byte(32),
            Err(Error::OutOfBounds {
                address: 32,
                size: 32
            })
        ));
        assert!(matches!(
            store.load_byte(-1),
            Err(Error::OutOfBounds { address: -1, .. })
        ));
        assert!(store.store_byte(7, 32).is_err());
        assert!(store.store_byte(7, i64::MIN).is_err());
        assert!(store.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_store_rejects_everything() {
        let store = ByteStore::new(0);
        assert!(store.is_empty());
        assert!(store.load_byte(0).is_err());
        assert_eq!(store.dump(), "");
    }

    #[test]
    fn test_clear() {
        let mut store = ByteStore::default();
        for address in 0..32 {
            store.store_byte(address + 1, address).unwrap();
        }
        store.clear();
        assert_eq!(store, ByteStore::default());
    }

    #[test]
    fn test_dump_all_zero() {
        let store = ByteStore::default();
        let dump = store.dump();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 8);
        for (row, line) in lines.iter().enumerate() {
            let expected = format!("{:>3}  00000000 00000000 00000000 00000000", row * 4);
            assert_eq!(*line, expected);
        }
        assert_eq!(store.to_string(), dump);
    }

    #[test]
    fn test_dump_renders_real_bits() {
        let mut store = ByteStore::new(8);
        store.store_byte(0b1010_0101, 0).unwrap();
        store.store_byte(1, 7).unwrap();

        assert_eq!(
            store.dump(),
            "  0  10100101 00000000 00000000 00000000\n  4  00000000 00000000 00000000 00000001"
        );
    }

    #[test]
    fn test_dump_partial_last_row() {
        let config = MemoryConfig::new().with_size(6);
        let store = ByteStore::with_config(&config).unwrap();
        let dump = store.dump();
        assert_eq!(dump.lines().last(), Some("  4  00000000 00000000"));
    }
}
