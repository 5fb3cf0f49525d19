//! Two's-complement scalar codec over a [`ByteStore`].
//!
//! Encoding and decoding are symmetric modular operations. Any integer can be stored under
//! any tag: the value is reduced to the tag's width on the way in, and decoded back according
//! to the tag's signedness on the way out. Round-tripping a value therefore reproduces exactly
//! the wraparound a fixed-width machine would show.
//!
//! 16-bit values are stored high byte first ("big end first") at `address` and `address + 1`.
//!
//! # Examples
//!
//! ```rust
//! use bytewise::ByteStore;
//!
//! let mut store = ByteStore::default();
//!
//! // The same bits mean different things under different tags
//! store.store_u8(254, 0)?;
//! assert_eq!(store.load_s8(0)?, -2);
//!
//! store.store_s16(-2, 4)?;
//! assert_eq!(store.load_byte(4)?, 0xFF);
//! assert_eq!(store.load_byte(5)?, 0xFE);
//! assert_eq!(store.load_u16(4)?, 65534);
//! # Ok::<(), bytewise::Error>(())
//! ```

use crate::{
    memory::{Address, ByteStore, Tag},
    Result,
};

/// Biases a negative 8-bit value by `+256`, leaving non-negative values as they are.
///
/// The result is not reduced; [`ByteStore::store_u8`] takes care of values that are still
/// outside `[0, 255]`.
#[must_use]
pub fn encode_s8(value: i64) -> i64 {
    if value < 0 {
        value.wrapping_add(256)
    } else {
        value
    }
}

/// Reinterprets an unsigned byte as two's-complement: values `>= 128` become `value - 256`.
#[must_use]
pub fn decode_s8(byte: u8) -> i64 {
    byte as i8 as i64
}

/// Biases a negative 16-bit value by `+65536`, leaving non-negative values as they are.
#[must_use]
pub fn encode_s16(value: i64) -> i64 {
    if value < 0 {
        value.wrapping_add(65536)
    } else {
        value
    }
}

/// Reinterprets an unsigned 16-bit value as two's-complement: values `>= 32768` become
/// `value - 65536`.
#[must_use]
pub fn decode_s16(value: u16) -> i64 {
    value as i16 as i64
}

/// Splits a value into its `(high, low)` bytes using floor division and Euclidean modulo.
///
/// Negative inputs are handled consistently: `-1` splits into `(0xFF, 0xFF)`, matching the
/// two's-complement bit pattern.
fn split_u16(value: i64) -> (i64, i64) {
    (value.div_euclid(256).rem_euclid(256), value.rem_euclid(256))
}

impl ByteStore {
    /// Loads an unsigned 8-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `address` is outside the store.
    pub fn load_u8(&self, address: Address) -> Result<i64> {
        Ok(i64::from(self.load_byte(address)?))
    }

    /// Stores `value mod 256` as an unsigned 8-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `address` is outside the store.
    pub fn store_u8(&mut self, value: i64, address: Address) -> Result<()> {
        self.store_byte(value, address)
    }

    /// Loads a signed 8-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `address` is outside the store.
    pub fn load_s8(&self, address: Address) -> Result<i64> {
        Ok(decode_s8(self.load_byte(address)?))
    }

    /// Stores a signed 8-bit value.
    ///
    /// Values outside `[-128, 127]` wrap silently: the stored bits are those of
    /// `((value + 128) mod 256) - 128`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `address` is outside the store.
    pub fn store_s8(&mut self, value: i64, address: Address) -> Result<()> {
        self.store_u8(encode_s8(value), address)
    }

    /// Loads an unsigned 16-bit value from `address` (high byte) and `address + 1` (low byte).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either byte is outside the store, so a load
    /// starting at the last valid address fails.
    pub fn load_u16(&self, address: Address) -> Result<i64> {
        let high = i64::from(self.load_byte(address)?);
        let low = i64::from(self.load_byte(address.wrapping_add(1))?);
        Ok(high * 256 + low)
    }

    /// Stores `value mod 65536` as an unsigned 16-bit value, high byte first.
    ///
    /// Both addresses are checked before either byte is written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either byte is outside the store. The store
    /// is left untouched in that case.
    pub fn store_u16(&mut self, value: i64, address: Address) -> Result<()> {
        let next = address.wrapping_add(1);
        self.index(address)?;
        self.index(next)?;

        let (high, low) = split_u16(value);
        self.store_byte(high, address)?;
        self.store_byte(low, next)
    }

    /// Loads a signed 16-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either byte is outside the store.
    pub fn load_s16(&self, address: Address) -> Result<i64> {
        let unsigned = self.load_u16(address)?;
        Ok(decode_s16(unsigned as u16))
    }

    /// Stores a signed 16-bit value; values outside `[-32768, 32767]` wrap silently.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either byte is outside the store.
    pub fn store_s16(&mut self, value: i64, address: Address) -> Result<()> {
        self.store_u16(encode_s16(value), address)
    }

    /// Loads the value at `address` using the codec selected by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if any byte of the access is outside the store.
    pub fn load(&self, tag: Tag, address: Address) -> Result<i64> {
        match tag {
            Tag::U8 => self.load_u8(address),
            Tag::S8 => self.load_s8(address),
            Tag::U16 => self.load_u16(address),
            Tag::S16 => self.load_s16(address),
        }
    }

    /// Stores `value` at `address` using the codec selected by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if any byte of the access is outside the store.
    pub fn store(&mut self, tag: Tag, value: i64, address: Address) -> Result<()> {
        match tag {
            Tag::U8 => self.store_u8(value, address),
            Tag::S8 => self.store_s8(value, address),
            Tag::U16 => self.store_u16(value, address),
            Tag::S16 => self.store_s16(value, address),
        }
    }
}
