//! Byte store configuration.
//!
//! [`MemoryConfig`] describes the shape of a [`crate::ByteStore`]: how many bytes it holds
//! and how many bytes each row of the memory dump shows.
//!
//! # Example
//!
//! ```rust
//! use bytewise::{ByteStore, MemoryConfig};
//!
//! let config = MemoryConfig::new().with_size(16).with_row_width(8);
//! let store = ByteStore::with_config(&config)?;
//! assert_eq!(store.len(), 16);
//! assert_eq!(store.dump().lines().count(), 2);
//! # Ok::<(), bytewise::Error>(())
//! ```

use crate::{Error, Result};

/// Capacity of the reference store.
pub const DEFAULT_SIZE: usize = 32;

/// Bytes shown per dump row in the reference layout.
pub const DEFAULT_ROW_WIDTH: usize = 4;

/// Memory configuration.
///
/// # Default Values
///
/// | Setting | Default Value |
/// |---------|---------------|
/// | `size` | 32 bytes |
/// | `row_width` | 4 bytes |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Number of addressable bytes.
    ///
    /// Fixed for the lifetime of the store built from this configuration.
    pub size: usize,

    /// Number of bytes rendered per row of the memory dump.
    pub row_width: usize,
}

impl MemoryConfig {
    /// Creates a configuration with default values.
    ///
    /// Equivalent to [`MemoryConfig::default()`]. Use the `with_*` methods
    /// to customize individual settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store capacity in bytes.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the number of bytes per dump row.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining.
    #[must_use]
    pub fn with_row_width(mut self, row_width: usize) -> Self {
        self.row_width = row_width;
        self
    }

    /// Checks that a store can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `row_width` is zero or if `size` cannot be
    /// addressed with a signed 64-bit address.
    pub fn validate(&self) -> Result<()> {
        if self.row_width == 0 {
            return Err(Error::InvalidConfig("row width must be non-zero".to_string()));
        }
        if i64::try_from(self.size).is_err() {
            return Err(Error::InvalidConfig(format!(
                "size {} exceeds the addressable range",
                self.size
            )));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}
