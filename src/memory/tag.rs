//! Width and signedness tags for typed memory access.

use strum::{Display, EnumCount, EnumIter, EnumString};

/// Width/sign tag selecting how a location in the [`crate::ByteStore`] is decoded.
///
/// The tag fixes the byte width (1 or 2) and whether the high bit is read as a negative
/// weight (two's-complement) or as a plain power of two.
///
/// Tags parse from their short names (`u8`, `s8`, `u16`, `s16`), the long names used by
/// older programs (`uint8`, `sint16`, ...) and the Rust spellings (`i8`, `i16`).
///
/// # Examples
///
/// ```rust
/// use bytewise::Tag;
///
/// let tag: Tag = "sint16".parse().unwrap();
/// assert_eq!(tag, Tag::S16);
/// assert_eq!(tag.width(), 2);
/// assert_eq!(tag.to_string(), "s16");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount)]
pub enum Tag {
    /// Unsigned 8-bit, `[0, 255]`
    #[strum(to_string = "u8", serialize = "uint8")]
    U8,
    /// Signed 8-bit, `[-128, 127]`
    #[strum(to_string = "s8", serialize = "sint8", serialize = "i8")]
    S8,
    /// Unsigned 16-bit, `[0, 65535]`, high byte first
    #[strum(to_string = "u16", serialize = "uint16")]
    U16,
    /// Signed 16-bit, `[-32768, 32767]`, high byte first
    #[strum(to_string = "s16", serialize = "sint16", serialize = "i16")]
    S16,
}

impl Tag {
    /// Number of bytes a value with this tag occupies.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Tag::U8 | Tag::S8 => 1,
            Tag::U16 | Tag::S16 => 2,
        }
    }

    /// Returns `true` for the two's-complement tags.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Tag::S8 | Tag::S16)
    }

    /// Smallest value that survives a store/load round-trip unchanged.
    #[must_use]
    pub const fn min(self) -> i64 {
        match self {
            Tag::U8 | Tag::U16 => 0,
            Tag::S8 => -128,
            Tag::S16 => -32768,
        }
    }

    /// Largest value that survives a store/load round-trip unchanged.
    #[must_use]
    pub const fn max(self) -> i64 {
        match self {
            Tag::U8 => 255,
            Tag::S8 => 127,
            Tag::U16 => 65535,
            Tag::S16 => 32767,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("u8".parse::<Tag>().unwrap(), Tag::U8);
        assert_eq!("uint8".parse::<Tag>().unwrap(), Tag::U8);
        assert_eq!("i8".parse::<Tag>().unwrap(), Tag::S8);
        assert_eq!("uint16".parse::<Tag>().unwrap(), Tag::U16);
        assert_eq!("sint16".parse::<Tag>().unwrap(), Tag::S16);
        assert!("u32".parse::<Tag>().is_err());
    }

    #[test]
    fn test_display_uses_short_name() {
        let names: Vec<String> = Tag::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["u8", "s8", "u16", "s16"]);
    }

    #[test]
    fn test_range_spans_width() {
        for tag in Tag::iter() {
            let span = tag.max() - tag.min() + 1;
            assert_eq!(span, 1i64 << (8 * tag.width()));
        }
        assert_eq!(Tag::COUNT, 4);
    }
}
