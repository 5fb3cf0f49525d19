//! Typed handles into memory and the operands instructions consume.

use std::fmt;

use crate::{
    memory::{Address, ByteStore, Tag},
    Result,
};

/// A typed handle to a location in a [`ByteStore`].
///
/// A `Variable` is a plain value: an address and a [`Tag`]. Creating one has no side effect
/// and performs no validation, since every access re-checks bounds in the codec. Several
/// variables may alias the same or overlapping bytes, which is how the same bits can be
/// observed under different interpretations.
///
/// # Examples
///
/// ```rust
/// use bytewise::{ByteStore, Tag, Variable};
///
/// let mut store = ByteStore::default();
/// let cost = Variable::new(0, Tag::U8);
/// let signed_view = Variable::new(0, Tag::S8);
///
/// bytewise::write(&mut store, cost, 254)?;
/// assert_eq!(bytewise::read(&store, signed_view)?, -2);
/// # Ok::<(), bytewise::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    address: Address,
    tag: Tag,
}

impl Variable {
    /// Binds a tag to an address.
    #[must_use]
    pub const fn new(address: Address, tag: Tag) -> Self {
        Variable { address, tag }
    }

    /// Returns the address of the first byte.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the width/sign tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the address one past the last byte covered by this variable.
    #[must_use]
    pub const fn end(&self) -> Address {
        self.address.saturating_add(self.tag.width() as Address)
    }

    /// Returns `true` if this variable shares at least one byte with `other`.
    #[must_use]
    pub const fn overlaps(&self, other: &Variable) -> bool {
        self.address < other.end() && other.address < self.end()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tag, self.address)
    }
}

/// A value source for an instruction: an integer literal or a bound [`Variable`].
///
/// Literals are used exactly as given, without any width coercion. Variables are decoded
/// through the codec selected by their tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// An integer used as-is
    Literal(i64),
    /// A variable decoded from memory
    Bound(Variable),
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(value)
    }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Bound(variable)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{value}"),
            Operand::Bound(variable) => write!(f, "{variable}"),
        }
    }
}

/// Resolves an operand to its integer value.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if a variable operand reaches outside the store.
pub fn read(store: &ByteStore, operand: impl Into<Operand>) -> Result<i64> {
    match operand.into() {
        Operand::Literal(value) => Ok(value),
        Operand::Bound(variable) => store.load(variable.tag, variable.address),
    }
}

/// Encodes `value` into `variable` under its tag, wrapping to the tag's width.
///
/// Destinations are always variables; a literal cannot be written to.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the variable reaches outside the store.
pub fn write(store: &mut ByteStore, variable: Variable, value: i64) -> Result<()> {
    store.store(variable.tag, value, variable.address)
}
