//! The instruction set.
//!
//! [`Machine`] borrows a [`ByteStore`] and exposes the assembly-like operations: move,
//! the arithmetic instructions, comparisons, input and display. It keeps no state of its own
//! between calls; everything lives in the borrowed store.
//!
//! # Calling Conventions
//!
//! Two forms of addition exist and are kept as separate instructions:
//!
//! | Instruction | Effect |
//! |-------------|--------|
//! | [`Machine::add`] | `op2 <- op1 + op2` (accumulate into the second operand) |
//! | [`Machine::add_into`] | `dest <- op1 + op2` (three operands) |
//! | [`Machine::subtract`] | `op1 <- op1 - op2` |
//! | [`Machine::multiply`] | `dest <- op1 * op2` |
//!
//! Results are computed on 64-bit integers with wrapping arithmetic and then re-encoded under
//! the destination's tag, which silently truncates them to its width.
//!
//! # Example
//!
//! ```rust
//! use bytewise::{ByteStore, Machine, Tag, Variable};
//!
//! let mut store = ByteStore::default();
//! let mut m = Machine::new(&mut store);
//!
//! let widgets = Variable::new(0, Tag::U8);
//! let gadgets = Variable::new(1, Tag::U8);
//!
//! m.mov(19_i64 * 12, widgets)?;
//! m.mov(37_i64, gadgets)?;
//! m.add(widgets, gadgets)?;
//! assert_eq!(m.read(gadgets)?, 9);
//! # Ok::<(), bytewise::Error>(())
//! ```

use log::{debug, trace};

use crate::{
    instruction::{
        input::{parse_integer, InputSource},
        variable::{self, Operand, Variable},
    },
    memory::ByteStore,
    Result,
};

/// Executes instructions against a borrowed [`ByteStore`].
pub struct Machine<'m> {
    memory: &'m mut ByteStore,
}

impl<'m> Machine<'m> {
    /// Creates a machine operating on `memory`.
    pub fn new(memory: &'m mut ByteStore) -> Self {
        Machine { memory }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn memory(&self) -> &ByteStore {
        self.memory
    }

    /// Resolves an operand to its current value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if a variable operand reaches outside memory.
    pub fn read(&self, operand: impl Into<Operand>) -> Result<i64> {
        variable::read(self.memory, operand)
    }

    /// Encodes `value` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `dest` reaches outside memory.
    pub fn write(&mut self, dest: Variable, value: i64) -> Result<()> {
        variable::write(self.memory, dest, value)
    }

    /// `dest <- src`, re-encoded under `dest`'s tag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn mov(&mut self, src: impl Into<Operand>, dest: Variable) -> Result<()> {
        let src = src.into();
        let value = self.read(src)?;
        debug!("mov {src} -> {dest} ({value})");
        self.write(dest, value)
    }

    /// `op2 <- op1 + op2`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn add(&mut self, op1: impl Into<Operand>, op2: Variable) -> Result<()> {
        self.add_into(op1, op2, op2)
    }

    /// `dest <- op1 + op2`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if any operand reaches outside memory.
    pub fn add_into(
        &mut self,
        op1: impl Into<Operand>,
        op2: impl Into<Operand>,
        dest: Variable,
    ) -> Result<()> {
        let (op1, op2) = (op1.into(), op2.into());
        let value = self.read(op1)?.wrapping_add(self.read(op2)?);
        debug!("add {op1}, {op2} -> {dest} ({value})");
        self.write(dest, value)
    }

    /// `op1 <- op1 - op2`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn subtract(&mut self, op1: Variable, op2: impl Into<Operand>) -> Result<()> {
        let op2 = op2.into();
        let value = self.read(op1)?.wrapping_sub(self.read(op2)?);
        debug!("sub {op1}, {op2} -> {op1} ({value})");
        self.write(op1, value)
    }

    /// `dest <- op1 * op2`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if any operand reaches outside memory.
    pub fn multiply(
        &mut self,
        op1: impl Into<Operand>,
        op2: impl Into<Operand>,
        dest: Variable,
    ) -> Result<()> {
        let (op1, op2) = (op1.into(), op2.into());
        let value = self.read(op1)?.wrapping_mul(self.read(op2)?);
        debug!("mul {op1}, {op2} -> {dest} ({value})");
        self.write(dest, value)
    }

    /// `op1 == op2` on decoded values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn equal(&self, op1: impl Into<Operand>, op2: impl Into<Operand>) -> Result<bool> {
        Ok(self.read(op1)? == self.read(op2)?)
    }

    /// `op1 < op2` on decoded values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn less_than(&self, op1: impl Into<Operand>, op2: impl Into<Operand>) -> Result<bool> {
        Ok(self.read(op1)? < self.read(op2)?)
    }

    /// `op1 <= op2` on decoded values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either operand reaches outside memory.
    pub fn less_than_or_equal(
        &self,
        op1: impl Into<Operand>,
        op2: impl Into<Operand>,
    ) -> Result<bool> {
        Ok(self.read(op1)? <= self.read(op2)?)
    }

    /// Asks `source` for an integer and stores it into `dest`.
    ///
    /// Returns the value as parsed, before it is wrapped to `dest`'s width.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputParse`] if the response is not an integer,
    /// [`crate::Error::InputExhausted`] or [`crate::Error::Io`] if the source fails, and
    /// [`crate::Error::OutOfBounds`] if `dest` reaches outside memory. Memory is only
    /// touched once a value has been parsed.
    pub fn read_input<S: InputSource>(
        &mut self,
        mut source: S,
        prompt: &str,
        dest: Variable,
    ) -> Result<i64> {
        let raw = source.next_value(prompt)?;
        let value = parse_integer(&raw)?;
        trace!("input {prompt:?} -> {value}");
        self.write(dest, value)?;
        Ok(value)
    }

    /// Formats the operand's current value behind `prompt`, separated by a space.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the operand reaches outside memory.
    pub fn display(&self, prompt: &str, operand: impl Into<Operand>) -> Result<String> {
        Ok(format!("{prompt} {}", self.read(operand)?))
    }

    /// Renders the memory dump of the underlying store.
    #[must_use]
    pub fn dump(&self) -> String {
        self.memory.dump()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{instruction::input::ScriptedInput, memory::Tag, Error};

    #[test]
    fn test_mov_truncates_to_destination() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let small = Variable::new(0, Tag::U8);
        let wide = Variable::new(2, Tag::S16);

        m.mov(1000_i64, small).unwrap();
        assert_eq!(m.read(small).unwrap(), 1000 % 256);

        m.mov(-5_i64, wide).unwrap();
        m.mov(wide, small).unwrap();
        assert_eq!(m.read(small).unwrap(), 251);
    }

    #[test]
    fn test_add_forms() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let a = Variable::new(0, Tag::S8);
        let b = Variable::new(1, Tag::S8);
        let c = Variable::new(2, Tag::S16);

        m.mov(100_i64, a).unwrap();
        m.mov(27_i64, b).unwrap();

        m.add_into(a, b, c).unwrap();
        assert_eq!(m.read(c).unwrap(), 127);
        assert_eq!(m.read(b).unwrap(), 27);

        m.add(a, b).unwrap();
        assert_eq!(m.read(b).unwrap(), 127);
        assert_eq!(m.read(a).unwrap(), 100);

        m.add(1_i64, b).unwrap();
        assert_eq!(m.read(b).unwrap(), -128);
    }

    #[test]
    fn test_subtract_writes_first_operand() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let a = Variable::new(0, Tag::U8);

        m.mov(3_i64, a).unwrap();
        m.subtract(a, 5_i64).unwrap();
        assert_eq!(m.read(a).unwrap(), 254);
    }

    #[test]
    fn test_multiply_three_operands() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let price = Variable::new(0, Tag::U8);
        let total = Variable::new(2, Tag::U16);
        let narrow = Variable::new(4, Tag::U8);

        m.mov(19_i64, price).unwrap();
        m.multiply(price, 12_i64, total).unwrap();
        assert_eq!(m.read(total).unwrap(), 228);
        assert_eq!(m.read(price).unwrap(), 19);

        m.multiply(total, total, narrow).unwrap();
        assert_eq!(m.read(narrow).unwrap(), (228 * 228) % 256);
    }

    #[test]
    fn test_comparisons_use_decoded_values() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let unsigned = Variable::new(0, Tag::U8);
        let signed = Variable::new(0, Tag::S8);

        m.mov(200_i64, unsigned).unwrap();

        assert!(m.less_than(signed, unsigned).unwrap());
        assert!(!m.equal(signed, unsigned).unwrap());
        assert!(m.equal(unsigned, 200_i64).unwrap());
        assert!(m.equal(signed, -56_i64).unwrap());
        assert!(m.less_than_or_equal(unsigned, 200_i64).unwrap());
        assert!(!m.less_than(unsigned, 200_i64).unwrap());
    }

    #[test]
    fn test_read_input() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let dest = Variable::new(6, Tag::S8);
        let mut input = ScriptedInput::new(["300", "abc"]);

        assert_eq!(m.read_input(&mut input, "n? ", dest).unwrap(), 300);
        assert_eq!(m.read(dest).unwrap(), 44);

        assert!(matches!(
            m.read_input(&mut input, "n? ", dest),
            Err(Error::InputParse { .. })
        ));
        assert_eq!(m.read(dest).unwrap(), 44);

        assert!(matches!(
            m.read_input(&mut input, "n? ", dest),
            Err(Error::InputExhausted)
        ));
        assert_eq!(input.prompts().len(), 3);
    }

    #[test]
    fn test_read_input_beyond_i64() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let byte = Variable::new(0, Tag::U8);
        let word = Variable::new(2, Tag::U16);
        let mut input = ScriptedInput::new(["18446744073709551617", "-18446744073709551617"]);

        m.read_input(&mut input, "n? ", byte).unwrap();
        assert_eq!(m.read(byte).unwrap(), 1);

        m.read_input(&mut input, "n? ", word).unwrap();
        assert_eq!(m.read(word).unwrap(), 65_535);
    }

    #[test]
    fn test_display() {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let cost = Variable::new(0, Tag::U8);

        m.mov(265_i64, cost).unwrap();
        assert_eq!(m.display("cost =", cost).unwrap(), "cost = 9");
        assert!(m.display("x", Variable::new(40, Tag::U8)).is_err());
    }

    #[test]
    fn test_out_of_bounds_propagates() {
        let mut store = ByteStore::new(4);
        let mut m = Machine::new(&mut store);
        let outside = Variable::new(3, Tag::U16);

        assert!(matches!(
            m.mov(1_i64, outside),
            Err(Error::OutOfBounds { address: 4, size: 4 })
        ));
        assert!(m.add(outside, Variable::new(0, Tag::U8)).is_err());
        assert!(m.memory().as_bytes().iter().all(|&b| b == 0));
    }
}
