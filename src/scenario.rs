//! Reference demonstrations of wraparound behavior.
//!
//! Each [`Scenario`] runs a short program on a fresh 32-byte store and returns a [`Trace`]:
//! the labelled lines the program displayed and the final memory dump.
//!
//! | Scenario | Shows |
//! |----------|-------|
//! | [`Scenario::Wraparound`] | 254 stored unsigned reads back as -2 signed |
//! | [`Scenario::Cost`] | 228 + 37 = 265 in an 8-bit cell stores as 9 |
//! | [`Scenario::Counter`] | an 8-bit counter diverging from a 16-bit one at 128 |
//! | [`Scenario::Watch`] | a `prev <= value` loop that ends when both wrap |
//!
//! # Example
//!
//! ```rust
//! use bytewise::Scenario;
//!
//! let trace = Scenario::Cost.run()?;
//! assert_eq!(trace.lines.last().map(String::as_str), Some("total cost = 9"));
//! # Ok::<(), bytewise::Error>(())
//! ```

use strum::{Display, EnumIter, EnumString};

use crate::{ByteStore, Machine, Result, Tag, Variable};

/// Output of a scenario run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// Display lines in the order they were produced
    pub lines: Vec<String>,
    /// Memory dump taken after the program finished
    pub dump: String,
}

/// The built-in demonstration programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Scenario {
    /// One byte seen through an unsigned and a signed tag
    Wraparound,
    /// Widget and gadget costs overflowing an unsigned byte
    Cost,
    /// Signed 8-bit and unsigned 16-bit counters stepping in lockstep
    Counter,
    /// The `prev`/`value` watch loop
    Watch,
}

impl Scenario {
    /// Runs the scenario on a fresh default store.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::OutOfBounds`]; the built-in programs stay inside the
    /// default store, so this does not happen in practice.
    pub fn run(self) -> Result<Trace> {
        let mut store = ByteStore::default();
        let mut m = Machine::new(&mut store);
        let lines = match self {
            Scenario::Wraparound => wraparound(&mut m)?,
            Scenario::Cost => cost(&mut m)?,
            Scenario::Counter => counter(&mut m)?,
            Scenario::Watch => watch(&mut m)?,
        };
        Ok(Trace {
            lines,
            dump: m.dump(),
        })
    }
}

fn wraparound(m: &mut Machine<'_>) -> Result<Vec<String>> {
    let cell = Variable::new(0, Tag::U8);
    let view = Variable::new(0, Tag::S8);

    m.mov(254_i64, cell)?;
    Ok(vec![
        m.display("as unsigned =", cell)?,
        m.display("as signed =", view)?,
    ])
}

fn cost(m: &mut Machine<'_>) -> Result<Vec<String>> {
    let widgets = Variable::new(0, Tag::U8);
    let gadgets = Variable::new(1, Tag::U8);
    let total = Variable::new(2, Tag::U8);

    m.mov(19_i64 * 12, widgets)?;
    m.mov(37_i64, gadgets)?;
    m.mov(widgets, total)?;
    m.add(gadgets, total)?;

    Ok(vec![
        m.display("widget cost =", widgets)?,
        m.display("gadget cost =", gadgets)?,
        m.display("total cost =", total)?,
    ])
}

fn counter(m: &mut Machine<'_>) -> Result<Vec<String>> {
    let small = Variable::new(0, Tag::S8);
    let wide = Variable::new(2, Tag::U16);

    m.mov(1_i64, small)?;
    m.mov(1_i64, wide)?;

    while m.equal(small, wide)? {
        m.add(1_i64, small)?;
        m.add(1_i64, wide)?;
    }
    Ok(vec![
        m.display("small =", small)?,
        m.display("wide =", wide)?,
    ])
}

fn watch(m: &mut Machine<'_>) -> Result<Vec<String>> {
    let value = Variable::new(8, Tag::S16);
    let prev = Variable::new(10, Tag::S8);

    m.mov(0_i64, value)?;
    m.mov(0_i64, prev)?;

    let mut lines = Vec::new();
    while m.less_than_or_equal(prev, value)? {
        m.mov(value, prev)?;
        m.add_into(value, 5_i64, value)?;
        lines.push(format!(
            "prev = {}  val = {}",
            m.read(prev)?,
            m.read(value)?
        ));
    }
    Ok(lines)
}
