//! Variables, operands and the instruction set built on top of [`crate::ByteStore`].
//!
//! # Key Components
//!
//! - [`Variable`] - Address plus [`crate::Tag`], the typed handle into memory
//! - [`Operand`] - Either a literal or a variable; what instructions read from
//! - [`Machine`] - Move, arithmetic, comparison, input and display instructions
//! - [`InputSource`] - The injectable numeric input boundary
//!
//! Operands are resolved with [`read`] and destinations written with [`write`]. Writing only
//! ever targets a [`Variable`], so a literal destination is rejected at compile time.

mod input;
mod machine;
mod variable;

pub use input::{parse_integer, ConsoleInput, InputSource, ScriptedInput};
pub use machine::Machine;
pub use variable::{read, write, Operand, Variable};
