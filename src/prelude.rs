//! # bytewise Prelude
//!
//! Import this module to get the types needed to build a store, declare variables and run
//! instructions against them.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bytewise operations
pub use crate::Error;

/// The result type used throughout bytewise
pub use crate::Result;

// ================================================================================================
// Memory
// ================================================================================================

/// Fixed-size byte memory and its configuration
pub use crate::{ByteStore, MemoryConfig};

/// Width/sign tag and address type
pub use crate::{Address, Tag};

// ================================================================================================
// Instructions
// ================================================================================================

/// Typed handles and operands
pub use crate::{Operand, Variable};

/// Operand resolution
pub use crate::{read, write};

/// The instruction set
pub use crate::Machine;

/// Input boundary
pub use crate::{ConsoleInput, InputSource, ScriptedInput};
