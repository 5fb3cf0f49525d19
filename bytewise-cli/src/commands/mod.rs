pub mod common;
pub mod demo;
pub mod eval;
pub mod input;
