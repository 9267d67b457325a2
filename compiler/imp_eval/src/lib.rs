#![deny(clippy::arithmetic_side_effects)]
//! Imp Eval - Tree-walking evaluator for IMP programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a flat list of `(name, value, level)` bindings searched
//!   innermost-first
//! - `evaluate_binary`: direct enum-based binary operator dispatch with
//!   checked `i64` arithmetic
//! - `Interpreter`: recursive statement/expression walk, with scope exit
//!   guaranteed by an RAII guard
//!
//! Every runtime error is fatal; the first `EvalError` aborts the run.

mod environment;
pub mod errors;
mod eval_mode;
pub mod interpreter;
mod operators;
mod stack;

pub use environment::{Binding, Environment, ScopeError};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::EvalMode;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_binary_symbol};
pub use stack::ensure_sufficient_stack;

#[cfg(test)]
mod tests;
