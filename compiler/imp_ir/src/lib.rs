//! IMP IR - Syntax tree types for the IMP interpreter.
//!
//! This crate contains the data structures shared by the parsing stage and
//! the evaluator:
//! - `Line` for source locations
//! - `Name` for interned identifiers
//! - AST nodes (`Program`, `Block`, `Stmt`, `Expr`)
//! - Construction helpers used by the parser to assemble the tree
//! - A visitor and the indented tree dump
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: strings become `Name(u32)` once, at parse time
//! - **Closed sum types**: every node kind is an enum variant with its own
//!   fields, so the evaluator and the dumper match exhaustively
//! - **Exclusive ownership**: a node owns its children (`Box`/`Vec`); the
//!   tree has no sharing and no parent links, and dropping the root
//!   releases everything

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
pub mod build;
mod dump;
mod interner;
mod line;
mod name;
pub mod visitor;

pub use ast::{BinaryOp, Block, Expr, ExprKind, Program, Stmt, StmtKind};
pub use build::{append_statement, StmtList};
pub use dump::{dump_program, AstDumper};
pub use interner::{SharedInterner, StringInterner, StringLookup};
pub use line::{HasLine, Line};
pub use name::Name;
pub use visitor::Visitor;
