//! Expression Types
//!
//! Expressions only carry operand fields. Statement sequencing lives in
//! `Block`/`Program` statement lists and never goes through an expression.

use std::fmt;

use super::operators::BinaryOp;
use crate::{HasLine, Line, Name};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
}

impl Expr {
    pub fn new(kind: ExprKind, line: Line) -> Self {
        Expr { kind, line }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.line)
    }
}

impl HasLine for Expr {
    fn line(&self) -> Line {
        self.line
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),

    /// Variable reference: `x`
    Ident(Name),

    /// Binary operation: `left op right`
    ///
    /// Both operands are always evaluated, left first.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
