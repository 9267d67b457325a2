//! Statement Types
//!
//! Statement node and variants, plus `Block` (a scoped statement list).

use std::fmt;

use super::expr::Expr;
use crate::{HasLine, Line, Name};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: Line,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: Line) -> Self {
        Stmt { kind, line }
    }

    /// Whether this statement transfers control (conditional or loop).
    ///
    /// Blocks are not control flow: they only open a scope.
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self.kind,
            StmtKind::If { .. }
                | StmtKind::IfElse { .. }
                | StmtKind::While { .. }
                | StmtKind::For { .. }
                | StmtKind::DoWhile { .. }
        )
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.line)
    }
}

impl HasLine for Stmt {
    fn line(&self) -> Line {
        self.line
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `var name;` or `var name = init;`
    VarDecl { name: Name, init: Option<Expr> },

    /// `name = value;`
    Assign { name: Name, value: Expr },

    /// `if (cond) { ... }`
    If { cond: Expr, then_block: Block },

    /// `if (cond) { ... } else { ... }`
    IfElse {
        cond: Expr,
        then_block: Block,
        else_block: Block,
    },

    /// `while (cond) { ... }`
    While { cond: Expr, body: Block },

    /// `for (init; cond; update) { ... }`
    ///
    /// `init` and `update` run in the enclosing scope, not in the body's.
    For {
        init: Option<Box<Stmt>>,
        cond: Expr,
        update: Option<Box<Stmt>>,
        body: Block,
    },

    /// `do { ... } while (cond);`
    DoWhile { body: Block, cond: Expr },

    /// Nested `{ ... }`
    Block(Block),
}

/// A braced statement list. Evaluating it opens a new scope.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub line: Line,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, line: Line) -> Self {
        Block { stmts, line }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.stmts).finish()?;
        write!(f, " @ {:?}", self.line)
    }
}

impl HasLine for Block {
    fn line(&self) -> Line {
        self.line
    }
}
