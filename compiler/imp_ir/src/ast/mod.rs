//! AST node types.
//!
//! # Module Structure
//!
//! - `operators`: Binary operators
//! - `expr`: Expression nodes
//! - `stmt`: Statement nodes and `Block`
//!
//! # Ownership
//!
//! Each node exclusively owns its children. The parsing stage builds the
//! tree once, the evaluator reads it through shared references, and the run
//! driver hands the root to [`Program::release`] when the run is over.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::BinaryOp;
pub use stmt::{Block, Stmt, StmtKind};

/// Root of a parsed program.
///
/// Top-level statements run in the outermost scope (level 0); the program
/// itself does not open a scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Total number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        struct Counter(usize);

        impl<'ast> crate::Visitor<'ast> for Counter {
            fn visit_block(&mut self, block: &'ast Block) {
                self.0 += 1;
                crate::visitor::walk_block(self, block);
            }

            fn visit_stmt(&mut self, stmt: &'ast Stmt) {
                // A nested block statement is counted once, as a block.
                if !matches!(stmt.kind, StmtKind::Block(_)) {
                    self.0 += 1;
                }
                crate::visitor::walk_stmt(self, stmt);
            }

            fn visit_expr(&mut self, expr: &'ast Expr) {
                self.0 += 1;
                crate::visitor::walk_expr(self, expr);
            }
        }

        let mut counter = Counter(1);
        crate::Visitor::visit_program(&mut counter, self);
        counter.0
    }

    /// Release the whole tree.
    ///
    /// Consumes the root, so no node can be read afterwards and a second
    /// release does not compile. Returns the number of nodes released.
    /// Empty child slots (a declaration without initializer, a `for` without
    /// init or update) release nothing.
    pub fn release(self) -> usize {
        let count = self.node_count();
        drop(self);
        count
    }
}
