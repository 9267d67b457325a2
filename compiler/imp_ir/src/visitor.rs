//! AST Visitor Pattern
//!
//! Provides generic read-only traversal of the AST.
//!
//! # Design
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes; call the
//! matching `walk_*` function to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let ExprKind::Int(_) = expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{Block, Expr, ExprKind, Program, Stmt, StmtKind};

/// AST Visitor trait.
///
/// The visitor can mutate its own state during traversal. The AST itself
/// remains immutable.
pub trait Visitor<'ast> {
    /// Visit the program root.
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    /// Visit a block.
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

/// Walk every top-level statement in order.
pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for stmt in &program.stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Walk every statement of a block in order.
pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Walk a statement's children in source order.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::VarDecl { init, .. } => {
            if let Some(init) = init {
                visitor.visit_expr(init);
            }
        }
        StmtKind::Assign { value, .. } => visitor.visit_expr(value),
        StmtKind::If { cond, then_block } => {
            visitor.visit_expr(cond);
            visitor.visit_block(then_block);
        }
        StmtKind::IfElse {
            cond,
            then_block,
            else_block,
        } => {
            visitor.visit_expr(cond);
            visitor.visit_block(then_block);
            visitor.visit_block(else_block);
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond);
            visitor.visit_block(body);
        }
        StmtKind::For {
            init,
            cond,
            update,
            body,
        } => {
            if let Some(init) = init {
                visitor.visit_stmt(init);
            }
            visitor.visit_expr(cond);
            if let Some(update) = update {
                visitor.visit_stmt(update);
            }
            visitor.visit_block(body);
        }
        StmtKind::DoWhile { body, cond } => {
            visitor.visit_block(body);
            visitor.visit_expr(cond);
        }
        StmtKind::Block(block) => visitor.visit_block(block),
    }
}

/// Walk an expression's operands, left first.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Int(_) | ExprKind::Ident(_) => {}
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
    }
}
