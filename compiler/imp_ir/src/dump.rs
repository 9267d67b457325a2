//! Indented tree dump.
//!
//! One line per node, two spaces per nesting level, children one level
//! deeper than their parent:
//!
//! ```text
//! PROGRAM
//!   VAR_DECL(x)
//!     INT(5)
//!   ASSIGN(x)
//!     BINOP(+)
//!       IDENT(x)
//!       INT(1)
//! ```

use std::fmt::Write as _;

use crate::ast::{Block, Expr, ExprKind, Program, Stmt, StmtKind};
use crate::visitor::{walk_block, walk_expr, walk_program, walk_stmt, Visitor};
use crate::StringLookup;

const INDENT: &str = "  ";

/// Visitor that renders the tree dump into a string.
pub struct AstDumper<'a, L: StringLookup + ?Sized> {
    lookup: &'a L,
    out: String,
    depth: usize,
}

impl<'a, L: StringLookup + ?Sized> AstDumper<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        AstDumper {
            lookup,
            out: String::new(),
            depth: 0,
        }
    }

    /// Consume the dumper, returning the rendered text.
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, label: std::fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(label);
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl<'ast, L: StringLookup + ?Sized> Visitor<'ast> for AstDumper<'_, L> {
    fn visit_program(&mut self, program: &'ast Program) {
        self.line(format_args!("PROGRAM"));
        self.nested(|d| walk_program(d, program));
    }

    fn visit_block(&mut self, block: &'ast Block) {
        self.line(format_args!("BLOCK"));
        self.nested(|d| walk_block(d, block));
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        match &stmt.kind {
            // The block prints its own label.
            StmtKind::Block(block) => return self.visit_block(block),
            StmtKind::VarDecl { name, .. } => {
                let lookup = self.lookup;
                let name = lookup.lookup(*name);
                self.line(format_args!("VAR_DECL({name})"));
            }
            StmtKind::Assign { name, .. } => {
                let lookup = self.lookup;
                let name = lookup.lookup(*name);
                self.line(format_args!("ASSIGN({name})"));
            }
            StmtKind::If { .. } => self.line(format_args!("IF")),
            StmtKind::IfElse { .. } => self.line(format_args!("IF_ELSE")),
            StmtKind::While { .. } => self.line(format_args!("WHILE")),
            StmtKind::For { .. } => self.line(format_args!("FOR")),
            StmtKind::DoWhile { .. } => self.line(format_args!("DO_WHILE")),
        }
        self.nested(|d| walk_stmt(d, stmt));
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        match &expr.kind {
            ExprKind::Int(value) => self.line(format_args!("INT({value})")),
            ExprKind::Ident(name) => {
                let lookup = self.lookup;
                let name = lookup.lookup(*name);
                self.line(format_args!("IDENT({name})"));
            }
            ExprKind::Binary { op, .. } => self.line(format_args!("BINOP({op})")),
        }
        self.nested(|d| walk_expr(d, expr));
    }
}

/// Render the whole program as an indented tree.
pub fn dump_program<L: StringLookup + ?Sized>(program: &Program, lookup: &L) -> String {
    let mut dumper = AstDumper::new(lookup);
    dumper.visit_program(program);
    dumper.finish()
}
