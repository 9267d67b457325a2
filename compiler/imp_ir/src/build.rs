//! Construction helpers for the parsing stage.
//!
//! Each `make_*` function builds exactly one node and takes ownership of
//! the already-built children passed in. Grammar actions call these while
//! reducing; tests call them to assemble trees by hand.
//!
//! Statement sequences are accumulated with [`append_statement`] into a
//! [`StmtList`], which then becomes a [`Block`] or the [`Program`] body.

use crate::ast::{BinaryOp, Block, Expr, ExprKind, Program, Stmt, StmtKind};
use crate::{Line, Name};

/// Statement sequence under construction.
///
/// Owned by exactly one block or program once finished. Appending always
/// extends this list; it never reaches into the body of a nested block or
/// loop, since those own separate lists.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StmtList(Vec<Stmt>);

impl StmtList {
    pub fn new() -> Self {
        StmtList(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish the list as a scoped block.
    pub fn into_block(self, line: Line) -> Block {
        Block::new(self.0, line)
    }

    /// Finish the list as the program body.
    pub fn into_program(self) -> Program {
        Program::new(self.0)
    }
}

impl From<Vec<Stmt>> for StmtList {
    fn from(stmts: Vec<Stmt>) -> Self {
        StmtList(stmts)
    }
}

impl FromIterator<Stmt> for StmtList {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        StmtList(iter.into_iter().collect())
    }
}

/// Append a statement to a list being built.
///
/// - no statement (an empty `;`): the list comes back unchanged
/// - no list yet: a new list holding just `stmt`
/// - otherwise `stmt` goes at the end of the same list
pub fn append_statement(list: Option<StmtList>, stmt: Option<Stmt>) -> Option<StmtList> {
    let Some(stmt) = stmt else {
        return list;
    };
    let mut list = list.unwrap_or_default();
    list.0.push(stmt);
    Some(list)
}

// Expressions

pub fn make_int(value: i64, line: Line) -> Expr {
    Expr::new(ExprKind::Int(value), line)
}

pub fn make_ident(name: Name, line: Line) -> Expr {
    Expr::new(ExprKind::Ident(name), line)
}

pub fn make_binop(op: BinaryOp, left: Expr, right: Expr, line: Line) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        line,
    )
}

// Statements

/// `var name;` when `init` is `None`, `var name = init;` otherwise.
pub fn make_var_decl(name: Name, init: Option<Expr>, line: Line) -> Stmt {
    Stmt::new(StmtKind::VarDecl { name, init }, line)
}

pub fn make_assign(name: Name, value: Expr, line: Line) -> Stmt {
    Stmt::new(StmtKind::Assign { name, value }, line)
}

pub fn make_if(cond: Expr, then_block: Block, line: Line) -> Stmt {
    Stmt::new(StmtKind::If { cond, then_block }, line)
}

pub fn make_if_else(cond: Expr, then_block: Block, else_block: Block, line: Line) -> Stmt {
    Stmt::new(
        StmtKind::IfElse {
            cond,
            then_block,
            else_block,
        },
        line,
    )
}

pub fn make_while(cond: Expr, body: Block, line: Line) -> Stmt {
    Stmt::new(StmtKind::While { cond, body }, line)
}

pub fn make_for(
    init: Option<Stmt>,
    cond: Expr,
    update: Option<Stmt>,
    body: Block,
    line: Line,
) -> Stmt {
    Stmt::new(
        StmtKind::For {
            init: init.map(Box::new),
            cond,
            update: update.map(Box::new),
            body,
        },
        line,
    )
}

pub fn make_do_while(body: Block, cond: Expr, line: Line) -> Stmt {
    Stmt::new(StmtKind::DoWhile { body, cond }, line)
}

// Blocks

/// A block from an optional statement list (`{}` has none).
pub fn make_block(stmts: Option<StmtList>, line: Line) -> Block {
    stmts.unwrap_or_default().into_block(line)
}

/// Wrap a block so it can appear as a statement.
pub fn make_block_stmt(block: Block) -> Stmt {
    let line = block.line;
    Stmt::new(StmtKind::Block(block), line)
}

/// The program root from an optional top-level statement list.
pub fn make_program(stmts: Option<StmtList>) -> Program {
    stmts.unwrap_or_default().into_program()
}
