//! Shared helpers for driver tests.

use imp_diagnostic::emitter::{ColorMode, TerminalEmitter};
use imp_ir::build::{
    make_assign, make_binop, make_block, make_ident, make_int, make_program, make_var_decl,
};
use imp_ir::{BinaryOp, Block, Expr, Line, Program, Stmt, StmtList, StringInterner};
use impc::{run, FrontendOutput, RunOptions, RunOutcome};

/// Builds nodes against one interner, with an explicit current line.
pub struct TreeBuilder<'a> {
    pub interner: &'a StringInterner,
    line: Line,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        TreeBuilder {
            interner,
            line: Line::new(1),
        }
    }

    /// Move to source line `n` for the nodes built next.
    pub fn at(&mut self, n: u32) {
        self.line = Line::new(n);
    }

    pub fn int(&self, value: i64) -> Expr {
        make_int(value, self.line)
    }

    pub fn var(&self, name: &str) -> Expr {
        make_ident(self.interner.intern(name), self.line)
    }

    pub fn bin(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        make_binop(op, left, right, self.line)
    }

    pub fn decl(&self, name: &str, init: Option<Expr>) -> Stmt {
        make_var_decl(self.interner.intern(name), init, self.line)
    }

    pub fn assign(&self, name: &str, value: Expr) -> Stmt {
        make_assign(self.interner.intern(name), value, self.line)
    }

    pub fn block(&self, stmts: Vec<Stmt>) -> Block {
        make_block(Some(StmtList::from(stmts)), self.line)
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

pub fn program(stmts: Vec<Stmt>) -> Program {
    make_program(Some(StmtList::from(stmts)))
}

/// Everything a run produced.
pub struct RunResult {
    pub outcome: RunOutcome,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_with(
    frontend: FrontendOutput,
    interner: &StringInterner,
    options: &RunOptions,
) -> RunResult {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let outcome = run(frontend, interner, options, &mut out, &mut emitter);
    RunResult {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(emitter.into_inner()).unwrap(),
    }
}

pub fn run_program(program: Program, interner: &StringInterner) -> RunResult {
    run_with(
        FrontendOutput::parsed(program),
        interner,
        &RunOptions::default(),
    )
}

/// Runs with only the symbol table dumped.
pub fn run_symbols(program: Program, interner: &StringInterner) -> RunResult {
    run_with(
        FrontendOutput::parsed(program),
        interner,
        &RunOptions::default().with_dumps(impc::DumpSelection::SymbolsOnly),
    )
}

/// The end-of-run symbol table: everything from the last header on.
pub fn final_table(stdout: &str) -> &str {
    stdout.rfind("SYMBOL TABLE").map_or("", |start| &stdout[start..])
}

/// Number of symbol tables printed.
pub fn table_count(stdout: &str) -> usize {
    stdout.matches("SYMBOL TABLE").count()
}
