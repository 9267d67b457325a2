//! Tree-walking interpreter for IMP programs.
//!
//! Statements evaluate to `0`, expressions to their `i64` value. Any error
//! is fatal and propagates with `?` straight out of `eval_program`; scopes
//! opened on the way are closed by [`ScopedInterpreter`] as the error
//! unwinds through them.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use imp_ir::{Block, Expr, ExprKind, Name, Program, Stmt, StmtKind, StringInterner};

use crate::errors::{internal, redeclaration, undeclared_assignment, undefined_variable};
use crate::{
    ensure_sufficient_stack, evaluate_binary, Environment, EvalError, EvalMode, EvalResult,
    ScopeError,
};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    /// Resolves names for error messages.
    pub(crate) interner: &'a StringInterner,
    /// Variable bindings of the run.
    pub env: Environment,
    pub(crate) mode: EvalMode,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty environment in `Sequential` mode.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Give up the interpreter, keeping its final environment.
    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Evaluate a whole program.
    ///
    /// Top-level statements run at level 0, in order, regardless of mode.
    /// After the walk the environment must be back at level 0.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.len(), mode = self.mode.name())
    )]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        let result = self
            .eval_stmts(&program.stmts, false)
            .and_then(|()| self.check_scope_balance());
        if let Err(err) = &result {
            tracing::debug!(error = %err, line = %err.line, "evaluation aborted");
        }
        result
    }

    /// Evaluate one statement. Errors are tagged with the statement's line
    /// unless a nested node already supplied one.
    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_stmt_inner(stmt)).map_err(|e| e.with_line(stmt.line))
    }

    /// Evaluate a block in a fresh scope.
    ///
    /// The scope is closed whether the statements succeed or fail.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult {
        let stop_after_control_flow = self.mode.stops_after_control_flow();
        self.with_env_scope(|scoped| scoped.eval_stmts(&block.stmts, stop_after_control_flow))?;
        Ok(0)
    }

    /// Evaluate an expression. Both operands of a binary operator are always
    /// evaluated, left first.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| match &expr.kind {
            ExprKind::Int(value) => Ok(*value),
            ExprKind::Ident(name) => self
                .env
                .lookup(*name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name))),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, left, right)
            }
        })
        .map_err(|e| e.with_line(expr.line))
    }

    fn eval_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult {
        match &stmt.kind {
            StmtKind::VarDecl { name, init } => {
                let value = match init {
                    Some(init) => self.eval_expr(init)?,
                    None => 0,
                };
                self.env
                    .insert(*name, value)
                    .map_err(|e| self.scope_error(e, *name))?;
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env
                    .update(*name, value)
                    .map_err(|e| self.scope_error(e, *name))?;
            }
            StmtKind::If { cond, then_block } => {
                if self.eval_cond(cond)? {
                    self.eval_block(then_block)?;
                }
            }
            StmtKind::IfElse {
                cond,
                then_block,
                else_block,
            } => {
                if self.eval_cond(cond)? {
                    self.eval_block(then_block)?;
                } else {
                    self.eval_block(else_block)?;
                }
            }
            StmtKind::While { cond, body } => self.eval_while(cond, body)?,
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => {
                // `init` and `update` live in the enclosing scope; only the
                // body gets a scope of its own, per iteration.
                if let Some(init) = init {
                    self.eval_stmt(init)?;
                }
                while self.eval_cond(cond)? {
                    self.eval_block(body)?;
                    if let Some(update) = update {
                        self.eval_stmt(update)?;
                    }
                }
            }
            StmtKind::DoWhile { body, cond } => {
                self.eval_block(body)?;
                self.eval_while(cond, body)?;
            }
            StmtKind::Block(block) => {
                self.eval_block(block)?;
            }
        }
        Ok(0)
    }

    /// Run `stmts` in order in the current scope.
    ///
    /// With `stop_after_control_flow`, the walk ends after the first
    /// control-flow statement.
    fn eval_stmts(&mut self, stmts: &[Stmt], stop_after_control_flow: bool) -> EvalResult<()> {
        for (stmt, remaining) in stmts.iter().zip((0..stmts.len()).rev()) {
            self.eval_stmt(stmt)?;
            if stop_after_control_flow && stmt.is_control_flow() {
                if remaining > 0 {
                    tracing::trace!(skipped = remaining, line = %stmt.line, "legacy chain stop");
                }
                break;
            }
        }
        Ok(())
    }

    fn eval_while(&mut self, cond: &Expr, body: &Block) -> EvalResult<()> {
        while self.eval_cond(cond)? {
            self.eval_block(body)?;
        }
        Ok(())
    }

    #[inline]
    fn eval_cond(&self, cond: &Expr) -> EvalResult<bool> {
        Ok(self.eval_expr(cond)? != 0)
    }

    fn scope_error(&self, err: ScopeError, name: Name) -> EvalError {
        let name = self.interner.lookup(name);
        match err {
            ScopeError::Redeclared => redeclaration(name),
            ScopeError::Undeclared => undeclared_assignment(name),
        }
    }

    fn check_scope_balance(&self) -> EvalResult<()> {
        match self.env.level() {
            0 => Ok(()),
            level => Err(internal(format!(
                "environment left at scope level {level} after the run"
            ))),
        }
    }
}
