//! The run step: evaluate a parsed program and report the outcome.
//!
//! ```text
//! frontend flags set  -> diagnostic, tree released, FrontendFailed
//! evaluation fails    -> diagnostic, tree released, RuntimeFailed
//! evaluation succeeds -> tree released, dumps written, Success
//! ```
//!
//! The tree is released exactly once on every path, after the last read.
//! On success the variable dump holds one symbol table per scope exit,
//! then one for the end of the run.

use std::io::{self, Write};
use std::process::ExitCode;

use imp_diagnostic::emitter::DiagnosticEmitter;
use imp_diagnostic::{Diagnostic, ErrorCode};
use imp_eval::{Environment, EvalError, InterpreterBuilder};
use imp_ir::{dump_program, Program, StringInterner};

use crate::{render_symbol_table, RunOptions};

/// What the parsing stage hands over.
#[derive(Debug, Default)]
pub struct FrontendOutput {
    /// Tree root; `None` when nothing was built.
    pub program: Option<Program>,
    /// The grammar rejected the input.
    pub syntax_failed: bool,
    /// A grammar-time semantic check failed (e.g. early redeclaration).
    pub semantic_failed: bool,
}

impl FrontendOutput {
    /// A cleanly parsed program.
    pub fn parsed(program: Program) -> Self {
        FrontendOutput {
            program: Some(program),
            syntax_failed: false,
            semantic_failed: false,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.syntax_failed || self.semantic_failed
    }

    /// Code reported when the frontend failed: syntax errors take priority.
    fn error_code(&self) -> ErrorCode {
        if self.syntax_failed {
            ErrorCode::E1001
        } else {
            ErrorCode::E2001
        }
    }
}

/// Outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Evaluated to completion; dumps were printed.
    Success,
    /// Parsing or semantic checks failed; nothing was evaluated.
    FrontendFailed,
    /// Evaluation stopped at a fatal error.
    RuntimeFailed(EvalError),
    /// Evaluation succeeded but the dumps could not be written.
    OutputFailed(io::ErrorKind),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }

    /// Process status: 0 on success, 1 otherwise.
    pub fn status(&self) -> u8 {
        u8::from(!self.is_success())
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Evaluate the program handed over by the frontend.
///
/// A missing tree with no frontend errors is an empty program. Dumps go to
/// `out`, written only once evaluation has completed; the single fatal
/// diagnostic, if any, goes to `diagnostics`.
#[tracing::instrument(level = "debug", skip_all, fields(mode = options.mode.name()))]
pub fn run(
    frontend: FrontendOutput,
    interner: &StringInterner,
    options: &RunOptions,
    out: &mut impl Write,
    diagnostics: &mut impl DiagnosticEmitter,
) -> RunOutcome {
    if frontend.has_errors() {
        let code = frontend.error_code();
        tracing::debug!(%code, "frontend failed, skipping evaluation");
        diagnostics.emit(&Diagnostic::error(code).with_note("evaluation skipped"));
        diagnostics.flush();
        if let Some(program) = frontend.program {
            release(program);
        }
        return RunOutcome::FrontendFailed;
    }

    let program = frontend.program.unwrap_or_default();
    let env = if options.dump_symbols {
        Environment::recording_scope_exits()
    } else {
        Environment::new()
    };
    let mut interpreter = InterpreterBuilder::new(interner)
        .mode(options.mode)
        .env(env)
        .build();

    if let Err(err) = interpreter.eval_program(&program) {
        diagnostics.emit(&err.to_diagnostic());
        diagnostics.flush();
        release(program);
        return RunOutcome::RuntimeFailed(err);
    }

    let mut dumps = String::new();
    if options.dump_ast {
        dumps.push_str(&dump_program(&program, interner));
    }
    release(program);
    if options.dump_symbols {
        let mut env = interpreter.into_env();
        for snapshot in env.take_scope_exit_snapshots() {
            dumps.push_str(&render_symbol_table(&snapshot, interner));
        }
        dumps.push_str(&render_symbol_table(env.top_level_bindings(), interner));
    }

    match out.write_all(dumps.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => RunOutcome::Success,
        Err(err) => {
            tracing::error!(%err, "failed to write dumps");
            RunOutcome::OutputFailed(err.kind())
        }
    }
}

fn release(program: Program) {
    let released = program.release();
    tracing::trace!(released, "tree released");
}
