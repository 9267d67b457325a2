//! Evaluation errors and their constructors.
//!
//! All runtime errors are fatal: the evaluator propagates the first one with
//! `?` and the driver reports it. Factory functions are the single place
//! where error kinds are built, so messages stay consistent.
//!
//! ```text
//! use imp_eval::errors::{division_by_zero, undefined_variable};
//! ```

use imp_diagnostic::{Diagnostic, ErrorCode};
use imp_ir::Line;

/// Structured category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("variable `{name}` already declared in this scope")]
    Redeclaration { name: String },

    #[error("assignment to undeclared variable `{name}`")]
    UndeclaredAssignment { name: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl EvalErrorKind {
    /// Error code reported for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Redeclaration { .. } => ErrorCode::E6001,
            EvalErrorKind::UndeclaredAssignment { .. } => ErrorCode::E6002,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero => ErrorCode::E6004,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6005,
            EvalErrorKind::UnknownOperator { .. } => ErrorCode::E9001,
            EvalErrorKind::Internal { .. } => ErrorCode::E9002,
        }
    }

    fn note(&self) -> Option<String> {
        match self {
            EvalErrorKind::Redeclaration { .. } => {
                Some("shadowing is only allowed inside a nested block".to_string())
            }
            EvalErrorKind::UndeclaredAssignment { name }
            | EvalErrorKind::UndefinedVariable { name } => {
                Some(format!("declare it first with `var {name};`"))
            }
            _ => None,
        }
    }
}

/// A fatal runtime error with the line of the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// `Line::UNKNOWN` when the failing node carried no line.
    pub line: Line,
}

/// Result of evaluating a node. Statements evaluate to `0`.
pub type EvalResult<T = i64> = Result<T, EvalError>;

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            line: Line::UNKNOWN,
        }
    }

    /// Attach `line` unless a more precise line is already set.
    ///
    /// Errors pick up the line of the innermost node that knows one; outer
    /// nodes do not overwrite it.
    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = self.line.or(line);
        self
    }

    /// Render as a diagnostic for the terminal emitter.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_line(self.line);
        if let Some(note) = self.kind.note() {
            diag = diag.with_note(note);
        }
        diag
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Scope Errors

pub fn redeclaration(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::Redeclaration {
        name: name.to_string(),
    })
}

pub fn undeclared_assignment(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndeclaredAssignment {
        name: name.to_string(),
    })
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Arithmetic Errors

pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

// Malformed Input

pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    })
}

pub fn internal(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::Internal {
        message: message.into(),
    })
}
