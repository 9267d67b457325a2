//! Error codes for all reported failures.
//!
//! The first digit names the phase:
//! - E1xxx: Syntax errors (reported by the parsing stage)
//! - E2xxx: Semantic errors (reported by the parsing stage)
//! - E6xxx: Runtime / eval errors
//! - E9xxx: Internal errors (malformed tree)

use std::fmt;

/// Error codes for all reported failures.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Frontend (E1xxx / E2xxx)
    /// Syntax error
    E1001,
    /// Semantic error
    E2001,

    // Runtime / Eval Errors (E6xxx)
    /// Variable declared twice in one scope
    E6001,
    /// Assignment to an undeclared variable
    E6002,
    /// Reference to an undefined variable
    E6003,
    /// Division by zero
    E6004,
    /// Integer overflow
    E6005,

    // Internal Errors (E9xxx)
    /// Unknown binary operator
    E9001,
    /// Internal interpreter error
    E9002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the code as a string (e.g., "E6004").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Short description, used when a diagnostic carries no message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "syntax error",
            ErrorCode::E2001 => "semantic error",
            ErrorCode::E6001 => "variable already declared in this scope",
            ErrorCode::E6002 => "assignment to undeclared variable",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "division by zero",
            ErrorCode::E6005 => "integer overflow",
            ErrorCode::E9001 => "unknown operator",
            ErrorCode::E9002 => "internal interpreter error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
