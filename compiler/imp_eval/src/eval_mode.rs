//! Evaluation modes for the interpreter.
//!
//! The mode decides how statements inside a block are walked. Enum dispatch
//! keeps the interpreter a single concrete type.

/// How the statements of a nested block are walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Every statement in a block runs, in order.
    #[default]
    Sequential,
    /// Conformance mode reproducing the legacy statement chain.
    ///
    /// Once a control-flow statement (`if`, `while`, `for`, `do-while`) in a
    /// nested block has run, the rest of that block is skipped. Top-level
    /// statements are not affected.
    LegacyChain,
}

impl EvalMode {
    /// Whether a nested block stops after its first control-flow statement.
    #[inline]
    pub fn stops_after_control_flow(self) -> bool {
        matches!(self, Self::LegacyChain)
    }

    /// Configuration name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::LegacyChain => "legacy",
        }
    }

    /// Parse a configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Sequential, Self::LegacyChain]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }
}
