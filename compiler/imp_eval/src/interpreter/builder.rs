//! `InterpreterBuilder` for creating Interpreter instances.

use super::Interpreter;
use crate::{Environment, EvalMode};
use imp_ir::StringInterner;

/// Builder for creating Interpreter instances with various configurations.
///
/// The default mode is `Sequential`; `LegacyChain` is for conformance runs
/// against programs written for the legacy statement chain.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    env: Option<Environment>,
    mode: EvalMode,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: None,
            mode: EvalMode::default(),
        }
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            mode: self.mode,
        }
    }
}
