//! RAII scope guard for interpreter environment management.
//!
//! [`ScopedInterpreter`] holds `&mut Interpreter` and closes the scope it
//! opened when dropped, on normal return, on `?` propagation, and during
//! unwinding. It derefs to the interpreter so the body can keep evaluating.
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.eval_stmt(stmt)?;
//! } // exit_scope called here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// RAII guard that ensures environment scope cleanup on drop.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.exit_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Open a scope that is closed when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.enter_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new environment scope.
    ///
    /// The scope is closed when the closure returns, even on panic.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
