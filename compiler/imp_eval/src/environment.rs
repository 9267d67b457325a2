//! Scope environment for the interpreter.
//!
//! A flat list of bindings tagged with the nesting level they were declared
//! at. Lookup walks the list newest-first, so the innermost declaration of a
//! name shadows any outer one. Closing a scope drops every binding tagged
//! with the closing level.
//!
//! Levels along the list never decrease: new bindings always carry the
//! current level, and bindings from deeper levels are gone by the time the
//! level drops. The bindings of the open scope are therefore a suffix of
//! the list, found with a binary search.
//!
//! An environment created with [`Environment::recording_scope_exits`] also
//! copies the top-level bindings each time a scope closes, for the driver's
//! variable dump.

use imp_ir::Name;

/// Error returned by `Environment::insert` and `Environment::update`.
///
/// The evaluator lifts these into `EvalErrorKind` together with the
/// resolved name and the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// Name already bound in the current scope.
    #[error("name already declared in the current scope")]
    Redeclared,
    /// Name not bound in any enclosing scope.
    #[error("name not declared in any enclosing scope")]
    Undeclared,
}

/// A single variable binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: Name,
    pub value: i64,
    /// Nesting level at declaration; 0 is the top-level scope.
    pub level: u32,
}

/// Variable environment for one program run.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    level: u32,
    /// Top-level bindings at each scope exit, oldest first. `None` when not recording.
    scope_exit_snapshots: Option<Vec<Vec<Binding>>>,
}

impl Environment {
    /// Create an empty environment at level 0.
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
            level: 0,
            scope_exit_snapshots: None,
        }
    }

    /// Create an empty environment that snapshots the top-level bindings
    /// every time a scope closes.
    pub fn recording_scope_exits() -> Self {
        Environment {
            scope_exit_snapshots: Some(Vec::new()),
            ..Environment::new()
        }
    }

    /// Take the snapshots recorded so far, oldest first.
    ///
    /// Empty when the environment is not recording.
    pub fn take_scope_exit_snapshots(&mut self) -> Vec<Vec<Binding>> {
        self.scope_exit_snapshots
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Current nesting level.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of live bindings across all levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Open a nested scope.
    pub fn enter_scope(&mut self) {
        self.level = self.level.saturating_add(1);
        tracing::trace!(level = self.level, "enter scope");
    }

    /// Close the current scope.
    ///
    /// Removes every binding at the current level, then steps back one level.
    /// At level 0 the level stays 0. Returns the number of bindings removed.
    pub fn exit_scope(&mut self) -> usize {
        let start = self.scope_start(self.level);
        let dropped = self.bindings.drain(start..).count();
        tracing::trace!(level = self.level, dropped, "exit scope");
        if let Some(snapshots) = self.scope_exit_snapshots.as_mut() {
            snapshots.push(self.bindings.iter().filter(|b| b.level == 0).copied().collect());
        }
        self.level = self.level.saturating_sub(1);
        dropped
    }

    /// Declare `name` in the current scope.
    ///
    /// Shadowing a binding from an outer level is allowed; a second
    /// declaration at the same level is not. On failure the environment is
    /// left untouched.
    pub fn insert(&mut self, name: Name, value: i64) -> Result<i64, ScopeError> {
        if self.current_scope().iter().any(|b| b.name == name) {
            return Err(ScopeError::Redeclared);
        }
        self.bindings.push(Binding {
            name,
            value,
            level: self.level,
        });
        Ok(value)
    }

    /// Assign to the innermost binding of `name`.
    pub fn update(&mut self, name: Name, value: i64) -> Result<i64, ScopeError> {
        let binding = self
            .bindings
            .iter_mut()
            .rev()
            .find(|b| b.name == name)
            .ok_or(ScopeError::Undeclared)?;
        binding.value = value;
        Ok(value)
    }

    /// Value of the innermost binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<i64> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.name == name)
            .map(|b| b.value)
    }

    /// All live bindings, in declaration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Live bindings declared at `level`, in declaration order.
    pub fn bindings_at(&self, level: u32) -> impl Iterator<Item = &Binding> + '_ {
        self.bindings.iter().filter(move |b| b.level == level)
    }

    /// Bindings of the top-level scope, in declaration order.
    pub fn top_level_bindings(&self) -> impl Iterator<Item = &Binding> + '_ {
        self.bindings_at(0)
    }

    fn current_scope(&self) -> &[Binding] {
        &self.bindings[self.scope_start(self.level)..]
    }

    fn scope_start(&self, level: u32) -> usize {
        self.bindings.partition_point(|b| b.level < level)
    }
}
