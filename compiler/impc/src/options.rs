//! Run configuration.
//!
//! Options come from the embedding program or from the environment:
//!
//! | Variable        | Values                             | Default      |
//! |-----------------|------------------------------------|--------------|
//! | `IMP_EVAL_MODE` | `sequential`, `legacy`             | `sequential` |
//! | `IMP_DUMP`      | `all`, `ast`, `symbols`, `none`    | `all`        |
//!
//! Unrecognized values fall back to the default with a warning.

use imp_eval::EvalMode;

pub const EVAL_MODE_VAR: &str = "IMP_EVAL_MODE";
pub const DUMP_VAR: &str = "IMP_DUMP";

/// Which dumps a successful run prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpSelection {
    #[default]
    All,
    AstOnly,
    SymbolsOnly,
    Off,
}

impl DumpSelection {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "ast" => Some(Self::AstOnly),
            "symbols" => Some(Self::SymbolsOnly),
            "none" => Some(Self::Off),
            _ => None,
        }
    }

    pub fn includes_ast(self) -> bool {
        matches!(self, Self::All | Self::AstOnly)
    }

    pub fn includes_symbols(self) -> bool {
        matches!(self, Self::All | Self::SymbolsOnly)
    }
}

/// Options for one [`run`](crate::run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: EvalMode,
    /// Print the tree dump after a successful run.
    pub dump_ast: bool,
    /// Print the symbol table after a successful run.
    pub dump_symbols: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            mode: EvalMode::default(),
            dump_ast: true,
            dump_symbols: true,
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_dumps(mut self, dumps: DumpSelection) -> Self {
        self.dump_ast = dumps.includes_ast();
        self.dump_symbols = dumps.includes_symbols();
        self
    }

    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read options through `var`, which maps a variable name to its value.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = RunOptions::default();

        if let Some(value) = var(EVAL_MODE_VAR) {
            match EvalMode::from_name(&value) {
                Some(mode) => options = options.with_mode(mode),
                None => tracing::warn!(
                    variable = EVAL_MODE_VAR,
                    value = %value,
                    "unknown evaluation mode, using sequential"
                ),
            }
        }

        if let Some(value) = var(DUMP_VAR) {
            match DumpSelection::from_name(&value) {
                Some(dumps) => options = options.with_dumps(dumps),
                None => tracing::warn!(
                    variable = DUMP_VAR,
                    value = %value,
                    "unknown dump selection, printing all dumps"
                ),
            }
        }

        options
    }
}
