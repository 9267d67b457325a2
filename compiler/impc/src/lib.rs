//! Impc - run driver for the IMP interpreter.
//!
//! Takes the tree handed over by the parsing stage, evaluates it, and
//! produces the run's observable output:
//! - the indented tree dump and the symbol table dumps on success
//! - a single diagnostic on the first runtime error
//! - an exit status for the process
//!
//! Lexing and parsing live upstream; they hand over a [`FrontendOutput`].

mod options;
mod output;
mod run;

pub use options::{DumpSelection, RunOptions};
pub use output::render_symbol_table;
pub use run::{run, FrontendOutput, RunOutcome};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `IMP_LOG` (or `RUST_LOG` when unset).
///
/// Evaluation spans nest per program/statement, so events render as an
/// indented tree on stderr. Does nothing unless one of the variables is set.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var("IMP_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
