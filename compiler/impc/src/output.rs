//! Symbol table dump.
//!
//! ```text
//! SYMBOL TABLE
//! name = x, value = 6, scope = 0
//! ```
//!
//! One line per binding, in declaration order.

use std::fmt::Write as _;

use imp_eval::Binding;
use imp_ir::StringLookup;

const HEADER: &str = "SYMBOL TABLE";

/// Render `bindings` as the symbol table dump.
pub fn render_symbol_table<'b, L: StringLookup + ?Sized>(
    bindings: impl IntoIterator<Item = &'b Binding>,
    lookup: &L,
) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for binding in bindings {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "name = {}, value = {}, scope = {}",
            lookup.lookup(binding.name),
            binding.value,
            binding.level
        );
    }
    out
}
