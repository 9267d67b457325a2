//! Source line numbers.
//!
//! The parsing stage tags nodes with the 1-based line they started on. Line
//! information is optional: `Line::UNKNOWN` marks generated nodes, and
//! diagnostics leave the location out for them.

use std::fmt;

/// 1-based source line, or `Line::UNKNOWN`.
///
/// Layout: 4 bytes, so every node carries it without a separate `Option`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Line(u32);

impl Line {
    /// No line information (generated code, tests).
    pub const UNKNOWN: Line = Line(0);

    /// Create a line number. `0` is the same as `Line::UNKNOWN`.
    #[inline]
    pub const fn new(line: u32) -> Self {
        Line(line)
    }

    /// Whether a real source line is attached.
    #[inline]
    pub const fn is_known(self) -> bool {
        self.0 != 0
    }

    /// The line number, if known.
    #[inline]
    pub const fn get(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0)
        }
    }

    /// Prefer `self`, falling back to `other` when `self` is unknown.
    #[inline]
    #[must_use]
    pub const fn or(self, other: Line) -> Line {
        if self.0 == 0 {
            other
        } else {
            self
        }
    }
}

impl From<u32> for Line {
    fn from(line: u32) -> Self {
        Line(line)
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(n) => write!(f, "L{n}"),
            None => write!(f, "L?"),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(n) => write!(f, "line {n}"),
            None => write!(f, "unknown line"),
        }
    }
}

/// Trait for nodes that carry a source line.
pub trait HasLine {
    /// Get the source line.
    fn line(&self) -> Line;
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Line;
    crate::static_assert_size!(Line, 4);
}
