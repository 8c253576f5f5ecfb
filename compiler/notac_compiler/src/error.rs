//! Compilation error types and caret-snippet rendering.

use notac_stack::StackError;
use thiserror::Error;

/// A grammar violation found while driving the state machine.
///
/// Carries the expected token description, the character actually found
/// (empty at end of input), the offending index and the full source line, so
/// callers can render a caret diagnostic without re-reading the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {expected} but was '{found}' at {index}")]
pub struct NotationError {
    /// Description of what the grammar allowed here, e.g. `','` or `number`.
    pub expected: String,
    /// The character found instead; empty at end of input.
    pub found: String,
    /// Character index of the violation in `line`.
    pub index: usize,
    /// The full source line, kept for snippet rendering.
    pub line: String,
}

impl NotationError {
    pub(crate) fn new(expected: &str, found: Option<char>, index: usize, line: &str) -> Self {
        Self {
            expected: expected.to_string(),
            found: found.map(String::from).unwrap_or_default(),
            index,
            line: line.to_string(),
        }
    }

    /// Renders the error with the source line and a caret under the
    /// offending column:
    ///
    /// ```text
    /// expected ',' but was ')' at 5
    /// S(1 2)
    /// -----^
    /// ```
    pub fn render_snippet(&self) -> String {
        format!("{}\n{}\n{}^", self, self.line, "-".repeat(self.index))
    }
}

/// Any failure of a [`compile`](crate::compile) call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// The input violated the notation grammar.
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// An operand or return-state stack hit its capacity ceiling.
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// A result type for compilation.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
