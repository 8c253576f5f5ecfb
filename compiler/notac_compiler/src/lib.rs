//! Finite-state compiler for the Nota prefix notation.
//!
//! The language is tiny:
//!
//! ```text
//! expr := digit+ | 'S' '(' expr ',' expr ')' | 'D' '(' expr ',' expr ')'
//! ```
//!
//! `S` sums its two arguments, `D` divides them. The compiler walks the input
//! character by character through an explicit state machine and evaluates in
//! a single left-to-right pass with no token stream, no syntax tree and no
//! backtracking. Nested sub-expressions suspend the enclosing state on a
//! return-state stack instead of recursing.
//!
//! # Example
//!
//! ```
//! assert_eq!(notac_compiler::compile("S(2,3)").unwrap(), 5);
//! assert_eq!(notac_compiler::compile("D(S(9,S(2,9)),D(4,2))").unwrap(), 10);
//! assert!(notac_compiler::compile("S(1 2)").is_err());
//! ```

pub mod compiler;
pub mod error;
pub mod state;

pub use compiler::{compile, Compiler, STACK_CAPACITY};
pub use error::{CompileError, CompileResult, NotationError};
pub use state::{Operator, State};
