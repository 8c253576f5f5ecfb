//! Umbrella crate for the Nota compiler workspace.
//!
//! Re-exports the public surface of the member crates so consumers depend on
//! a single crate:
//!
//! - [`compile`] — evaluate a prefix-notation expression (`S(a,b)` sums,
//!   `D(a,b)` divides);
//! - [`get_parenthesis`] / [`is_valid_formula`] — the stack-based line
//!   analysis utilities;
//! - [`BoundedStack`] — the fixed-capacity container underneath all of them.
//!
//! # Example
//!
//! ```
//! use notac::{compile, get_parenthesis, is_valid_formula, SortMode};
//!
//! assert_eq!(compile("S(2,3)").unwrap(), 5);
//! assert!(is_valid_formula("x + y"));
//! let pairs = get_parenthesis("(a(b)c)", SortMode::Discovery).unwrap();
//! assert_eq!((pairs[0].opening, pairs[0].closing), (2, 4));
//! ```

pub use notac_analysis::{
    get_parenthesis, is_valid_formula, ParenPair, ParenthesisError, SortMode,
};
pub use notac_compiler::{
    compile, CompileError, CompileResult, Compiler, NotationError, Operator, State,
};
pub use notac_stack::{BoundedStack, StackError, CAPACITY_MAXIMUM};
