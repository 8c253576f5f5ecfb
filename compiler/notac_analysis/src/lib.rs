//! Stack-based line analysis for the Nota compiler.
//!
//! Two independent utilities built on [`notac_stack::BoundedStack`]:
//!
//! - [`get_parenthesis`] pairs parenthesis positions in a line and reports
//!   unbalanced input;
//! - [`is_valid_formula`] runs a counting check over a small infix formula
//!   alphabet (operands `x y z`, operators `+ -`, three bracket kinds).
//!
//! Neither utility is coupled to the expression compiler; they only share the
//! bounded stack machinery.

pub mod formula;
pub mod parenthesis;

pub use formula::is_valid_formula;
pub use parenthesis::{get_parenthesis, ParenPair, ParenthesisError, SortMode};
