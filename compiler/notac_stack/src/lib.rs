//! Fixed-capacity stack container for the Nota compiler.
//!
//! This crate defines [`BoundedStack`], the LIFO container shared by the
//! analysis passes and the expression compiler, together with its error type.
//! Capacity is validated at construction time and enforced on every push, so
//! a machine built on top of two bounded stacks has a hard memory ceiling.

pub mod stack;

pub use stack::{BoundedStack, StackError, StackResult, CAPACITY_MAXIMUM};
