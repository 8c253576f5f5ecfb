//! Integration and system tests for the Nota compiler.
//!
//! The modules here drive the whole workspace through the `notac` umbrella
//! crate, the way an embedding application would.

#[cfg(test)]
mod end_to_end;
