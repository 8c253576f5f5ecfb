//! LIFO pairing of parenthesis positions in a source line.

use std::fmt;

use log::debug;
use notac_stack::{BoundedStack, StackError};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPENING_PARENTHESIS: char = '(';
const CLOSING_PARENTHESIS: char = ')';

/// Errors surfaced by [`get_parenthesis`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParenthesisError {
    /// The line holds a different number of opening and closing parentheses.
    #[error("formula contains parenthesis mismatch: {opening} opening to {closing} closing")]
    Mismatch { opening: usize, closing: usize },

    /// A stack operation failed while pairing; in practice an underflow from
    /// a closing parenthesis with no unmatched opening one (equal counts do
    /// not imply balance, e.g. `")("`).
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// A matched pair of parenthesis positions (character indices into the line).
///
/// Every closing index pairs with the most recent unmatched opening index
/// that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParenPair {
    pub opening: usize,
    pub closing: usize,
}

impl fmt::Display for ParenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.opening, self.closing)
    }
}

/// Ordering of the returned pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortMode {
    /// Emission order: pairs appear as they close, innermost first.
    #[default]
    Discovery,
    /// Ascending by opening index.
    ByOpening,
    /// Ascending by closing index.
    ByClosing,
}

/// Pairs the parenthesis positions of `line`.
///
/// Counts both parenthesis kinds first and fails with
/// [`ParenthesisError::Mismatch`] when the counts differ. Otherwise scans
/// left to right, pushing opening indices onto a container stack and emitting
/// a [`ParenPair`] for every closing index. Nesting depth is bounded only by
/// the line length.
///
/// A line without parentheses yields an empty vector.
pub fn get_parenthesis(line: &str, sort: SortMode) -> Result<Vec<ParenPair>, ParenthesisError> {
    let opening = line.chars().filter(|&c| c == OPENING_PARENTHESIS).count();
    let closing = line.chars().filter(|&c| c == CLOSING_PARENTHESIS).count();
    if opening != closing {
        return Err(ParenthesisError::Mismatch { opening, closing });
    }
    if opening == 0 {
        return Ok(Vec::new());
    }
    debug!("pairing {opening} opening to {closing} closing parentheses");

    let mut container = BoundedStack::new(opening + closing)?;
    let mut result = BoundedStack::new(opening + closing)?;

    for (index, letter) in line.chars().enumerate() {
        match letter {
            OPENING_PARENTHESIS => {
                container.push(index)?;
            }
            CLOSING_PARENTHESIS => {
                result.push(ParenPair {
                    opening: container.pop()?,
                    closing: index,
                })?;
            }
            _ => {}
        }
    }

    // Draining the result stack reverses the emission order.
    let mut pairs = Vec::with_capacity(result.size());
    while !result.is_empty() {
        pairs.push(result.pop()?);
    }
    match sort {
        SortMode::Discovery => pairs.reverse(),
        SortMode::ByOpening => pairs.sort_by_key(|pair| pair.opening),
        SortMode::ByClosing => pairs.sort_by_key(|pair| pair.closing),
    }
    Ok(pairs)
}
