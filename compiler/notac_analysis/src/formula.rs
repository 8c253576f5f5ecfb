//! Counting check for small infix formulas.

use log::trace;
use notac_stack::{BoundedStack, StackError, CAPACITY_MAXIMUM};

/// Operand alphabet accepted by the formula check.
pub const OPERANDS: [char; 3] = ['x', 'y', 'z'];
/// Binary operator alphabet.
pub const OPERATORS: [char; 2] = ['+', '-'];
/// Opening bracket kinds.
pub const OPENING_BRACKETS: [char; 3] = ['(', '[', '{'];
/// Closing bracket kinds.
pub const CLOSING_BRACKETS: [char; 3] = [')', ']', '}'];

/// The closing bracket paired with `opening`, `'}'` by default.
fn closing_bracket_for(opening: char) -> char {
    match opening {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Whether `line` satisfies the formula counting rules.
///
/// Token rules, applied left to right with spaces skipped and characters
/// outside the alphabets ignored:
///
/// - two operands may not follow each other without an operator in between;
/// - operators and opening brackets accumulate on an operator stack;
/// - a closing bracket unwinds the operator stack down to its matching
///   opening bracket, consuming one operand per unwound operator (each needs
///   at least two available);
/// - whatever remains after the scan must drain the same way, ending with at
///   most one operand and no operators.
///
/// This is a balance heuristic, not a grammar: some malformed formulas that
/// happen to satisfy the counting invariant are accepted. Never fails; any
/// internal stack violation reads as an invalid formula.
pub fn is_valid_formula(line: &str) -> bool {
    check_formula(line).unwrap_or(false)
}

fn check_formula(line: &str) -> Result<bool, StackError> {
    let capacity = line.chars().count().clamp(1, CAPACITY_MAXIMUM - 1);
    let mut operands = BoundedStack::new(capacity)?;
    let mut operators = BoundedStack::new(capacity)?;
    let mut letter_may_follow = true;

    for letter in line.chars().filter(|&c| c != ' ') {
        if OPERANDS.contains(&letter) {
            if !letter_may_follow {
                trace!("operand '{letter}' follows an unconsumed operand");
                return Ok(false);
            }
            letter_may_follow = false;
            operands.push(letter)?;
        } else if OPERATORS.contains(&letter) {
            letter_may_follow = true;
            operators.push(letter)?;
        } else if OPENING_BRACKETS.contains(&letter) {
            operators.push(letter)?;
        } else if CLOSING_BRACKETS.contains(&letter) {
            if !unwind_to_opening(letter, &mut operands, &mut operators)? {
                return Ok(false);
            }
        }
    }

    // Everything left on the operator stack must reduce like a closing
    // bracket would, one operand per operator.
    while !operators.is_empty() {
        let operator = operators.pop()?;
        if !OPERATORS.contains(&operator) || operands.size() < 2 {
            return Ok(false);
        }
        operands.pop()?;
    }

    Ok(operands.size() <= 1)
}

/// Pops the operator stack down to the opening bracket matching `closing`.
///
/// Every entry popped on the way must be a binary operator with at least two
/// operands available and consumes one of them. Returns `false` when the
/// stack empties without the match or a non-operator is found first.
fn unwind_to_opening(
    closing: char,
    operands: &mut BoundedStack<char>,
    operators: &mut BoundedStack<char>,
) -> Result<bool, StackError> {
    while !operators.is_empty() {
        let top = operators.pop()?;
        if OPENING_BRACKETS.contains(&top) {
            return Ok(closing == closing_bracket_for(top));
        }
        if !OPERATORS.contains(&top) || operands.size() < 2 {
            return Ok(false);
        }
        operands.pop()?;
    }
    trace!("closing bracket '{closing}' has no opening match");
    Ok(false)
}
