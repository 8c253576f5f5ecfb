//! End-to-end compilation scenarios, driven through the public entry point.

use notac_compiler::{compile, CompileError};
use notac_stack::StackError;
use pretty_assertions::assert_eq;

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn evaluates_the_reference_expression() {
    init_test_logger();
    assert_eq!(compile("D(S(9, S(2, 9)), D(4, 2))"), Ok(10));
}

#[test]
fn single_digit_and_accumulated_numbers() {
    assert_eq!(compile("7"), Ok(7));
    assert_eq!(compile("  307  "), Ok(307));
}

#[test]
fn sums_nest_on_either_side() {
    assert_eq!(compile("S(S(1,2),S(3,4))"), Ok(10));
    assert_eq!(compile("S(S(S(1,1),1),1)"), Ok(4));
}

#[test]
fn division_chains() {
    assert_eq!(compile("D(D(8,2),2)"), Ok(2));
    assert_eq!(compile("D(1,3)"), Ok(0));
}

#[test]
fn nesting_within_capacity_succeeds() {
    let expression = format!("{}1{}", "S(1,".repeat(50), ")".repeat(50));
    assert_eq!(compile(&expression), Ok(51));
}

#[test]
fn nesting_beyond_capacity_overflows() {
    let expression = format!("{}1{}", "S(1,".repeat(150), ")".repeat(150));
    match compile(&expression) {
        Err(CompileError::Stack(StackError::Overflow { capacity })) => {
            assert_eq!(capacity, notac_compiler::STACK_CAPACITY);
        }
        other => panic!("expected a stack overflow, got {other:?}"),
    }
}

#[test]
fn truncated_second_argument_finalizes() {
    // A missing final ')' is tolerated: end of input in second-argument
    // position finalizes the machine and the loose operands are summed.
    assert_eq!(compile("S(2,3"), Ok(5));
}

#[test]
fn notation_errors_render_a_caret_snippet() {
    let err = match compile("S(") {
        Err(CompileError::Notation(err)) => err,
        other => panic!("expected a notation error, got {other:?}"),
    };
    assert_eq!(err.render_snippet(), "expected ',' but was '' at 2\nS(\n--^");
}

#[test]
fn errors_abort_on_first_violation() {
    // Both the missing '(' and the trailing garbage are wrong; only the
    // first violation is reported.
    let err = match compile("Sx)y") {
        Err(CompileError::Notation(err)) => err,
        other => panic!("expected a notation error, got {other:?}"),
    };
    assert_eq!(err.expected, "'('");
    assert_eq!(err.index, 1);
}
