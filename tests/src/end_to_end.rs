//! Whole-workspace scenarios through the umbrella crate.

use notac::{
    compile, get_parenthesis, is_valid_formula, BoundedStack, CompileError, ParenPair,
    ParenthesisError, SortMode, StackError,
};
use pretty_assertions::assert_eq;

#[test]
fn compiles_what_the_bracket_matcher_pairs() {
    let expression = "D(S(9,S(2,9)),D(4,2))";
    let pairs = get_parenthesis(expression, SortMode::ByOpening).unwrap();
    // One pair per operator, outermost first.
    assert_eq!(
        pairs,
        vec![
            ParenPair { opening: 1, closing: 20 },
            ParenPair { opening: 3, closing: 12 },
            ParenPair { opening: 7, closing: 11 },
            ParenPair { opening: 15, closing: 19 },
        ]
    );
    assert_eq!(compile(expression), Ok(10));
}

#[test]
fn unbalanced_expression_fails_both_layers() {
    let expression = "S(1,S(2,3)";
    assert_eq!(
        get_parenthesis(expression, SortMode::Discovery),
        Err(ParenthesisError::Mismatch {
            opening: 2,
            closing: 1
        })
    );
    // The compiler itself tolerates the missing final ')' (preserved quirk):
    // end of input in second-argument position finalizes the machine.
    assert_eq!(compile(expression), Ok(6));
}

#[test]
fn formula_check_is_independent_of_the_compiler() {
    assert!(is_valid_formula("x + (y - z)"));
    assert!(compile("x + (y - z)").is_err());
}

#[test]
fn stack_errors_surface_through_the_umbrella() {
    let mut stack: BoundedStack<i64> = BoundedStack::new(1).unwrap();
    stack.push(1).unwrap();
    assert_eq!(stack.push(2).unwrap_err(), StackError::Overflow { capacity: 1 });

    let deep = format!("{}1{}", "S(1,".repeat(150), ")".repeat(150));
    assert!(matches!(compile(&deep), Err(CompileError::Stack(_))));
}

#[test]
fn reference_session() {
    // The round-trip a CLI session exercises.
    assert_eq!(compile("5"), Ok(5));
    assert_eq!(compile("S(2,3)"), Ok(5));
    assert_eq!(compile("D(9,S(2,9))"), Ok(0));
    assert!(is_valid_formula("x + y"));
    assert!(!is_valid_formula("x y"));
    assert!(!is_valid_formula("(x + y"));
    assert_eq!(
        get_parenthesis("(a(b)c)", SortMode::Discovery).unwrap(),
        vec![ParenPair { opening: 2, closing: 4 }, ParenPair { opening: 0, closing: 6 }]
    );
}
