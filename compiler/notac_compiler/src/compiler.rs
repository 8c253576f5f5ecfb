//! The machine context and its driving loop.

use log::{debug, trace};
use notac_stack::BoundedStack;

use crate::error::{CompileError, CompileResult, NotationError};
use crate::state::{Operator, State};

/// Capacity of the operand and return-state stacks.
///
/// Bounds the nesting depth one compilation can reach; deeper input fails
/// with a stack overflow instead of growing without limit.
pub const STACK_CAPACITY: usize = 100;

const EXPECTED_NUMBER: &str = "number";
const EXPECTED_NONZERO: &str = "number from 1 to 9";
const EXPECTED_EXPRESSION_END: &str = "end of the expression";
const EXPECTED_OPENING: &str = "'('";
const EXPECTED_COMMA: &str = "','";

/// Compiles and evaluates a prefix-notation expression.
///
/// Drives a fresh [`Compiler`] until its final state, then reduces whatever
/// remains on the operand stack into a single integer (the sum of the
/// leftovers, truncated toward zero; a well-formed parse leaves exactly one
/// value).
///
/// # Errors
///
/// [`CompileError::Notation`] on the first grammar violation,
/// [`CompileError::Stack`] when nesting exhausts the stack capacity.
pub fn compile(expression: &str) -> CompileResult<i64> {
    Compiler::new(expression)?.run()
}

/// One compilation in flight: the immutable source line, a cursor into it,
/// the current state and the two bounded stacks.
///
/// The cursor only moves forward; suspended states live on the return-state
/// stack rather than in native call frames, so the whole machine is iterative
/// and inspectable.
pub struct Compiler<'a> {
    line: &'a str,
    letters: Vec<char>,
    index: usize,
    state: State,
    operands: BoundedStack<f64>,
    returns: BoundedStack<State>,
}

impl<'a> Compiler<'a> {
    /// Creates a machine over `expression` in the initial state.
    pub fn new(expression: &'a str) -> CompileResult<Self> {
        Ok(Self {
            line: expression,
            letters: expression.chars().collect(),
            index: 0,
            state: State::Initial,
            operands: BoundedStack::new(STACK_CAPACITY)?,
            returns: BoundedStack::new(STACK_CAPACITY)?,
        })
    }

    /// Drives the machine to its final state and reduces the operand stack.
    pub fn run(mut self) -> CompileResult<i64> {
        while self.state != State::Final {
            self.step()?;
        }
        let mut total = 0.0;
        while !self.operands.is_empty() {
            total += self.operands.try_pop(0.0);
        }
        debug!("compiled {:?} to {total}", self.line);
        Ok(total as i64)
    }

    /// Consumes the character under the cursor in the current state.
    fn step(&mut self) -> CompileResult<()> {
        let letter = self.current();
        trace!("{:?} at {} on {letter:?}", self.state, self.index);
        match self.state {
            State::Initial => self.step_initial(letter),
            State::OneNumber => self.step_one_number(letter),
            State::Operator(operator) => self.step_operator(operator, letter),
            State::FirstArgument(operator) => self.step_first_argument(operator, letter),
            State::SecondArgument(operator) => self.step_second_argument(operator, letter),
            State::Final => Ok(()),
        }
    }

    fn step_initial(&mut self, letter: Option<char>) -> CompileResult<()> {
        match letter {
            None => self.transition(State::Final),
            Some(' ') => self.skip(),
            Some(digit) if digit.is_ascii_digit() => {
                self.operands.push(digit_value(digit))?;
                self.transition(State::OneNumber)
            }
            Some('S') => self.transition(State::Operator(Operator::Sum)),
            Some('D') => self.transition(State::Operator(Operator::Divide)),
            Some(_) => Err(self.fail(EXPECTED_NUMBER)),
        }
    }

    fn step_one_number(&mut self, letter: Option<char>) -> CompileResult<()> {
        match letter {
            None => self.transition(State::Final),
            Some(' ') => self.skip(),
            Some(digit) if digit.is_ascii_digit() => {
                // Consecutive digits build one number on top of the stack.
                let value = self.operands.try_pop(0.0);
                self.operands.push(value * 10.0 + digit_value(digit))?;
                self.skip()
            }
            Some(_) => Err(self.fail(EXPECTED_EXPRESSION_END)),
        }
    }

    fn step_operator(&mut self, operator: Operator, letter: Option<char>) -> CompileResult<()> {
        match letter {
            Some(' ') => self.skip(),
            Some('(') => self.transition(State::FirstArgument(operator)),
            _ => Err(self.fail(EXPECTED_OPENING)),
        }
    }

    fn step_first_argument(&mut self, operator: Operator, letter: Option<char>) -> CompileResult<()> {
        match letter {
            Some(' ') => self.skip(),
            Some('S') => self.suspend(State::FirstArgument(operator), Operator::Sum),
            Some('D') => self.suspend(State::FirstArgument(operator), Operator::Divide),
            Some(',') => self.transition(State::SecondArgument(operator)),
            None | Some(')') => Err(self.fail(EXPECTED_COMMA)),
            Some(digit) if digit.is_ascii_digit() => {
                self.operands.push(digit_value(digit))?;
                self.skip()
            }
            Some(_) => Err(self.fail(EXPECTED_NUMBER)),
        }
    }

    fn step_second_argument(&mut self, operator: Operator, letter: Option<char>) -> CompileResult<()> {
        match letter {
            Some(' ') => self.skip(),
            Some('S') => self.suspend(State::SecondArgument(operator), Operator::Sum),
            Some('D') => self.suspend(State::SecondArgument(operator), Operator::Divide),
            None => self.transition(State::Final),
            Some(')') => self.reduce(operator),
            Some(digit) if digit.is_ascii_digit() => {
                // The divide path rejects a zero digit in second-argument
                // position outright, before any accumulation.
                if operator == Operator::Divide && digit == '0' {
                    return Err(self.fail(EXPECTED_NONZERO));
                }
                self.operands.push(digit_value(digit))?;
                self.skip()
            }
            Some(_) => Err(self.fail(EXPECTED_NUMBER)),
        }
    }

    /// Applies `operator` to the two topmost operands on a `)` and resumes
    /// the suspended state, or finishes when nothing is suspended.
    fn reduce(&mut self, operator: Operator) -> CompileResult<()> {
        let second = self.operands.try_pop(0.0);
        let first = self.operands.try_pop(0.0);
        let value = match operator {
            Operator::Sum => first + second,
            Operator::Divide => {
                if second == 0.0 {
                    let index = self.index.saturating_sub(self.returns.size() * 2);
                    return Err(self.fail_at(EXPECTED_NONZERO, index));
                }
                first / second
            }
        };
        trace!("{}({first}, {second}) -> {value}", operator.letter());
        self.operands.push(value)?;
        let resume = self.returns.try_pop(State::Final);
        self.transition(resume)
    }

    /// Saves `current` on the return-state stack and enters the nested
    /// operator state.
    fn suspend(&mut self, current: State, nested: Operator) -> CompileResult<()> {
        self.returns.push(current)?;
        self.transition(State::Operator(nested))
    }

    fn current(&self) -> Option<char> {
        self.letters.get(self.index).copied()
    }

    /// Consumes the current character without changing state.
    fn skip(&mut self) -> CompileResult<()> {
        self.index += 1;
        Ok(())
    }

    /// Changes state, consuming the current character.
    fn transition(&mut self, next: State) -> CompileResult<()> {
        self.state = next;
        self.index += 1;
        Ok(())
    }

    fn fail(&self, expected: &str) -> CompileError {
        self.fail_at(expected, self.index)
    }

    fn fail_at(&self, expected: &str, index: usize) -> CompileError {
        NotationError::new(expected, self.current(), index, self.line).into()
    }
}

fn digit_value(digit: char) -> f64 {
    f64::from(digit as u8 - b'0')
}
