//! Infix to postfix conversion with the shunting-yard algorithm.

use crate::{CompileError, CompileResult};

/// Binding strength of an operator, or `None` if `c` is not one.
///
/// `*` binds tightest, then `+`, then concatenation `.`, then alternation `|`.
pub fn precedence(c: char) -> Option<u8> {
    match c {
        '*' => Some(4),
        '+' => Some(3),
        '.' => Some(2),
        '|' => Some(1),
        _ => None,
    }
}

/// Returns true for the four regex operators.
pub fn is_operator(c: char) -> bool {
    precedence(c).is_some()
}

/// Convert an infix expression with explicit concatenation into postfix.
///
/// Operators of higher or equal precedence already on the stack are popped
/// before a new one is pushed, so all binary operators associate to the
/// left. Parentheses only group and never reach the output. Any other symbol
/// is copied through as an operand; whether it is a legal one is for the
/// automaton builders to decide.
pub fn to_postfix(infix: &str) -> CompileResult<Vec<char>> {
    let mut postfix = Vec::with_capacity(infix.len());
    let mut stack: Vec<char> = Vec::new();

    for c in infix.chars() {
        match c {
            '(' => stack.push(c),
            ')' => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => postfix.push(op),
                    None => return Err(CompileError::UnbalancedParenthesis),
                }
            },
            _ => match precedence(c) {
                Some(prec) => {
                    while let Some(&top) = stack.last() {
                        match precedence(top) {
                            Some(top_prec) if prec <= top_prec => {
                                postfix.push(top);
                                stack.pop();
                            }
                            _ => break,
                        }
                    }
                    stack.push(c);
                }
                None => postfix.push(c),
            },
        }
    }

    while let Some(op) = stack.pop() {
        if op == '(' {
            return Err(CompileError::UnbalancedParenthesis);
        }
        postfix.push(op);
    }

    debug!("postfix of {:?} is {:?}", infix, postfix.iter().collect::<String>());
    Ok(postfix)
}
