//! Finite automata for regular expressions over the alphabet `{a, b}`.
//!
//! Three classic constructions are provided:
//!
//! - Thompson's construction turns a postfix expression into an NFA
//!   ([`Compiler`]).
//! - Subset construction turns any automaton into a DFA ([`nfa_to_dfa`]).
//! - Direct construction builds a DFA from an augmented syntax tree using
//!   nullable/firstpos/lastpos/nextpos attributes ([`postfix_to_dfa`]).
//!
//! Every automaton is an arena of [`State`]s addressed by [`StateId`]; edges
//! are indices into that same arena. A [`Matcher`] simulates either kind of
//! automaton, and [`Graph`] is the read-only view handed to renderers.
//!
//! Infix expressions use explicit concatenation (`.`), alternation (`|`),
//! Kleene star (`*`), positive closure (`+`) and parentheses. `ε` denotes the
//! empty string.

#[macro_use]
mod macros;

pub mod compiler;
pub mod direct;
pub mod graph;
pub mod matcher;
pub mod nfa;
pub mod postfix;
pub mod subset;
pub mod syntax_tree;

pub use compiler::Compiler;
pub use direct::postfix_to_dfa;
pub use graph::{Edge, Graph, Node};
pub use matcher::{Matcher, Tokenization};
pub use nfa::{Automaton, Kind, Label, State, StateId, StateSet, Transition};
pub use postfix::to_postfix;
pub use subset::nfa_to_dfa;
pub use syntax_tree::SyntaxTree;

/// The input symbols every automaton is built over, in transition slot order.
pub const ALPHABET: [char; 2] = ['a', 'b'];

/// The symbol denoting the empty string.
pub const EPSILON: char = 'ε';

/// The end marker appended to the postfix expression by direct construction.
pub const END_MARKER: char = '#';

/// The result of building an automaton.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur while building an automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The automaton would exceed the configured state limit
    TooComplex,
    /// A symbol that is neither a literal, `ε` nor an operator
    UnsupportedSymbol(char),
    /// Parentheses in the infix expression do not pair up
    UnbalancedParenthesis,
    /// An operator did not find enough operands
    MissingOperand(char),
    /// Internal construction error
    Internal(String),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::TooComplex => write!(f, "regex pattern is too complex"),
            CompileError::UnsupportedSymbol(c) => write!(f, "unsupported symbol: {:?}", c),
            CompileError::UnbalancedParenthesis => write!(f, "unbalanced parenthesis"),
            CompileError::MissingOperand(op) => write!(f, "missing operand for '{}'", op),
            CompileError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

/// Returns true if `c` is a literal symbol of the alphabet.
pub fn is_literal(c: char) -> bool {
    ALPHABET.contains(&c)
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
