use abre_automata::CompileError;

/// Errors reported while building a [`Pattern`](crate::Pattern) or checking
/// its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The regex has no symbols at all
    EmptyExpression,
    /// A character outside `a b . + * | ( )` in the regex
    InvalidSymbol { position: usize, symbol: char },
    /// A forbidden pair of adjacent symbols, such as `ab` without a `.`
    InvalidConstruction(String),
    /// The regex opens and closes a different number of parentheses
    UnbalancedParentheses,
    /// A simulation input character other than `a` or `b`
    InvalidInput { position: usize, symbol: char },
    /// Automaton construction failed
    Compile(CompileError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyExpression => write!(f, "the regular expression is empty"),
            Error::InvalidSymbol { position, symbol } => write!(
                f,
                "invalid character {:?} at position {} of the regular expression",
                symbol, position
            ),
            Error::InvalidConstruction(pair) => write!(
                f,
                "invalid construction {:?}, concatenation must be written with '.'",
                pair
            ),
            Error::UnbalancedParentheses => {
                write!(f, "opening and closing parentheses do not match")
            }
            Error::InvalidInput { position, symbol } => write!(
                f,
                "invalid input character {:?} at position {}, only 'a' and 'b' are allowed",
                symbol, position
            ),
            Error::Compile(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Self {
        Error::Compile(err)
    }
}
