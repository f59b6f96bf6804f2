//! Checks applied before a regex or an input string reaches the automata.

use crate::Error;

/// Characters a regex may contain
pub const VALID_SYMBOLS: [char; 8] = ['.', '+', '*', '|', 'a', 'b', '(', ')'];

/// Adjacent pairs that are never valid: literals must be joined by an
/// explicit `.`, a closure may not be followed directly by a literal, and
/// binary operators may not repeat.
pub const INVALID_PAIRS: [&str; 10] = ["ab", "ba", "*a", "*b", "+a", "+b", "bb", "aa", "..", "||"];

/// Validate a regex: it must be non-empty, then it is checked against the
/// symbol whitelist, the forbidden pairs and the parenthesis count, in that
/// order.
pub fn validate_regex(regex: &str) -> Result<(), Error> {
    if regex.is_empty() {
        return Err(Error::EmptyExpression);
    }

    if let Some((position, symbol)) = regex
        .chars()
        .enumerate()
        .find(|(_, c)| !VALID_SYMBOLS.contains(c))
    {
        return Err(Error::InvalidSymbol { position, symbol });
    }

    if let Some(pair) = INVALID_PAIRS.iter().find(|pair| regex.contains(*pair)) {
        return Err(Error::InvalidConstruction(pair.to_string()));
    }

    let opened = regex.chars().filter(|&c| c == '(').count();
    let closed = regex.chars().filter(|&c| c == ')').count();
    if opened != closed {
        return Err(Error::UnbalancedParentheses);
    }

    Ok(())
}

/// Validate a simulation input: only `a` and `b`.
pub fn validate_input(input: &str) -> Result<(), Error> {
    match input
        .chars()
        .enumerate()
        .find(|(_, c)| !abre_automata::is_literal(*c))
    {
        Some((position, symbol)) => Err(Error::InvalidInput { position, symbol }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        for regex in ["a", "a.b", "(a|b)*.a.b.b", "a+|b*", "((a))"] {
            assert_eq!(validate_regex(regex), Ok(()), "{}", regex);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_regex(""), Err(Error::EmptyExpression));
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            validate_regex("a.c"),
            Err(Error::InvalidSymbol { position: 2, symbol: 'c' })
        );
        assert_eq!(
            validate_regex("a b"),
            Err(Error::InvalidSymbol { position: 1, symbol: ' ' })
        );
    }

    #[test]
    fn test_invalid_pairs() {
        assert_eq!(
            validate_regex("ab"),
            Err(Error::InvalidConstruction("ab".to_string()))
        );
        assert_eq!(
            validate_regex("a*b"),
            Err(Error::InvalidConstruction("*b".to_string()))
        );
        assert_eq!(
            validate_regex("a||b"),
            Err(Error::InvalidConstruction("||".to_string()))
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(validate_regex("(a|b"), Err(Error::UnbalancedParentheses));
        assert_eq!(validate_regex("a)"), Err(Error::UnbalancedParentheses));
    }

    #[test]
    fn test_input() {
        assert_eq!(validate_input(""), Ok(()));
        assert_eq!(validate_input("abba"), Ok(()));
        assert_eq!(
            validate_input("abc"),
            Err(Error::InvalidInput { position: 2, symbol: 'c' })
        );
    }
}
