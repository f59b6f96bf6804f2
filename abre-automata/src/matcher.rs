use crate::nfa::{Automaton, StateSet};

/// A matcher that simulates an automaton, deterministic or not, over input
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

/// The outcome of splitting an input into tokens.
///
/// A failed tokenization is an ordinary result: `tokens` holds what was
/// recognized before the failure and `residue` the input that could not be
/// matched from there on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    pub matched: bool,
    pub tokens: Vec<String>,
    /// Unmatched remainder, empty on success
    pub residue: String,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given automaton
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Check if the entire input is accepted
    pub fn is_match(&self, input: &str) -> bool {
        let mut current = self.initial();
        for c in input.chars() {
            current = self.advance(&current, c);
            if current.is_empty() {
                return false;
            }
        }
        self.automaton.is_accepting(&current)
    }

    /// Split `input` into a sequence of greedy longest matches.
    ///
    /// From the start of the unconsumed input, the automaton runs until no
    /// transition remains or the input ends, remembering the longest
    /// non-empty prefix that ended in an accepting configuration. That prefix
    /// becomes the next token. If no such prefix exists the scan stops and the
    /// rest of the input is returned as residue.
    pub fn tokenize(&self, input: &str) -> Tokenization {
        let chars: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < chars.len() {
            match self.longest_match(&chars, position) {
                Some(end) => {
                    let token: String = chars[position..end].iter().collect();
                    trace!("token {:?} at {}", token, position);
                    tokens.push(token);
                    position = end;
                }
                None => {
                    let residue: String = chars[position..].iter().collect();
                    trace!("no token at {}, residue {:?}", position, residue);
                    return Tokenization {
                        matched: false,
                        tokens,
                        residue,
                    };
                }
            }
        }

        // Empty input only succeeds if the automaton accepts the empty string.
        let matched = !tokens.is_empty() || self.automaton.is_accepting(&self.initial());
        Tokenization {
            matched,
            tokens,
            residue: String::new(),
        }
    }

    /// End of the longest non-empty accepted prefix of `chars[start..]`
    fn longest_match(&self, chars: &[char], start: usize) -> Option<usize> {
        let mut current = self.initial();
        let mut last_accept = None;

        for (offset, &c) in chars[start..].iter().enumerate() {
            current = self.advance(&current, c);
            if current.is_empty() {
                break;
            }
            if self.automaton.is_accepting(&current) {
                last_accept = Some(start + offset + 1);
            }
        }

        last_accept
    }

    /// The epsilon-closed starting configuration
    fn initial(&self) -> StateSet {
        self.automaton.closure(self.automaton.start())
    }

    /// Step the live configuration over one symbol
    fn advance(&self, current: &StateSet, c: char) -> StateSet {
        if self.automaton.is_deterministic() {
            current
                .iter()
                .filter_map(|&id| self.automaton.next_state(id, c))
                .collect()
        } else {
            self.automaton.move_on(current, c)
        }
    }
}
