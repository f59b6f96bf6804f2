/*!
Regular expressions over the alphabet `{a, b}`, compiled to finite automata.

A regex uses the literals `a` and `b`, explicit concatenation `.`,
alternation `|`, Kleene star `*`, positive closure `+` and parentheses. A
[`Pattern`] validates it, builds an automaton with the [`Construction`]
chosen in its [`Config`], and can then test or tokenize input strings.

```
use abre::Pattern;

let pattern = Pattern::new("a.b")?;
let tokens = pattern.tokenize("abab")?;
assert!(tokens.matched);
assert_eq!(tokens.tokens, vec!["ab", "ab"]);

let tokens = pattern.tokenize("aba")?;
assert!(!tokens.matched);
assert_eq!(tokens.residue, "a");
# Ok::<(), abre::Error>(())
```

The construction algorithms themselves live in the `abre-automata` crate and
are re-exported as [`automata`].

# Crate features

* **logging** - Emit construction and tokenization events through the `log`
  crate.
*/

pub use abre_automata as automata;
pub use abre_automata::{Automaton, CompileError, Graph, Tokenization};

pub use crate::config::{Config, Construction};
pub use crate::error::Error;
pub use crate::syntax::{validate_input, validate_regex};

use abre_automata::{compiler::Compiler, direct, subset::Determinizer, to_postfix, Matcher};

#[macro_use]
mod macros;

mod config;
mod error;
mod syntax;

/// A compiled regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: String,
    postfix: Vec<char>,
    construction: Construction,
    automaton: Automaton,
}

impl Pattern {
    /// Compile `regex` with the default configuration.
    pub fn new(regex: &str) -> Result<Pattern, Error> {
        Builder::new().build(regex)
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The regex this pattern was built from
    pub fn as_str(&self) -> &str {
        &self.regex
    }

    /// The regex in postfix form
    pub fn postfix(&self) -> &[char] {
        &self.postfix
    }

    pub fn construction(&self) -> Construction {
        self.construction
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Graph view of the automaton for rendering
    pub fn graph(&self) -> Graph {
        Graph::new(&self.automaton)
    }

    /// Returns true if the whole of `input` is in the pattern's language.
    pub fn is_match(&self, input: &str) -> Result<bool, Error> {
        validate_input(input)?;
        Ok(Matcher::new(&self.automaton).is_match(input))
    }

    /// Split `input` into greedy longest-match tokens.
    ///
    /// A tokenization that gets stuck is not an error; see
    /// [`Tokenization::matched`] and [`Tokenization::residue`]. Only input
    /// outside `{a, b}` is rejected.
    pub fn tokenize(&self, input: &str) -> Result<Tokenization, Error> {
        validate_input(input)?;
        let tokenization = Matcher::new(&self.automaton).tokenize(input);
        debug!(
            "tokenized {:?} with {:?}: matched = {}, {} tokens",
            input,
            self.regex,
            tokenization.matched,
            tokenization.tokens.len()
        );
        Ok(tokenization)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.regex)
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Pattern, Error> {
        Pattern::new(s)
    }
}

/// Builds [`Pattern`]s from a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { config: Config::default() }
    }

    pub fn configure(&mut self, config: Config) -> &mut Builder {
        self.config = config;
        self
    }

    pub fn construction(&mut self, construction: Construction) -> &mut Builder {
        self.config = self.config.construction(construction);
        self
    }

    pub fn size_limit(&mut self, limit: Option<usize>) -> &mut Builder {
        self.config = self.config.size_limit(limit);
        self
    }

    pub fn build(&self, regex: &str) -> Result<Pattern, Error> {
        if self.config.get_validate() {
            validate_regex(regex)?;
        }
        let postfix = to_postfix(regex)?;
        let limit = self.config.get_size_limit();
        let automaton = match self.config.get_construction() {
            Construction::Thompson => Compiler::new().size_limit(limit).compile(&postfix)?,
            Construction::Subset => {
                let nfa = Compiler::new().size_limit(limit).compile(&postfix)?;
                Determinizer::new().size_limit(limit).build(&nfa)?
            }
            Construction::Direct => direct::Builder::new().size_limit(limit).build(&postfix)?,
        };
        debug!(
            "built {:?} automaton with {} states for {:?}",
            self.config.get_construction(),
            automaton.len(),
            regex
        );
        Ok(Pattern {
            regex: regex.to_string(),
            postfix,
            construction: self.config.get_construction(),
            automaton,
        })
    }
}
