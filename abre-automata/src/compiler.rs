use crate::{
    is_literal,
    nfa::{Automaton, AutomatonBuilder, Kind, Label, StateId, StateSet},
    CompileError, CompileResult, EPSILON,
};

/// Fragment of an NFA with a single entry and a single accepting exit.
///
/// The exit state of every fragment has no outgoing transitions until the
/// fragment is wired into a larger one.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/// Compiler that converts a postfix expression to a Thompson NFA.
///
/// Each compiler is its own construction context (fragment stack plus state
/// arena), so separate compilations never share state.
#[derive(Debug)]
pub struct Compiler {
    nfa: AutomatonBuilder,
    fragments: Vec<Fragment>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self {
            nfa: AutomatonBuilder::new(None),
            fragments: Vec::new(),
        }
    }

    /// Fail with [`CompileError::TooComplex`] once the NFA would need more
    /// than `limit` states.
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.nfa = AutomatonBuilder::new(limit);
        self
    }

    /// Compile a postfix expression to a Thompson NFA
    pub fn compile(mut self, postfix: &[char]) -> CompileResult<Automaton> {
        for &c in postfix {
            let fragment = match c {
                '*' => self.compile_star()?,
                '+' => self.compile_plus()?,
                '.' => self.compile_concat()?,
                '|' => self.compile_alternation()?,
                c if is_literal(c) => self.compile_literal(Label::Symbol(c))?,
                EPSILON => self.compile_literal(Label::Epsilon)?,
                c => return Err(CompileError::UnsupportedSymbol(c)),
            };
            self.fragments.push(fragment);
        }

        let fragment = match (self.fragments.pop(), self.fragments.is_empty()) {
            (Some(fragment), true) => fragment,
            (None, _) => return Err(CompileError::Internal("empty expression".to_string())),
            (Some(_), false) => {
                return Err(CompileError::Internal(format!(
                    "{} fragments left without an operator",
                    self.fragments.len() + 1
                )))
            }
        };

        debug!(
            "thompson NFA with {} states, start {}, accept {}",
            self.nfa.len(),
            fragment.start,
            fragment.end
        );
        self.nfa.build(
            fragment.start,
            StateSet::from([fragment.end]),
            Kind::NonDeterministic,
        )
    }

    fn pop(&mut self, op: char) -> CompileResult<Fragment> {
        self.fragments.pop().ok_or(CompileError::MissingOperand(op))
    }

    /// Two states joined by one transition
    fn compile_literal(&mut self, label: Label) -> CompileResult<Fragment> {
        let start = self.nfa.add_state()?;
        let end = self.nfa.add_state()?;
        self.nfa.connect(start, label, end)?;
        Ok(Fragment { start, end })
    }

    /// Kleene star: new entry can skip straight to the new exit, the old exit
    /// loops back or leaves.
    fn compile_star(&mut self) -> CompileResult<Fragment> {
        let inner = self.pop('*')?;
        let start = self.nfa.add_state()?;
        let end = self.nfa.add_state()?;
        self.nfa.connect(start, Label::Epsilon, inner.start)?;
        self.nfa.connect(start, Label::Epsilon, end)?;
        self.nfa.connect(inner.end, Label::Epsilon, inner.start)?;
        self.nfa.connect(inner.end, Label::Epsilon, end)?;
        Ok(Fragment { start, end })
    }

    /// Positive closure: like the star without the skip edge
    fn compile_plus(&mut self) -> CompileResult<Fragment> {
        let inner = self.pop('+')?;
        let start = self.nfa.add_state()?;
        let end = self.nfa.add_state()?;
        self.nfa.connect(start, Label::Epsilon, inner.start)?;
        self.nfa.connect(inner.end, Label::Epsilon, inner.start)?;
        self.nfa.connect(inner.end, Label::Epsilon, end)?;
        Ok(Fragment { start, end })
    }

    fn compile_concat(&mut self) -> CompileResult<Fragment> {
        let right = self.pop('.')?;
        let left = self.pop('.')?;
        self.nfa.connect(left.end, Label::Epsilon, right.start)?;
        Ok(Fragment {
            start: left.start,
            end: right.end,
        })
    }

    fn compile_alternation(&mut self) -> CompileResult<Fragment> {
        let right = self.pop('|')?;
        let left = self.pop('|')?;
        let start = self.nfa.add_state()?;
        let end = self.nfa.add_state()?;
        self.nfa.connect(start, Label::Epsilon, left.start)?;
        self.nfa.connect(start, Label::Epsilon, right.start)?;
        self.nfa.connect(left.end, Label::Epsilon, end)?;
        self.nfa.connect(right.end, Label::Epsilon, end)?;
        Ok(Fragment { start, end })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
