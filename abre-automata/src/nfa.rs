use std::collections::BTreeSet;

use crate::{CompileError, CompileResult, ALPHABET};

/// A state ID in an automaton; an index into its state arena
pub type StateId = usize;

/// A set of state IDs (or syntax tree positions).
///
/// Kept ordered so that two sets built in different orders compare and hash
/// the same, which is what subset construction keys its DFA states on.
pub type StateSet = BTreeSet<StateId>;

/// The symbol a transition consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Taken without consuming input
    Epsilon,
    /// Taken on exactly this input symbol
    Symbol(char),
}

impl Label {
    /// Returns true if this label consumes `c`
    pub fn matches(&self, c: char) -> bool {
        *self == Label::Symbol(c)
    }

    pub fn is_epsilon(&self) -> bool {
        *self == Label::Epsilon
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "{}", crate::EPSILON),
            Label::Symbol(c) => write!(f, "{}", c),
        }
    }
}

/// A labeled edge to another state of the same automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub label: Label,
    pub target: StateId,
}

/// A single automaton node with at most two outgoing transitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Outgoing transitions. An empty slot means no transition.
    pub transitions: [Option<Transition>; 2],
    /// Whether reaching this state accepts
    pub accepting: bool,
}

impl State {
    /// Iterate over the transitions present on this state
    pub fn edges(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().flatten()
    }

    /// Targets of every transition consuming `c`
    pub fn targets_on(&self, c: char) -> impl Iterator<Item = StateId> + '_ {
        self.edges()
            .filter(move |t| t.label.matches(c))
            .map(|t| t.target)
    }

    fn epsilon_targets(&self) -> impl Iterator<Item = StateId> + '_ {
        self.edges()
            .filter(|t| t.label.is_epsilon())
            .map(|t| t.target)
    }
}

/// Whether an automaton is deterministic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Deterministic,
    NonDeterministic,
}

/// A finite automaton over `{a, b}`.
///
/// The automaton owns every state in `states`; transitions, the start state
/// and the accepting set all refer to indices into that arena. Automata are
/// created complete by a builder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
    accepting: StateSet,
    kind: Kind,
}

impl Automaton {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The initial state
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The acceptance states, in ascending order
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_deterministic(&self) -> bool {
        self.kind == Kind::Deterministic
    }

    /// Check if any state in the set is accepting
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        states.iter().any(|id| self.accepting.contains(id))
    }

    /// Epsilon closure of a single state: every state reachable from `id`
    /// through zero or more epsilon transitions.
    pub fn closure(&self, id: StateId) -> StateSet {
        self.epsilon_closure(&StateSet::from([id]))
    }

    /// Get epsilon closure of a set of states.
    ///
    /// Iterative; a state is pushed on the work stack only the first time it
    /// enters the closure, so epsilon cycles terminate.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(id) = stack.pop() {
            for next in self.states[id].epsilon_targets() {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// States directly reachable from `states` on `c`, without closure
    pub fn step(&self, states: &StateSet, c: char) -> StateSet {
        states
            .iter()
            .flat_map(|&id| self.states[id].targets_on(c))
            .collect()
    }

    /// The subset construction `move`: the epsilon closure of every state
    /// reachable from `states` on `c`.
    pub fn move_on(&self, states: &StateSet, c: char) -> StateSet {
        self.epsilon_closure(&self.step(states, c))
    }

    /// The single successor of `id` on `c`, the first one if there are
    /// several.
    pub fn next_state(&self, id: StateId, c: char) -> Option<StateId> {
        self.states[id].targets_on(c).next()
    }
}

/// Mutable arena used by the builders while an automaton is assembled.
#[derive(Debug, Clone)]
pub(crate) struct AutomatonBuilder {
    states: Vec<State>,
    size_limit: Option<usize>,
}

impl AutomatonBuilder {
    pub(crate) fn new(size_limit: Option<usize>) -> Self {
        Self {
            states: Vec::new(),
            size_limit,
        }
    }

    /// Add a new state and return its ID
    pub(crate) fn add_state(&mut self) -> CompileResult<StateId> {
        let id = self.states.len();
        if let Some(limit) = self.size_limit {
            if id >= limit {
                return Err(CompileError::TooComplex);
            }
        }
        self.states.push(State::default());
        Ok(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Add a transition into the first free slot of `from`
    pub(crate) fn connect(&mut self, from: StateId, label: Label, to: StateId) -> CompileResult<()> {
        let state = self
            .states
            .get_mut(from)
            .ok_or_else(|| CompileError::Internal(format!("no state {}", from)))?;
        let slot = state
            .transitions
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or_else(|| {
                CompileError::Internal(format!("state {} already has two transitions", from))
            })?;
        *slot = Some(Transition { label, target: to });
        Ok(())
    }

    /// Put a transition into a specific slot of `from`
    pub(crate) fn connect_slot(&mut self, from: StateId, slot: usize, label: Label, to: StateId) {
        self.states[from].transitions[slot] = Some(Transition { label, target: to });
    }

    pub(crate) fn build(
        mut self,
        start: StateId,
        accepting: StateSet,
        kind: Kind,
    ) -> CompileResult<Automaton> {
        let len = self.states.len();
        let dangling = accepting.iter().copied().chain(std::iter::once(start)).chain(
            self.states
                .iter()
                .flat_map(|s| s.edges().map(|t| t.target)),
        );
        for id in dangling {
            if id >= len {
                return Err(CompileError::Internal(format!("state {} is not in the automaton", id)));
            }
        }
        if kind == Kind::Deterministic {
            for (id, state) in self.states.iter().enumerate() {
                for c in ALPHABET {
                    if state.targets_on(c).count() > 1 {
                        return Err(CompileError::Internal(format!(
                            "state {} has two transitions on '{}'",
                            id, c
                        )));
                    }
                }
                if state.edges().any(|t| t.label.is_epsilon()) {
                    return Err(CompileError::Internal(format!(
                        "state {} has an epsilon transition",
                        id
                    )));
                }
            }
        }
        for &id in &accepting {
            self.states[id].accepting = true;
        }
        Ok(Automaton {
            states: self.states,
            start,
            accepting,
            kind,
        })
    }
}
