//! Subset construction.
//!
//! DFA states are discovered breadth-first from the start set. A state ID is
//! handed out the moment its set is first seen, so the numbering depends only
//! on the automaton and the order of [`ALPHABET`], never on hashing.

use std::collections::{HashMap, VecDeque};

use crate::{
    nfa::{Automaton, AutomatonBuilder, Kind, Label, StateId, StateSet},
    CompileResult, ALPHABET,
};

/// Converts automata to DFAs by subset construction
#[derive(Debug, Clone, Copy, Default)]
pub struct Determinizer {
    size_limit: Option<usize>,
}

impl Determinizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of DFA states
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    /// Build the DFA for `nfa`. Any automaton is accepted; a deterministic
    /// one comes back with the same structure, renumbered breadth-first.
    pub fn build(&self, nfa: &Automaton) -> CompileResult<Automaton> {
        let start = nfa.closure(nfa.start());
        let (dfa, _) = explore(
            start,
            self.size_limit,
            |set, c| nfa.move_on(set, c),
            |set| nfa.is_accepting(set),
        )?;
        debug!(
            "subset construction: {} NFA states -> {} DFA states",
            nfa.len(),
            dfa.len()
        );
        Ok(dfa)
    }
}

/// Subset construction with no size limit
pub fn nfa_to_dfa(nfa: &Automaton) -> CompileResult<Automaton> {
    Determinizer::new().build(nfa)
}

/// The FIFO worklist shared by subset and direct construction.
///
/// `start` becomes DFA state 0. `transition` maps a set and a symbol to the
/// next set, where an empty result means "no transition". Returns the DFA and
/// the set behind each of its states, indexed by state ID.
pub(crate) fn explore<T, A>(
    start: StateSet,
    size_limit: Option<usize>,
    mut transition: T,
    mut accepting: A,
) -> CompileResult<(Automaton, Vec<StateSet>)>
where
    T: FnMut(&StateSet, char) -> StateSet,
    A: FnMut(&StateSet) -> bool,
{
    let mut builder = AutomatonBuilder::new(size_limit);
    let mut ids: HashMap<StateSet, StateId> = HashMap::new();
    let mut subsets: Vec<StateSet> = Vec::new();
    let mut queue: VecDeque<StateId> = VecDeque::new();

    let id = builder.add_state()?;
    ids.insert(start.clone(), id);
    subsets.push(start);
    queue.push_back(id);

    while let Some(from) = queue.pop_front() {
        for (slot, c) in ALPHABET.into_iter().enumerate() {
            let next = transition(&subsets[from], c);
            if next.is_empty() {
                continue;
            }
            let to = match ids.get(&next) {
                Some(&to) => to,
                None => {
                    let to = builder.add_state()?;
                    trace!("DFA state {} = {:?}", to, next);
                    ids.insert(next.clone(), to);
                    subsets.push(next);
                    queue.push_back(to);
                    to
                }
            };
            builder.connect_slot(from, slot, Label::Symbol(c), to);
        }
    }

    let mut accepting_ids = StateSet::new();
    for (id, set) in subsets.iter().enumerate() {
        if accepting(set) {
            accepting_ids.insert(id);
        }
    }
    let dfa = builder.build(0, accepting_ids, Kind::Deterministic)?;
    Ok((dfa, subsets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{postfix::to_postfix, Compiler, CompileError, Matcher};

    fn thompson(infix: &str) -> Automaton {
        crate::init_logger();
        Compiler::new().compile(&to_postfix(infix).unwrap()).unwrap()
    }

    fn dfa(infix: &str) -> Automaton {
        nfa_to_dfa(&thompson(infix)).unwrap()
    }

    #[test]
    fn test_alternation() {
        let dfa = dfa("a|b");
        assert!(dfa.is_deterministic());
        assert_eq!(dfa.len(), 3);
        assert_eq!(dfa.start(), 0);
        assert_eq!(dfa.next_state(0, 'a'), Some(1));
        assert_eq!(dfa.next_state(0, 'b'), Some(2));
        assert_eq!(dfa.accepting(), &StateSet::from([1, 2]));

        let m = Matcher::new(&dfa);
        assert!(m.is_match("a"));
        assert!(m.is_match("b"));
        assert!(!m.is_match("ab"));
        assert!(!m.is_match(""));
    }

    #[test]
    fn test_star_after_literal() {
        let dfa = dfa("a.b*");
        let m = Matcher::new(&dfa);
        for s in ["a", "ab", "abb"] {
            assert!(m.is_match(s), "{}", s);
        }
        for s in ["b", "ba", ""] {
            assert!(!m.is_match(s), "{}", s);
        }
    }

    #[test]
    fn test_missing_transitions_are_absent() {
        let dfa = dfa("a.b");
        assert_eq!(dfa.len(), 3);
        assert_eq!(dfa.next_state(0, 'b'), None);
        assert_eq!(dfa.next_state(1, 'a'), None);
        assert_eq!(dfa.next_state(2, 'a'), None);
        assert_eq!(dfa.next_state(2, 'b'), None);
    }

    #[test]
    fn test_subsets_are_closed() {
        let nfa = thompson("(a|b)*.a");
        let start = nfa.closure(nfa.start());
        let (_, subsets) = explore(
            start,
            None,
            |set, c| nfa.move_on(set, c),
            |set| nfa.is_accepting(set),
        )
        .unwrap();
        for set in &subsets {
            assert_eq!(&nfa.epsilon_closure(set), set);
        }
    }

    #[test]
    fn test_numbering_is_breadth_first() {
        // start -a-> 1, start -b-> 2, so 'a' successors are numbered first
        let dfa = dfa("(a.a)|(b.b)");
        assert_eq!(dfa.next_state(0, 'a'), Some(1));
        assert_eq!(dfa.next_state(0, 'b'), Some(2));
        assert_eq!(dfa.next_state(1, 'a'), Some(3));
        assert_eq!(dfa.next_state(2, 'b'), Some(4));
        assert_eq!(dfa.accepting(), &StateSet::from([3, 4]));
    }

    #[test]
    fn test_repeated_runs_agree() {
        let nfa = thompson("(a|b)*.a.b+");
        let first = nfa_to_dfa(&nfa).unwrap();
        for _ in 0..5 {
            assert_eq!(nfa_to_dfa(&nfa).unwrap(), first);
        }
    }

    #[test]
    fn test_dfa_is_a_fixpoint() {
        let first = dfa("(a|b)*.a.b+");
        let second = nfa_to_dfa(&first).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_size_limit() {
        let nfa = thompson("(a|b)*.a.(a|b).(a|b)");
        assert_eq!(
            Determinizer::new().size_limit(Some(2)).build(&nfa),
            Err(CompileError::TooComplex)
        );
    }
}
