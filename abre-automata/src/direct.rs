//! Direct DFA construction from the augmented syntax tree, without an NFA.

use crate::{
    nfa::{Automaton, StateSet},
    subset::explore,
    syntax_tree::{SyntaxTree, START},
    CompileResult,
};

/// Builds DFAs straight from postfix expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder {
    size_limit: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of leaf positions and of DFA states
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn build(&self, postfix: &[char]) -> CompileResult<Automaton> {
        let tree = SyntaxTree::augmented(postfix, self.size_limit)?;
        self.build_from_tree(&tree)
    }

    /// DFA states are sets of positions. From a set, the successor on `c` is
    /// the union of nextpos over its positions holding `c`; a set accepts if
    /// it holds the end marker.
    pub fn build_from_tree(&self, tree: &SyntaxTree) -> CompileResult<Automaton> {
        let start = match tree.nextpos(START) {
            set if set.is_empty() => StateSet::from([START]),
            set => set.clone(),
        };
        let end = tree.end_marker();
        let (dfa, _) = explore(
            start,
            self.size_limit,
            |set, c| {
                set.iter()
                    .filter(|&&p| tree.symbol(p) == Some(c))
                    .flat_map(|&p| tree.nextpos(p).iter().copied())
                    .collect()
            },
            |set| set.contains(&end),
        )?;
        debug!("direct construction: {} DFA states", dfa.len());
        Ok(dfa)
    }
}

/// Direct construction with no size limit
pub fn postfix_to_dfa(postfix: &[char]) -> CompileResult<Automaton> {
    Builder::new().build(postfix)
}
