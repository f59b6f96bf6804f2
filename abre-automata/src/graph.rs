//! Read-only graph view of an automaton for renderers.

use crate::nfa::{Automaton, Label, StateId};

/// A state as seen by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: StateId,
    pub initial: bool,
    pub accepting: bool,
}

impl Node {
    /// Display label, with the initial state marked by an arrow
    pub fn label(&self) -> String {
        if self.initial {
            format!("→{}", self.id)
        } else {
            self.id.to_string()
        }
    }
}

/// A directed labeled edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: StateId,
    pub to: StateId,
    pub label: Label,
}

/// Every state and every present transition of an automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(automaton: &Automaton) -> Self {
        let nodes = automaton
            .states()
            .iter()
            .enumerate()
            .map(|(id, state)| Node {
                id,
                initial: id == automaton.start(),
                accepting: state.accepting,
            })
            .collect();
        let edges = automaton
            .states()
            .iter()
            .enumerate()
            .flat_map(|(from, state)| {
                state.edges().map(move |t| Edge {
                    from,
                    to: t.target,
                    label: t.label,
                })
            })
            .collect();
        Graph { nodes, edges }
    }

    /// Render as a Graphviz digraph. Accepting states are double circles and
    /// an invisible node points at the initial state.
    pub fn dot(&self) -> String {
        let mut dot = String::from("digraph G {\nrankdir=LR;\nempty [label = \"\" shape = plaintext];\n");
        for node in &self.nodes {
            let shape = if node.accepting { "doublecircle" } else { "circle" };
            dot.push_str(&format!(
                "s{} [label = \"{}\" shape = {}];\n",
                node.id,
                node.label(),
                shape
            ));
        }
        for node in self.nodes.iter().filter(|n| n.initial) {
            dot.push_str(&format!("empty -> s{} [label = \"start\"];\n", node.id));
        }
        for edge in &self.edges {
            dot.push_str(&format!(
                "s{} -> s{} [label = \"{}\"];\n",
                edge.from, edge.to, edge.label
            ));
        }
        dot.push('}');
        dot
    }
}

impl From<&Automaton> for Graph {
    fn from(automaton: &Automaton) -> Self {
        Graph::new(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{postfix::to_postfix, postfix_to_dfa, Compiler};

    #[test]
    fn test_nfa_view() {
        let nfa = Compiler::new().compile(&to_postfix("a.b").unwrap()).unwrap();
        let graph = Graph::new(&nfa);
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.nodes[0].label(), "→0");
        assert_eq!(graph.nodes[3].label(), "3");
        assert!(graph.nodes[3].accepting);
        assert_eq!(
            graph.edges,
            vec![
                Edge { from: 0, to: 1, label: Label::Symbol('a') },
                Edge { from: 1, to: 2, label: Label::Epsilon },
                Edge { from: 2, to: 3, label: Label::Symbol('b') },
            ]
        );
    }

    #[test]
    fn test_dot() {
        let dfa = postfix_to_dfa(&to_postfix("a*").unwrap()).unwrap();
        let dot = Graph::from(&dfa).dot();
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("s0 [label = \"→0\" shape = doublecircle];"));
        assert!(dot.contains("empty -> s0 [label = \"start\"];"));
        assert!(dot.contains("s0 -> s0 [label = \"a\"];"));
        assert!(dot.ends_with('}'));
        assert_eq!(dot.lines().count(), 7);
    }

    #[test]
    fn test_epsilon_label() {
        let nfa = Compiler::new().compile(&to_postfix("a*").unwrap()).unwrap();
        let dot = Graph::new(&nfa).dot();
        assert!(dot.contains("[label = \"ε\"]"));
    }
}
