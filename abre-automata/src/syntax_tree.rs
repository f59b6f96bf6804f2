//! The augmented syntax tree used by direct DFA construction.
//!
//! Every leaf gets a position. Position 0 is reserved for a virtual start
//! leaf standing before the whole expression, so its nextpos is the root's
//! firstpos. Real leaves are numbered from 1 in postfix order and the end
//! marker `#` is always the last position.

use crate::{
    is_literal,
    nfa::StateSet,
    CompileError, CompileResult, END_MARKER, EPSILON,
};

/// A leaf position in the syntax tree
pub type Position = usize;

/// Index of a node in the tree arena
pub type NodeId = usize;

/// Position of the virtual start leaf
pub const START: Position = 0;

/// One postfix token turned into a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Literal, `ε`, `#` or operator
    pub symbol: char,
    pub nullable: bool,
    pub firstpos: StateSet,
    pub lastpos: StateSet,
    /// Left (or only) child and right child
    pub children: [Option<NodeId>; 2],
    /// The leaf position, `None` for operators
    pub position: Option<Position>,
}

/// What the DFA extraction keeps of a leaf: its symbol and nextpos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// `None` for the virtual start leaf
    pub symbol: Option<char>,
    pub nextpos: StateSet,
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
    leaves: Vec<Leaf>,
}

impl SyntaxTree {
    /// Build the tree for `postfix` followed by `# .`
    pub fn augmented(postfix: &[char], size_limit: Option<usize>) -> CompileResult<Self> {
        let augmented = postfix.iter().copied().chain([END_MARKER, '.']);
        let mut builder = TreeBuilder {
            nodes: Vec::new(),
            leaves: vec![Leaf {
                symbol: None,
                nextpos: StateSet::new(),
            }],
            stack: Vec::new(),
            size_limit,
        };
        for c in augmented {
            builder.push(c)?;
        }

        let root = match (builder.stack.pop(), builder.stack.is_empty()) {
            (Some(root), true) => root,
            _ => {
                return Err(CompileError::Internal(
                    "expression does not reduce to a single tree".to_string(),
                ))
            }
        };

        let mut leaves = builder.leaves;
        leaves[START].nextpos = builder.nodes[root].firstpos.clone();
        debug!(
            "syntax tree with {} nodes and {} positions",
            builder.nodes.len(),
            leaves.len()
        );
        Ok(SyntaxTree {
            nodes: builder.nodes,
            root,
            leaves,
        })
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All leaves indexed by position, the virtual start first
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn nextpos(&self, position: Position) -> &StateSet {
        &self.leaves[position].nextpos
    }

    pub fn symbol(&self, position: Position) -> Option<char> {
        self.leaves[position].symbol
    }

    /// Position of the `#` leaf
    pub fn end_marker(&self) -> Position {
        self.leaves.len() - 1
    }
}

struct TreeBuilder {
    nodes: Vec<Node>,
    leaves: Vec<Leaf>,
    stack: Vec<NodeId>,
    size_limit: Option<usize>,
}

impl TreeBuilder {
    fn push(&mut self, c: char) -> CompileResult<()> {
        let node = match c {
            '*' | '+' => {
                let child = self.pop(c)?;
                self.closure(c, child)
            }
            '.' | '|' => {
                let right = self.pop(c)?;
                let left = self.pop(c)?;
                if c == '.' {
                    self.concat(left, right)
                } else {
                    self.alternation(left, right)
                }
            }
            c if is_literal(c) || c == EPSILON || c == END_MARKER => self.leaf(c)?,
            c => return Err(CompileError::UnsupportedSymbol(c)),
        };
        self.nodes.push(node);
        self.stack.push(self.nodes.len() - 1);
        Ok(())
    }

    fn pop(&mut self, op: char) -> CompileResult<NodeId> {
        self.stack.pop().ok_or(CompileError::MissingOperand(op))
    }

    fn leaf(&mut self, c: char) -> CompileResult<Node> {
        let position = self.leaves.len();
        if let Some(limit) = self.size_limit {
            if position > limit {
                return Err(CompileError::TooComplex);
            }
        }
        self.leaves.push(Leaf {
            symbol: Some(c),
            nextpos: StateSet::new(),
        });
        let positions = if c == EPSILON {
            StateSet::new()
        } else {
            StateSet::from([position])
        };
        Ok(Node {
            symbol: c,
            nullable: c == EPSILON,
            firstpos: positions.clone(),
            lastpos: positions,
            children: [None, None],
            position: Some(position),
        })
    }

    /// `*` and `+`: every last position of the child can loop back to its
    /// first positions.
    fn closure(&mut self, op: char, child: NodeId) -> Node {
        let inner = &self.nodes[child];
        let firstpos = inner.firstpos.clone();
        let lastpos = inner.lastpos.clone();
        let nullable = op == '*' || inner.nullable;
        for &p in &lastpos {
            self.leaves[p].nextpos.extend(firstpos.iter().copied());
        }
        Node {
            symbol: op,
            nullable,
            firstpos,
            lastpos,
            children: [Some(child), None],
            position: None,
        }
    }

    fn alternation(&mut self, left: NodeId, right: NodeId) -> Node {
        let (l, r) = (&self.nodes[left], &self.nodes[right]);
        Node {
            symbol: '|',
            nullable: l.nullable || r.nullable,
            firstpos: l.firstpos.union(&r.firstpos).copied().collect(),
            lastpos: l.lastpos.union(&r.lastpos).copied().collect(),
            children: [Some(left), Some(right)],
            position: None,
        }
    }

    fn concat(&mut self, left: NodeId, right: NodeId) -> Node {
        let (l, r) = (&self.nodes[left], &self.nodes[right]);
        let nullable = l.nullable && r.nullable;
        // A nullable left operand exposes the right's first positions, and a
        // nullable right operand exposes the left's last positions.
        let firstpos = if l.nullable {
            l.firstpos.union(&r.firstpos).copied().collect()
        } else {
            l.firstpos.clone()
        };
        let lastpos = if r.nullable {
            l.lastpos.union(&r.lastpos).copied().collect()
        } else {
            r.lastpos.clone()
        };
        let follow = r.firstpos.clone();
        let tails = l.lastpos.clone();
        for p in tails {
            self.leaves[p].nextpos.extend(follow.iter().copied());
        }
        Node {
            symbol: '.',
            nullable,
            firstpos,
            lastpos,
            children: [Some(left), Some(right)],
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postfix::to_postfix;

    fn tree(infix: &str) -> SyntaxTree {
        crate::init_logger();
        SyntaxTree::augmented(&to_postfix(infix).unwrap(), None).unwrap()
    }

    fn set(positions: &[Position]) -> StateSet {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_concat_positions() {
        // a = 1, b = 2, # = 3
        let t = tree("a.b");
        assert_eq!(t.end_marker(), 3);
        assert_eq!(t.symbol(1), Some('a'));
        assert_eq!(t.symbol(3), Some(END_MARKER));
        assert_eq!(t.nextpos(START), &set(&[1]));
        assert_eq!(t.nextpos(1), &set(&[2]));
        assert_eq!(t.nextpos(2), &set(&[3]));
        assert!(t.nextpos(3).is_empty());
        assert!(!t.root().nullable);
    }

    #[test]
    fn test_dragon_book_example() {
        // (a|b)*.a.b.b with a = 1, b = 2, a = 3, b = 4, b = 5, # = 6
        let t = tree("(a|b)*.a.b.b");
        assert_eq!(t.root().firstpos, set(&[1, 2, 3]));
        assert_eq!(t.root().lastpos, set(&[6]));
        assert_eq!(t.nextpos(1), &set(&[1, 2, 3]));
        assert_eq!(t.nextpos(2), &set(&[1, 2, 3]));
        assert_eq!(t.nextpos(3), &set(&[4]));
        assert_eq!(t.nextpos(4), &set(&[5]));
        assert_eq!(t.nextpos(5), &set(&[6]));
        assert_eq!(t.nextpos(START), &set(&[1, 2, 3]));
    }

    #[test]
    fn test_nullable_right_operand() {
        // a.b* with a = 1, b = 2, # = 3
        let t = tree("a.b*");
        let concat = t.node(t.root().children[0].unwrap());
        assert_eq!(concat.symbol, '.');
        assert!(!concat.nullable);
        assert_eq!(concat.firstpos, set(&[1]));
        assert_eq!(concat.lastpos, set(&[1, 2]));
        assert_eq!(t.nextpos(START), &set(&[1]));
        assert_eq!(t.nextpos(1), &set(&[2, 3]));
        assert_eq!(t.nextpos(2), &set(&[2, 3]));
    }

    #[test]
    fn test_nullable_left_operand() {
        // b*.a with b = 1, a = 2, # = 3
        let t = tree("b*.a");
        let concat = t.node(t.root().children[0].unwrap());
        assert_eq!(concat.firstpos, set(&[1, 2]));
        assert_eq!(concat.lastpos, set(&[2]));
        assert_eq!(t.nextpos(START), &set(&[1, 2]));
        assert_eq!(t.nextpos(1), &set(&[1, 2]));
        assert_eq!(t.nextpos(2), &set(&[3]));
    }

    #[test]
    fn test_nullability() {
        let star = tree("a*");
        let star_node = star.node(star.root().children[0].unwrap());
        assert!(star_node.nullable);

        let plus = tree("a+");
        let plus_node = plus.node(plus.root().children[0].unwrap());
        assert!(!plus_node.nullable);
        assert_eq!(plus.nextpos(1), &set(&[1, 2]));

        let alt = tree("a|b*");
        let alt_node = alt.node(alt.root().children[0].unwrap());
        assert!(alt_node.nullable);
        assert_eq!(alt.root().firstpos, set(&[1, 2, 3]));
    }

    #[test]
    fn test_epsilon_leaf() {
        let t = tree("ε");
        let leaf = t.node(t.root().children[0].unwrap());
        assert!(leaf.nullable);
        assert!(leaf.firstpos.is_empty());
        assert_eq!(leaf.position, Some(1));
        assert_eq!(t.nextpos(START), &set(&[2]));
        assert!(t.nextpos(1).is_empty());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            SyntaxTree::augmented(&[], None).unwrap_err(),
            CompileError::MissingOperand('.')
        );
        assert_eq!(
            SyntaxTree::augmented(&['x'], None).unwrap_err(),
            CompileError::UnsupportedSymbol('x')
        );
        assert_eq!(
            SyntaxTree::augmented(&['a', 'b', 'a', '.'], Some(3)).unwrap_err(),
            CompileError::TooComplex
        );
    }
}
