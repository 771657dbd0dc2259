use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use t2s_fragment::FragmentIter;
use t2s_grammar::TrieNode;

/// `(input_node, transducer_state)`: "continue the transducer at input
/// subtree rooted at `input_node_idx`, in state `transducer_state`."
/// Structural equality/hash, exactly as read off its two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransducerState {
    pub input_node_idx: usize,
    pub transducer_state: u32,
}

impl TransducerState {
    pub fn new(input_node_idx: usize, transducer_state: u32) -> Self {
        TransducerState {
            input_node_idx,
            transducer_state,
        }
    }

    /// A stable hash of this state, carried into the hypergraph node
    /// so node identity survives across runs independent of arena
    /// insertion order.
    pub fn stable_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// A non-owning, pointer-identity handle into a grammar trie. Grammar
/// tries outlive every parser state created during one composition
/// call, so borrowing rather than indexing is safe and avoids a
/// second lookup table.
#[derive(Clone, Copy)]
pub struct NodeRef<'g>(pub &'g TrieNode);

impl<'g> NodeRef<'g> {
    pub fn get(&self) -> &'g TrieNode {
        self.0
    }
}

impl<'g> PartialEq for NodeRef<'g> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<'g> Eq for NodeRef<'g> {}

impl<'g> Hash for NodeRef<'g> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 as *const TrieNode as usize).hash(state)
    }
}

impl<'g> Debug for NodeRef<'g> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:p})", self.0)
    }
}

/// `(in_iter, task, future_work, node)`. Equality is positional: two
/// states are the same exactly when all four fields are pairwise
/// equal, which is what lets the dedup set collapse structurally
/// identical BFS paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParserState<'g> {
    pub in_iter: FragmentIter,
    pub task: TransducerState,
    pub future_work: Vec<TransducerState>,
    pub node: NodeRef<'g>,
}
