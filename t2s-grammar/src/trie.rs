use std::collections::HashMap;

use t2s_fragment::{RhsItem, TreeFragment};
use t2s_symbol::Symbol;

use crate::rule::Rule;

/// One trie node: a transition map keyed by symbol, and the rules
/// whose source pattern ends exactly here.
#[derive(Debug, Default)]
pub struct TrieNode {
    next: HashMap<Symbol, TrieNode>,
    rules: Vec<Rule>,
}

impl TrieNode {
    pub fn step(&self, sym: Symbol) -> Option<&TrieNode> {
        self.next.get(&sym)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// A grammar: one trie per `transducer_state`, rooted at an implicit
/// start keyed by that state. Everything downstream of the
/// `transducer_state` edge is keyed by successive symbols of a rule's
/// source tree, so two rules sharing a source prefix (e.g. a bare
/// frontier variable and a fully elaborated subtree starting at the
/// same category) share trie nodes.
#[derive(Debug, Default)]
pub struct GrammarTrie {
    root: HashMap<u32, TrieNode>,
}

impl GrammarTrie {
    pub fn new() -> Self {
        GrammarTrie { root: HashMap::new() }
    }

    pub fn root_for(&self, transducer_state: u32) -> Option<&TrieNode> {
        self.root.get(&transducer_state)
    }

    /// Inserts `rule`, keyed by the full token stream of `frag` read
    /// from `start`. The walk always descends into elaborated child
    /// subtrees (`RhsItem::Child`) and only stops at a `Frontier` item,
    /// since a frontier position has no further structure to read.
    pub fn insert(&mut self, transducer_state: u32, frag: &TreeFragment, start: usize, rule: Rule) {
        let mut node = self.root.entry(transducer_state).or_default();
        let mut it = frag.begin(start);
        while let Some(sym) = it.current(frag) {
            node = node.next.entry(sym).or_default();
            it.advance(frag);
        }
        node.rules.push(rule);
    }
}

/// Counts the true frontier (`[X]`) positions anywhere in `frag`,
/// including inside elaborated subtrees — this, not the number of
/// immediate children, is a rule's arity: an elaborated child
/// (`RhsItem::Child`) is matched exactly and contributes no variable,
/// while a `Frontier` item (at any depth) becomes one slot of
/// `future_work` at composition time.
pub fn frontier_arity(frag: &TreeFragment) -> usize {
    frag.nodes
        .iter()
        .flat_map(|n| n.rhs.iter())
        .filter(|item| matches!(item, RhsItem::Frontier(_)))
        .count()
}
