use t2s_fragment::{Node, RhsItem, TreeFragment};
use t2s_symbol::FeatureTable;

use crate::rule::{Rule, TargetItem};
use crate::trie::GrammarTrie;

/// Emits one identity rule per node of `input`: source is that node's
/// head category with its children one level deep (terminals pass
/// through, nonterminal children referenced only by category, never
/// elaborated further), target is the same children with nonterminal
/// slots indexed left-to-right, and the sole feature is
/// `PassThrough = 1.0`. All rules are filed into a single new trie so
/// that every input subtree has at least one derivation.
pub fn synthesize_pass_through(input: &TreeFragment, features: &mut FeatureTable) -> GrammarTrie {
    let mut trie = GrammarTrie::new();
    let pass_through = features.intern("PassThrough");

    for node in &input.nodes {
        let mut target_rhs = Vec::with_capacity(node.rhs.len());
        let mut shallow_rhs = Vec::with_capacity(node.rhs.len());
        let mut var_idx = 0usize;
        for item in &node.rhs {
            match item {
                RhsItem::Terminal(w) => {
                    target_rhs.push(TargetItem::Terminal(*w));
                    shallow_rhs.push(RhsItem::Terminal(*w));
                }
                RhsItem::Child(child_idx) => {
                    target_rhs.push(TargetItem::Variable(var_idx));
                    var_idx += 1;
                    shallow_rhs.push(RhsItem::Frontier(input.nodes[*child_idx].lhs));
                }
                RhsItem::Frontier(_) => {
                    unreachable!("a fully parsed input tree carries no frontier items")
                }
            }
        }

        let arity = var_idx;
        let rule = Rule::new(node.lhs, arity, target_rhs, vec![(pass_through, 1.0)]);
        let shallow = TreeFragment {
            nodes: vec![Node {
                lhs: node.lhs,
                rhs: shallow_rhs,
            }],
            root: 0,
        };
        trie.insert(0, &shallow, 0, rule);
    }

    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use t2s_symbol::{Symbol, SymbolTable};

    #[test]
    fn synthesizes_one_rule_per_node_with_pass_through_feature() {
        let mut symbols = SymbolTable::new();
        let mut features = FeatureTable::new();
        let input = TreeFragment::parse_input("(S (NP john) (VP sleeps))", &mut symbols).unwrap();

        let trie = synthesize_pass_through(&input, &mut features);
        let pass_through = features.get("PassThrough").unwrap();

        let s = symbols.get("S").unwrap();
        let np = symbols.get("NP").unwrap();
        let vp = symbols.get("VP").unwrap();
        let john = symbols.get("john").unwrap();

        let s_node = trie
            .root_for(0)
            .unwrap()
            .step(Symbol::lhs(s))
            .unwrap()
            .step(Symbol::rhs(np))
            .unwrap()
            .step(Symbol::rhs(vp))
            .unwrap();
        assert_eq!(s_node.rules().len(), 1);
        assert_eq!(s_node.rules()[0].arity, 2);
        assert_eq!(s_node.rules()[0].feature_values, vec![(pass_through, 1.0)]);

        let np_node = trie
            .root_for(0)
            .unwrap()
            .step(Symbol::lhs(np))
            .unwrap()
            .step(Symbol::terminal(john))
            .unwrap();
        assert_eq!(np_node.rules().len(), 1);
        assert_eq!(np_node.rules()[0].arity, 0);
    }
}
