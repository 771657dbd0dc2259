use t2s_fragment::TreeFragment;
use t2s_symbol::{FeatureTable, SymbolTable};

use crate::error::GrammarError;
use crate::rule::{Rule, TargetItem};
use crate::trie::{frontier_arity, GrammarTrie};

/// A parsed grammar line, before it's filed into a trie: the loader
/// keeps the source fragment around since the trie insertion walk
/// needs to re-read its token stream.
struct ParsedRule {
    frag: TreeFragment,
    rule: Rule,
}

/// Parses one `SRC ||| TGT ||| FEATS` line. The first `|||` splits off
/// the source tree; trimming is symmetric (trailing space on the
/// source side, leading space on what follows) regardless of exactly
/// how many spaces surround the delimiter. The remainder is split the
/// same way on its own first `|||` into target and feature fields.
fn parse_grammar_line(
    line: &str,
    symbols: &mut SymbolTable,
    features: &mut FeatureTable,
) -> Result<ParsedRule, GrammarError> {
    let sep = line
        .find("|||")
        .ok_or_else(|| GrammarError::MissingSeparator(line.to_string()))?;
    let src = line[..sep].trim_end();
    if src.is_empty() {
        return Err(GrammarError::EmptyLhs(line.to_string()));
    }
    let rest = line[sep + 3..].trim_start();

    let sep2 = rest
        .find("|||")
        .ok_or_else(|| GrammarError::MissingSeparator(line.to_string()))?;
    let tgt = rest[..sep2].trim();
    let feats = rest[sep2 + 3..].trim();

    let frag = TreeFragment::parse_rule(src, symbols)?;
    let arity = frontier_arity(&frag);
    let target_rhs = parse_target(tgt, symbols, arity)?;
    let feature_values = parse_features(feats, features)?;

    let rule = Rule::new(frag.root_lhs(), arity, target_rhs, feature_values);
    Ok(ParsedRule { frag, rule })
}

/// A target token is either a bare word (a terminal, interned
/// verbatim) or `[i]`, a reference to the rule's `i`-th frontier
/// variable in source order.
fn parse_target(tgt: &str, symbols: &mut SymbolTable, arity: usize) -> Result<Vec<TargetItem>, GrammarError> {
    let mut items = Vec::new();
    for tok in tgt.split_whitespace() {
        if let Some(inner) = tok.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let idx: usize = inner
                .parse()
                .map_err(|_| GrammarError::BadTargetToken(tok.to_string()))?;
            if idx >= arity {
                return Err(GrammarError::BadTargetToken(tok.to_string()));
            }
            items.push(TargetItem::Variable(idx));
        } else {
            items.push(TargetItem::Terminal(symbols.intern(tok)));
        }
    }
    Ok(items)
}

fn parse_features(feats: &str, features: &mut FeatureTable) -> Result<Vec<(u32, f64)>, GrammarError> {
    let mut values = Vec::new();
    for tok in feats.split_whitespace() {
        let (name, value) = tok
            .split_once('=')
            .ok_or_else(|| GrammarError::BadFeatureValue(tok.to_string()))?;
        let v: f64 = value
            .parse()
            .map_err(|_| GrammarError::BadFeatureValue(tok.to_string()))?;
        values.push((features.intern(name), v));
    }
    Ok(values)
}

/// Loads a whole grammar file's worth of rules into one trie, rooted
/// at the initial transducer state. Blank lines are skipped; any
/// malformed rule line is fatal to the load.
pub fn load_grammar(
    text: &str,
    symbols: &mut SymbolTable,
    features: &mut FeatureTable,
) -> Result<GrammarTrie, GrammarError> {
    let mut trie = GrammarTrie::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let ParsedRule { frag, rule } = parse_grammar_line(line, symbols, features)?;
        let root = frag.root;
        trie.insert(0, &frag, root, rule);
    }
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use t2s_symbol::Symbol;

    #[test]
    fn loads_a_direct_rule_and_assigns_arity_from_frontier_count() {
        let mut symbols = SymbolTable::new();
        let mut features = FeatureTable::new();
        let trie = load_grammar("(S [NP] [VP]) ||| [0] [1] ||| w=1.0", &mut symbols, &mut features).unwrap();
        let s = symbols.get("S").unwrap();
        let np = symbols.get("NP").unwrap();
        let vp = symbols.get("VP").unwrap();
        let node = trie
            .root_for(0)
            .unwrap()
            .step(Symbol::lhs(s))
            .unwrap()
            .step(Symbol::rhs(np))
            .unwrap()
            .step(Symbol::rhs(vp))
            .unwrap();
        assert_eq!(node.rules().len(), 1);
        assert_eq!(node.rules()[0].arity, 2);
        let w = features.get("w").unwrap();
        assert_eq!(node.rules()[0].feature_values, vec![(w, 1.0)]);
    }

    #[test]
    fn rejects_line_without_separator() {
        let mut symbols = SymbolTable::new();
        let mut features = FeatureTable::new();
        assert!(load_grammar("(S a)", &mut symbols, &mut features).is_err());
    }

    #[test]
    fn rejects_out_of_range_target_variable() {
        let mut symbols = SymbolTable::new();
        let mut features = FeatureTable::new();
        assert!(load_grammar("(S [NP]) ||| [1] ||| w=1.0", &mut symbols, &mut features).is_err());
    }
}
