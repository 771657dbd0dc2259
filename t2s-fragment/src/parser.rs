use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, multispace0, multispace1},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use t2s_symbol::SymbolTable;

use crate::tree::{Node, RhsItem, TreeFragment};
use crate::FragmentError;

enum RawChild<'a> {
    Word(&'a str),
    Frontier(&'a str),
    Subtree(RawTree<'a>),
}

struct RawTree<'a> {
    name: &'a str,
    children: Vec<RawChild<'a>>,
}

fn symbol_name(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n()[]")(input)
}

fn frontier(input: &str) -> IResult<&str, RawChild> {
    map(delimited(char('['), symbol_name, char(']')), |name| {
        RawChild::Frontier(name)
    })(input)
}

fn word(input: &str) -> IResult<&str, RawChild> {
    map(symbol_name, RawChild::Word)(input)
}

fn subtree(input: &str) -> IResult<&str, RawChild> {
    map(tree, RawChild::Subtree)(input)
}

fn child(input: &str) -> IResult<&str, RawChild> {
    alt((subtree, frontier, word))(input)
}

fn tree(input: &str) -> IResult<&str, RawTree> {
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = symbol_name(input)?;
    let (input, children) = many0(preceded(multispace1, child))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, RawTree { name, children }))
}

/// Builds the node arena for `raw`, interning names into `table`.
/// `is_rule` gates whether a `[X]` frontier marker is acceptable: a
/// grammar rule's source tree may carry frontier variables, but a
/// fully parsed input tree never should — mirroring the original
/// `cdec::TreeFragment(text, is_rule)` split between rule and input
/// parsing (see `original_source/decoder/tree2string_translator.cc`).
fn build(
    raw: &RawTree,
    nodes: &mut Vec<Node>,
    table: &mut SymbolTable,
    is_rule: bool,
) -> Result<usize, FragmentError> {
    let lhs = table.intern(raw.name);
    let idx = nodes.len();
    nodes.push(Node {
        lhs,
        rhs: Vec::new(),
    });
    let mut rhs = Vec::with_capacity(raw.children.len());
    for child in &raw.children {
        let item = match child {
            RawChild::Word(w) => RhsItem::Terminal(table.intern(w)),
            RawChild::Frontier(f) => {
                if !is_rule {
                    return Err(FragmentError::FrontierInInputTree((*f).to_string()));
                }
                RhsItem::Frontier(table.intern(f))
            }
            RawChild::Subtree(sub) => RhsItem::Child(build(sub, nodes, table, is_rule)?),
        };
        rhs.push(item);
    }
    nodes[idx].rhs = rhs;
    Ok(idx)
}

fn parse(text: &str, table: &mut SymbolTable, is_rule: bool) -> Result<TreeFragment, FragmentError> {
    let trimmed = text.trim();
    let (remaining, raw) = tree(trimmed).map_err(|_| FragmentError::Malformed(text.to_string()))?;
    if !remaining.trim().is_empty() {
        return Err(FragmentError::TrailingInput(remaining.to_string()));
    }
    let mut nodes = Vec::new();
    let root = build(&raw, &mut nodes, table, is_rule)?;
    Ok(TreeFragment { nodes, root })
}

impl TreeFragment {
    /// Parses `"(LHS child1 child2 …)"` as a grammar rule's source
    /// tree, where `[X]` frontier markers are valid frontier
    /// variables, interning category/word names into `table`.
    pub fn parse_rule(text: &str, table: &mut SymbolTable) -> Result<TreeFragment, FragmentError> {
        parse(text, table, true)
    }

    /// Parses `"(LHS child1 child2 …)"` as a fully elaborated input
    /// tree: a `[X]` frontier marker here is malformed input, since an
    /// input sentence is never itself a grammar fragment with unfilled
    /// variables.
    pub fn parse_input(text: &str, table: &mut SymbolTable) -> Result<TreeFragment, FragmentError> {
        parse(text, table, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use t2s_symbol::Symbol;

    #[test]
    fn parses_flat_tree_with_terminal_and_frontier() {
        let mut table = SymbolTable::new();
        let frag = TreeFragment::parse_rule("(S a [NP])", &mut table).unwrap();
        assert_eq!(table.name(frag.root_lhs()), "S");
        assert_eq!(frag.nodes[frag.root].rhs.len(), 2);
        assert_eq!(frag.source_rhs()[0], Symbol::terminal(table.get("a").unwrap()));
        assert_eq!(frag.source_rhs()[1], Symbol::rhs(table.get("NP").unwrap()));
    }

    #[test]
    fn parses_nested_subtree() {
        let mut table = SymbolTable::new();
        let frag = TreeFragment::parse_input("(S (NP john) (VP sleeps))", &mut table).unwrap();
        assert_eq!(frag.nodes.len(), 3);
        assert_eq!(table.name(frag.root_lhs()), "S");
    }

    #[test]
    fn rejects_malformed_input() {
        let mut table = SymbolTable::new();
        assert!(TreeFragment::parse_input("(S a", &mut table).is_err());
        assert!(TreeFragment::parse_input("not a tree", &mut table).is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        let mut table = SymbolTable::new();
        assert!(TreeFragment::parse_input("(S a) extra", &mut table).is_err());
    }

    #[test]
    fn rejects_frontier_marker_in_input_tree() {
        let mut table = SymbolTable::new();
        let err = TreeFragment::parse_input("(S (NP john) [VP])", &mut table).unwrap_err();
        assert_eq!(err, FragmentError::FrontierInInputTree("VP".to_string()));
        // a nested frontier, several levels deep, is rejected the same way
        let err = TreeFragment::parse_input("(S (NP john) (VP [X]))", &mut table).unwrap_err();
        assert_eq!(err, FragmentError::FrontierInInputTree("X".to_string()));
    }

    #[test]
    fn accepts_frontier_marker_in_rule_tree() {
        let mut table = SymbolTable::new();
        assert!(TreeFragment::parse_rule("(S (NP john) [VP])", &mut table).is_ok());
    }
}
