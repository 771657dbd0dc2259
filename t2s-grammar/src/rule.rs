/// One token of a rule's target right-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetItem {
    /// A surface target word (interned id).
    Terminal(u32),
    /// A reference to the rule's `i`-th frontier variable, in source
    /// order. Always `< arity`.
    Variable(usize),
}

/// An opaque rule: a target right-hand side, an arity, a feature
/// vector, and the category it rewrites. The composition engine only
/// ever reads `arity`, `feature_values`, and `lhs`; `target_rhs` exists
/// for forest readout (rendering a derivation's target string) and
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub lhs: u32,
    pub arity: usize,
    pub target_rhs: Vec<TargetItem>,
    pub feature_values: Vec<(u32, f64)>,
}

impl Rule {
    pub fn new(lhs: u32, arity: usize, target_rhs: Vec<TargetItem>, feature_values: Vec<(u32, f64)>) -> Self {
        Rule {
            lhs,
            arity,
            target_rhs,
            feature_values,
        }
    }
}
