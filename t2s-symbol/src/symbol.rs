use std::fmt::{self, Debug};

/// Number of low bits used to tag a [`Symbol`]'s kind.
const TAG_BITS: u32 = 2;
const TAG_MASK: u32 = (1 << TAG_BITS) - 1;

const TAG_TERMINAL: u32 = 0;
const TAG_LHS: u32 = 1;
const TAG_RHS: u32 = 2;

/// A packed symbol: the low two bits carry a kind tag, the remaining
/// bits carry the raw id (a word id for terminals, a category id for
/// `Lhs`/`Rhs`).
///
/// Three kinds are distinguished, matching how a tree fragment's token
/// stream actually uses them:
/// - `Terminal(w)` is a surface word.
/// - `Lhs(n)` opens a subtree headed by category `n`.
/// - `Rhs(n)` is a frontier position: a child of category `n` that is
///   either filled by a sub-derivation (grammar `[n]`) or whose
///   internal structure continues in the same token stream.
///
/// Structural open/close tokens from the textual tree-fragment syntax
/// never reach this type: they are consumed while parsing into the
/// node arena (see `t2s-fragment`), not carried through composition.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn terminal(id: u32) -> Self {
        Symbol((id << TAG_BITS) | TAG_TERMINAL)
    }

    pub fn lhs(id: u32) -> Self {
        Symbol((id << TAG_BITS) | TAG_LHS)
    }

    pub fn rhs(id: u32) -> Self {
        Symbol((id << TAG_BITS) | TAG_RHS)
    }

    pub fn is_terminal(self) -> bool {
        self.0 & TAG_MASK == TAG_TERMINAL
    }

    pub fn is_lhs(self) -> bool {
        self.0 & TAG_MASK == TAG_LHS
    }

    pub fn is_rhs(self) -> bool {
        self.0 & TAG_MASK == TAG_RHS
    }

    /// The raw id with the tag bits stripped off.
    pub fn id(self) -> u32 {
        self.0 >> TAG_BITS
    }

    /// The bare frontier form of this symbol, i.e. `Rhs(id)` regardless
    /// of the symbol's original kind. Used to compare an `Lhs` category
    /// against a grammar's `[X]` frontier edge.
    pub fn as_frontier(self) -> Symbol {
        Symbol::rhs(self.id())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminal() {
            write!(f, "TERM({})", self.id())
        } else if self.is_lhs() {
            write!(f, "LHS({})", self.id())
        } else {
            write!(f, "RHS({})", self.id())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_id_and_kind() {
        let t = Symbol::terminal(42);
        assert!(t.is_terminal());
        assert!(!t.is_lhs());
        assert_eq!(t.id(), 42);

        let l = Symbol::lhs(7);
        assert!(l.is_lhs());
        assert_eq!(l.id(), 7);

        let r = Symbol::rhs(7);
        assert!(r.is_rhs());
        assert_eq!(r.id(), 7);
        assert_eq!(l.as_frontier(), r);
    }

    #[test]
    fn distinct_kinds_never_compare_equal_for_same_id() {
        assert_ne!(Symbol::terminal(3), Symbol::lhs(3));
        assert_ne!(Symbol::lhs(3), Symbol::rhs(3));
    }
}
