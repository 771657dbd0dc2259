mod error;
mod parser;
mod tree;

pub use error::FragmentError;
pub use tree::{FragmentIter, Node, RhsItem, TreeFragment};
