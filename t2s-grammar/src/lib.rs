mod error;
mod loader;
mod passthrough;
mod rule;
mod trie;

pub use error::GrammarError;
pub use loader::load_grammar;
pub use passthrough::synthesize_pass_through;
pub use rule::{Rule, TargetItem};
pub use trie::{frontier_arity, GrammarTrie, TrieNode};
