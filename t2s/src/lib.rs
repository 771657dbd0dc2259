mod errors;
mod translator;

pub use errors::{Severity, TranslateError};
pub use translator::{SentenceMetadata, Translator, TranslatorConfig};

pub use t2s_compose::Forest;
pub use t2s_hypergraph::Hypergraph;
pub use t2s_symbol::{FeatureTable, SymbolTable};
