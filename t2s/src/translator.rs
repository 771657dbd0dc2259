use std::collections::HashMap;
use std::path::PathBuf;

use t2s_compose::{compose, finalize, Forest};
use t2s_fragment::TreeFragment;
use t2s_grammar::{load_grammar, synthesize_pass_through, GrammarTrie};
use t2s_symbol::{FeatureTable, SymbolTable};

use crate::errors::TranslateError;

/// Configuration for a [`Translator`]: which grammar files to load at
/// startup, and whether to synthesize pass-through rules per sentence.
#[derive(Debug, Clone, Default)]
pub struct TranslatorConfig {
    pub grammar: Vec<PathBuf>,
    pub add_pass_through_rules: bool,
}

/// Threaded through [`Translator::translate`] but unused by the core;
/// kept for interface compatibility with callers that want to attach
/// per-sentence context (source document, span, whatever) without
/// changing the translate signature later.
#[derive(Debug, Clone, Default)]
pub struct SentenceMetadata;

/// Owns the interned symbol/feature dictionaries and the grammar list
/// for the translator's lifetime. Grammar tries are loaded once at
/// construction; a pass-through trie is appended per sentence (when
/// configured) and removed again once that sentence completes.
pub struct Translator {
    symbols: SymbolTable,
    features: FeatureTable,
    grammars: Vec<GrammarTrie>,
    add_pass_through_rules: bool,
    remove_grammars: usize,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let mut symbols = SymbolTable::new();
        let mut features = FeatureTable::new();
        let mut grammars = Vec::with_capacity(config.grammar.len());
        for path in &config.grammar {
            let text = std::fs::read_to_string(path).map_err(|error| TranslateError::Io {
                file: path.clone(),
                error,
            })?;
            let trie = load_grammar(&text, &mut symbols, &mut features).map_err(|error| {
                TranslateError::GrammarMalformed {
                    file: path.clone(),
                    error,
                }
            })?;
            grammars.push(trie);
        }
        Ok(Translator {
            symbols,
            features,
            grammars,
            add_pass_through_rules: config.add_pass_through_rules,
            remove_grammars: 0,
        })
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    /// Parses `input`, composes it against the active grammar list
    /// (appending a pass-through grammar first if configured),
    /// finalizes the resulting forest against `weights`, and restores
    /// the grammar list to its pre-sentence length before returning —
    /// on success or failure alike, no partial state survives.
    pub fn translate(
        &mut self,
        input: &str,
        weights: &HashMap<u32, f64>,
        _metadata: &SentenceMetadata,
    ) -> Result<Forest, TranslateError> {
        self.remove_grammars = 0;

        let frag = match TreeFragment::parse_input(input, &mut self.symbols) {
            Ok(frag) => frag,
            Err(e) => {
                self.sentence_complete();
                return Err(TranslateError::InputMalformed(e));
            }
        };

        if self.add_pass_through_rules {
            let pass_through = synthesize_pass_through(&frag, &mut self.features);
            self.grammars.push(pass_through);
            self.remove_grammars += 1;
        }

        let result = compose(&frag, &self.grammars)
            .map_err(TranslateError::from)
            .and_then(|raw| finalize(raw, weights).map_err(TranslateError::from));

        self.sentence_complete();
        result
    }

    /// Shrinks the grammar list by `remove_grammars`, undoing the
    /// per-sentence pass-through append.
    fn sentence_complete(&mut self) {
        let new_len = self.grammars.len() - self.remove_grammars;
        self.grammars.truncate(new_len);
        self.remove_grammars = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_complete_restores_grammar_list_length() {
        let config = TranslatorConfig {
            grammar: vec![],
            add_pass_through_rules: true,
        };
        let mut translator = Translator::new(config).unwrap();
        assert_eq!(translator.grammars.len(), 0);

        let weights = HashMap::new();
        let _ = translator.translate("(S a)", &weights, &SentenceMetadata);
        assert_eq!(translator.grammars.len(), 0, "pass-through trie removed after the call");
    }

    #[test]
    fn pass_through_makes_every_syntactically_valid_tree_derivable() {
        let config = TranslatorConfig {
            grammar: vec![],
            add_pass_through_rules: true,
        };
        let mut translator = Translator::new(config).unwrap();
        let weights = HashMap::new();
        let forest = translator
            .translate("(S (NP john) (VP sleeps))", &weights, &SentenceMetadata)
            .unwrap();
        assert!(!forest.hypergraph.edges_into(forest.goal).is_empty());
    }

    #[test]
    fn no_grammar_and_no_pass_through_fails() {
        let config = TranslatorConfig {
            grammar: vec![],
            add_pass_through_rules: false,
        };
        let mut translator = Translator::new(config).unwrap();
        let weights = HashMap::new();
        let result = translator.translate("(S (NP john) (VP sleeps))", &weights, &SentenceMetadata);
        assert!(result.is_err());
        assert_eq!(translator.grammars.len(), 0);
    }

    #[test]
    fn frontier_marker_in_sentence_input_fails_gracefully_instead_of_panicking() {
        let config = TranslatorConfig {
            grammar: vec![],
            add_pass_through_rules: true,
        };
        let mut translator = Translator::new(config).unwrap();
        let weights = HashMap::new();
        let result = translator.translate("(S (NP john) [VP])", &weights, &SentenceMetadata);
        assert!(matches!(result, Err(TranslateError::InputMalformed(_))));
        assert_eq!(translator.grammars.len(), 0, "grammar list restored even on a failed parse");
    }
}
