use std::collections::HashMap;

use t2s::{SentenceMetadata, Translator, TranslatorConfig};

fn main() {
    let mut translator = Translator::new(TranslatorConfig {
        grammar: vec![],
        add_pass_through_rules: true,
    })
    .expect("failed to initialize translator");

    let input = "(S (NP john) (VP sleeps))";
    let weights = HashMap::new();
    match translator.translate(input, &weights, &SentenceMetadata) {
        Ok(forest) => {
            println!(
                "derived {} node(s), {} edge(s) into goal",
                forest.hypergraph.node_count(),
                forest.hypergraph.edges_into(forest.goal).len()
            );
        }
        Err(e) => eprintln!("{}", e),
    }
}
