use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use t2s::{SentenceMetadata, Translator, TranslatorConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLine {
    #[arg(long, help = "Grammar file to load (repeatable)", value_name = "FILE")]
    grammar: Vec<PathBuf>,
    #[arg(long, help = "Synthesize pass-through rules so every syntactically valid input has a derivation")]
    pass_through: bool,
    #[arg(required = true, help = "Input tree fragment, e.g. \"(S (NP john) (VP sleeps))\"")]
    input: String,
}

fn main() -> ExitCode {
    let cli = CommandLine::parse();

    let mut translator = match Translator::new(TranslatorConfig {
        grammar: cli.grammar,
        add_pass_through_rules: cli.pass_through,
    }) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let weights = HashMap::new();
    match translator.translate(&cli.input, &weights, &SentenceMetadata) {
        Ok(forest) => {
            println!(
                "goal node {}: {} node(s), {} edge(s) into goal",
                forest.goal,
                forest.hypergraph.node_count(),
                forest.hypergraph.edges_into(forest.goal).len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
