use std::error::Error;
use std::fmt::{self, Display};
use std::path::PathBuf;

use owo_colors::OwoColorize;

use t2s_compose::ComposeError;
use t2s_fragment::FragmentError;
use t2s_grammar::GrammarError;

#[derive(Debug)]
pub enum Severity {
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "{}", "error".bright_red().bold()),
        }
    }
}

/// Everything that can make `Translator::new` or `Translator::translate`
/// fail. `GrammarMalformed` and `Io` are fatal at load time (process
/// level); `InputMalformed` and `NoDerivation` are fatal only to the
/// one sentence being translated.
#[derive(Debug)]
pub enum TranslateError {
    InputMalformed(FragmentError),
    GrammarMalformed { file: PathBuf, error: GrammarError },
    Io { file: PathBuf, error: std::io::Error },
    Compose(ComposeError),
}

impl TranslateError {
    fn message(&self) -> &'static str {
        match self {
            TranslateError::InputMalformed(_) => "could not parse the input sentence",
            TranslateError::GrammarMalformed { .. } => "could not load grammar file",
            TranslateError::Io { .. } => "could not read grammar file",
            TranslateError::Compose(_) => "translation produced no derivation",
        }
    }
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", Severity::Error, self.message())?;
        match self {
            TranslateError::InputMalformed(e) => write!(f, "  {} {}", "-->".blue().bold(), e),
            TranslateError::GrammarMalformed { file, error } => {
                write!(f, "  {} {}: {}", "-->".blue().bold(), file.display(), error)
            }
            TranslateError::Io { file, error } => {
                write!(f, "  {} {}: {}", "-->".blue().bold(), file.display(), error)
            }
            TranslateError::Compose(e) => write!(f, "  {} {}", "-->".blue().bold(), e),
        }
    }
}

impl Error for TranslateError {}

impl From<ComposeError> for TranslateError {
    fn from(e: ComposeError) -> Self {
        TranslateError::Compose(e)
    }
}
