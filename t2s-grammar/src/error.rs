use std::error::Error;
use std::fmt::{self, Display};

use t2s_fragment::FragmentError;

/// Failures while loading one grammar line. Fatal to loading the
/// whole grammar file, per the loader's process-level error policy.
#[derive(Debug, PartialEq)]
pub enum GrammarError {
    MissingSeparator(String),
    EmptyLhs(String),
    Fragment(FragmentError),
    BadTargetToken(String),
    BadFeatureValue(String),
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::MissingSeparator(line) => {
                write!(f, "grammar line has no ||| separator: {:?}", line)
            }
            GrammarError::EmptyLhs(line) => {
                write!(f, "grammar line has an empty source side: {:?}", line)
            }
            GrammarError::Fragment(e) => write!(f, "grammar source tree: {}", e),
            GrammarError::BadTargetToken(tok) => write!(f, "bad target token: {:?}", tok),
            GrammarError::BadFeatureValue(tok) => write!(f, "bad feature token: {:?}", tok),
        }
    }
}

impl Error for GrammarError {}

impl From<FragmentError> for GrammarError {
    fn from(e: FragmentError) -> Self {
        GrammarError::Fragment(e)
    }
}
