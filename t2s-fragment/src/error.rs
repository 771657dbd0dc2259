use std::error::Error;
use std::fmt::{self, Display};

/// Tree-fragment text failed to parse. Fatal to whichever caller was
/// parsing it: a malformed grammar line aborts grammar loading, a
/// malformed input sentence fails that one `Translate` call.
#[derive(Debug, PartialEq, Eq)]
pub enum FragmentError {
    Malformed(String),
    TrailingInput(String),
    FrontierInInputTree(String),
}

impl Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentError::Malformed(text) => {
                write!(f, "could not parse tree fragment: {:?}", text)
            }
            FragmentError::TrailingInput(rest) => {
                write!(f, "trailing input after tree fragment: {:?}", rest)
            }
            FragmentError::FrontierInInputTree(name) => write!(
                f,
                "input tree contains a frontier marker [{}]; frontier markers are only valid in grammar rule source trees",
                name
            ),
        }
    }
}

impl Error for FragmentError {}
