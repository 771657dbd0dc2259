use std::error::Error;
use std::fmt::{self, Display};

/// Failures from composition or finalization. `ArityMismatch` and
/// `InternalInvariant` are assertion failures — they indicate a
/// malformed grammar or a broken invariant, not an expected runtime
/// outcome; `NoDerivation` is the one expected failure mode.
#[derive(Debug, PartialEq)]
pub enum ComposeError {
    NoDerivation,
    ArityMismatch { expected: usize, got: usize },
    InternalInvariant(String),
}

impl Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::NoDerivation => write!(f, "no derivation found for the input tree"),
            ComposeError::ArityMismatch { expected, got } => {
                write!(f, "rule arity mismatch: expected {} tail nodes, got {}", expected, got)
            }
            ComposeError::InternalInvariant(msg) => write!(f, "internal invariant violated: {}", msg),
        }
    }
}

impl Error for ComposeError {}
