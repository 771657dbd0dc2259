mod engine;
mod error;
mod finalize;
mod state;

pub use engine::{compose, RawComposition};
pub use error::ComposeError;
pub use finalize::{finalize, Forest};
pub use state::TransducerState;
