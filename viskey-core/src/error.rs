//! Error types for the VisKey engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid render target, or a malformed construction
    /// option. Fatal: construction aborts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-textual value handed to the facade. The offending operation is
    /// a no-op; internal state is unchanged.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An external subscriber callback panicked. Isolated at the call
    /// site, never propagated.
    #[error("Callback {0} panicked")]
    Callback(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
