//! Errors surfaced by the terminal host around the window engine.
//!
//! The window engine itself never fails; these cover terminal setup and the
//! input source going away.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WmError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("event source failed: {0}")]
    EventSource(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: WmError = io::Error::other("boom").into();
        assert!(matches!(err, WmError::Io(_)));
        assert_eq!(err.to_string(), "terminal i/o error: boom");
    }
}
