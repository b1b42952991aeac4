//! Error types for the drivers.

use std::fmt;

/// Driver error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error.
    Config(String),
    /// RPC communication error.
    Rpc(String),
    /// Transaction reached the chain but the contract call failed.
    Contract(String),
    /// Malformed event log.
    Event(String),
    /// Observed contract state differs from what was expected.
    Mismatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Rpc(msg) => write!(f, "rpc error: {msg}"),
            Error::Contract(msg) => write!(f, "contract error: {msg}"),
            Error::Event(msg) => write!(f, "event error: {msg}"),
            Error::Mismatch(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
