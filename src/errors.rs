//! Transcripts themselves never fail: absorbing and squeezing bytes is total,
//! and misuse (reading an unfinalized rng, rekeying a finalized one) does not type-check.
//!
//! The only failure that reaches the caller is [`EntropySourceError`],
//! raised when finalizing a [`crate::TranscriptRngBuilder`] and the external
//! randomness source does not deliver its 32 bytes.
//! No retry is attempted: the builder is consumed, and the caller decides
//! whether to fork a fresh one and try another source.
//!
//! A [`core::result::Result`] wrapper called [`TranscriptResult`] (having error fixed to [`EntropySourceError`]) is also provided.
use std::{error::Error, fmt::Display};

/// Signals that the external randomness source failed to deliver.
#[derive(Debug, Clone)]
pub struct EntropySourceError(String);

/// The result type of fallible transcript operations.
pub type TranscriptResult<T> = Result<T, EntropySourceError>;

impl Display for EntropySourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entropy source error: {}", self.0)
    }
}

impl Error for EntropySourceError {}

impl From<&str> for EntropySourceError {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for EntropySourceError {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<rand::Error> for EntropySourceError {
    fn from(value: rand::Error) -> Self {
        EntropySourceError(value.to_string())
    }
}

impl From<std::io::Error> for EntropySourceError {
    fn from(value: std::io::Error) -> Self {
        EntropySourceError(value.to_string())
    }
}
