//!
//! Merlin transcripts help performing Fiat-Shamir on any public-coin protocol.
//! A [`Transcript`] is a shared, append-only record of every public message of the protocol,
//! from which the verifier's challenges are derived.
//! The same transcript is used to derive the prover's secret randomness,
//! bound to both the public history and the prover's witnesses.
//!
//! # Overview
//!
//! The library does two things:
//!
//! - Assist in the construction of a protocol transcript and of its challenges ([`Transcript`]),
//! - Assist in the derivation of prover nonces ([`TranscriptRngBuilder`], [`TranscriptRng`]).
//!
//! Every message is added under a label, and framed with its length.
//! Prover and verifier run the same sequence of operations, and thus obtain the same challenges.
//!
//! ```
//! use merlin_transcripts::Transcript;
//!
//! let mut transcript = Transcript::new(b"example protocol");
//! // The prover sends a commitment.
//! transcript.append_message(b"commitment", b"some commitment bytes");
//! // The prover (and the verifier) receive a 128-bit challenge.
//! let mut chal = [0u8; 16];
//! transcript.challenge_bytes(b"challenge", &mut chal);
//! ```
//!
//! # Private randomness
//!
//! Nonces are obtained by forking the transcript, binding the witness, and finally
//! mixing external randomness in.
//! Forking does not modify the transcript.
//!
//! ```
//! use merlin_transcripts::{DefaultRng, Transcript};
//! use rand::RngCore;
//!
//! let mut transcript = Transcript::new(b"example protocol");
//! transcript.append_message(b"public key", b"some public key bytes");
//!
//! let mut rng = transcript
//!     .build_rng()
//!     .rekey_with_witness_bytes(b"secret key", b"some secret key bytes")
//!     .finalize(&mut DefaultRng::default())
//!     .expect("OsRng works");
//! let mut nonce = [0u8; 32];
//! rng.fill_bytes(&mut nonce);
//! ```
//!
//! # Interoperability
//!
//! The duplex underneath is STROBE-128 over Keccak-f\[1600\] ([`duplex::Strobe128`]),
//! keyed to the protocol identifier `Merlin v1.0`, so transcripts are
//! byte-for-byte compatible with other Merlin implementations.
//!

#[cfg(target_endian = "big")]
compile_error!(
    r#"
This crate doesn't support big-endian targets.
"#
);

/// Duplex construction and its STROBE-128 instance.
pub mod duplex;
/// Built-in errors.
mod errors;
/// Prover's randomness, bound to the transcript.
mod rng;
/// Transcript construction.
mod transcript;

/// Traits for byte support.
pub mod traits;

pub use duplex::DuplexInterface;
pub use errors::{EntropySourceError, TranscriptResult};
pub use rng::{BuilderState, Forked, Rekeyed, TranscriptRng, TranscriptRngBuilder};
pub use traits::*;
pub use transcript::Transcript;

/// Default random number generator used ([`rand::rngs::OsRng`]).
pub type DefaultRng = rand::rngs::OsRng;

/// Default duplex used ([`duplex::Strobe128`]).
pub type DefaultHash = duplex::Strobe128;
