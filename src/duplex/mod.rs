//! The duplex object underneath every transcript.
//!
//! Transcripts in this crate never touch a permutation directly: they drive an
//! object implementing [`DuplexInterface`], which provides the five operations a
//! transcript needs (absorb metadata, absorb data, rekey, extract, and fork via
//! [`Clone`]).
//!
//! The module ships a single implementation, [`Strobe128`], that is a
//! STROBE-128 duplex over the Keccak-f\[1600\] permutation ([`AlignedKeccakF1600`]).
//! It implements only the subset of STROBE operations a transcript needs, and it is
//! byte-for-byte compatible with other Merlin implementations.

/// The duplex interface.
mod interface;
/// Keccak-f\[1600\] state.
pub mod keccak;
/// STROBE-128 on top of Keccak-f\[1600\].
pub mod strobe;

pub use interface::DuplexInterface;
pub use keccak::AlignedKeccakF1600;
pub use strobe::Strobe128;
