//! A wrapper around the Keccak-f\[1600\] permutation.
//!
//! **Warning**: this is not SHA3.
//! Internally we use the same permutation function,
//! but STROBE frames and pads its input on its own (see [`super::Strobe128`]).
use zeroize::{Zeroize, ZeroizeOnDrop};

fn transmute_state(st: &mut AlignedKeccakF1600) -> &mut [u64; 25] {
    unsafe { &mut *(st as *mut AlignedKeccakF1600 as *mut [u64; 25]) }
}

/// This is a wrapper around 200-byte buffer that's always 8-byte aligned
/// to make pointers to it safely convertible to pointers to [u64; 25]
/// (since u64 words must be 8-byte aligned)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[repr(align(8))]
pub struct AlignedKeccakF1600([u8; 200]);

impl AlignedKeccakF1600 {
    /// Width of the permutation, in bytes.
    pub const N: usize = 200;

    /// Apply [`keccak::f1600`] in place.
    pub fn permute(&mut self) {
        keccak::f1600(transmute_state(self));
    }
}

impl Default for AlignedKeccakF1600 {
    fn default() -> Self {
        Self([0u8; Self::N])
    }
}

impl AsRef<[u8]> for AlignedKeccakF1600 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for AlignedKeccakF1600 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}
