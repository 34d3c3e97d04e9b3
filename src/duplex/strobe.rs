//! A minimal STROBE-128 duplex.
//!
//! Only the operations needed by transcripts are implemented:
//! `meta-AD`, `AD`, `KEY`, and `PRF`, each either starting a new operation or
//! continuing the previous one (`more = true`).
//! There is no transport (`T` flag) support, since transcripts never send or receive anything.
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{AlignedKeccakF1600, DuplexInterface};

/// Rate of STROBE-128, in bytes: `200 - (2 * 128) / 8 - 2`.
const STROBE_R: u8 = 166;

const FLAG_I: u8 = 1;
const FLAG_A: u8 = 1 << 1;
const FLAG_C: u8 = 1 << 2;
const FLAG_T: u8 = 1 << 3;
const FLAG_M: u8 = 1 << 4;
const FLAG_K: u8 = 1 << 5;

/// STROBE-128 (v1.0.2) over [`AlignedKeccakF1600`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Strobe128 {
    state: AlignedKeccakF1600,
    pos: u8,
    pos_begin: u8,
    cur_flags: u8,
}

impl Strobe128 {
    /// Initialize the duplex and absorb `protocol_label` as metadata.
    pub fn new(protocol_label: &[u8]) -> Self {
        let mut state = AlignedKeccakF1600::default();
        state.as_mut()[0..6].copy_from_slice(&[1, STROBE_R + 2, 1, 0, 1, 96]);
        state.as_mut()[6..18].copy_from_slice(b"STROBEv1.0.2");
        state.permute();

        let mut strobe = Self {
            state,
            pos: 0,
            pos_begin: 0,
            cur_flags: 0,
        };
        strobe.meta_ad(protocol_label, false);
        strobe
    }

    pub fn meta_ad(&mut self, data: &[u8], more: bool) {
        self.begin_op(FLAG_M | FLAG_A, more);
        self.absorb(data);
    }

    pub fn ad(&mut self, data: &[u8], more: bool) {
        self.begin_op(FLAG_A, more);
        self.absorb(data);
    }

    pub fn prf(&mut self, data: &mut [u8], more: bool) {
        self.begin_op(FLAG_I | FLAG_A | FLAG_C, more);
        self.squeeze(data);
    }

    pub fn key(&mut self, data: &[u8], more: bool) {
        self.begin_op(FLAG_A | FLAG_C, more);
        self.overwrite(data);
    }

    fn run_f(&mut self) {
        let pos = self.pos as usize;
        let state = self.state.as_mut();
        state[pos] ^= self.pos_begin;
        state[pos + 1] ^= 0x04;
        state[STROBE_R as usize + 1] ^= 0x80;
        self.state.permute();
        self.pos = 0;
        self.pos_begin = 0;
    }

    fn absorb(&mut self, data: &[u8]) {
        for byte in data {
            self.state.as_mut()[self.pos as usize] ^= byte;
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    fn overwrite(&mut self, data: &[u8]) {
        for byte in data {
            self.state.as_mut()[self.pos as usize] = *byte;
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    fn squeeze(&mut self, data: &mut [u8]) {
        for byte in data {
            let lane = &mut self.state.as_mut()[self.pos as usize];
            *byte = *lane;
            *lane = 0;
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    fn begin_op(&mut self, flags: u8, more: bool) {
        if more {
            assert_eq!(
                self.cur_flags, flags,
                "Tried to continue op {:#b} but changed flags to {:#b}",
                self.cur_flags, flags,
            );
            return;
        }

        assert_eq!(flags & FLAG_T, 0u8, "The T flag is not supported");

        let old_begin = self.pos_begin;
        self.pos_begin = self.pos + 1;
        self.cur_flags = flags;

        self.absorb(&[old_begin, flags]);

        // C and K operations start on a fresh block.
        let force_f = 0 != (flags & (FLAG_C | FLAG_K));
        if force_f && self.pos != 0 {
            self.run_f();
        }
    }
}

impl DuplexInterface for Strobe128 {
    const SECURITY_BITS: usize = 128;

    fn new(protocol_label: &[u8]) -> Self {
        Strobe128::new(protocol_label)
    }

    fn absorb_metadata_unchecked(&mut self, input: &[u8]) -> &mut Self {
        self.meta_ad(input, false);
        self
    }

    fn absorb_unchecked(&mut self, input: &[u8]) -> &mut Self {
        self.ad(input, false);
        self
    }

    fn rekey_unchecked(&mut self, key: &[u8]) -> &mut Self {
        self.key(key, false);
        self
    }

    fn squeeze_unchecked(&mut self, output: &mut [u8]) -> &mut Self {
        self.prf(output, false);
        self
    }
}

impl core::fmt::Debug for Strobe128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Never print the state: it may depend on secrets.
        f.debug_struct("Strobe128").finish_non_exhaustive()
    }
}
