use core::marker::PhantomData;

use log::{trace, warn};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::duplex::DuplexInterface;
use crate::errors::{EntropySourceError, TranscriptResult};
use crate::transcript::{encode_usize_as_u32, frame};
use crate::DefaultHash;

/// Metadata label preceding the external entropy.
const RNG_LABEL: &[u8] = b"rng";
/// Bytes drawn from the external entropy source.
const ENTROPY_LEN: usize = 32;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Forked {}
    impl Sealed for super::Rekeyed {}
}

/// States of a [`TranscriptRngBuilder`].
pub trait BuilderState: sealed::Sealed {}

/// The builder has just been forked from a transcript.
#[derive(Debug, Clone, Copy)]
pub struct Forked;

/// At least one witness has been bound to the builder.
#[derive(Debug, Clone, Copy)]
pub struct Rekeyed;

impl BuilderState for Forked {}
impl BuilderState for Rekeyed {}

/// Builder for a [`TranscriptRng`], obtained with [`crate::Transcript::build_rng`].
///
/// The builder carries a copy of the transcript state. Witnesses are bound with
/// [`TranscriptRngBuilder::rekey_with_witness_bytes`], then external randomness is
/// mixed in with [`TranscriptRngBuilder::finalize`], which is the only way to obtain an rng.
///
/// The resulting randomness is *synthetic*: it is unpredictable without the witness even if
/// the external source is broken, and with a good external source it is safe even if
/// the same witness is reused with the same transcript.
///
/// An rng cannot be read before it is finalized:
///
/// ```compile_fail
/// use merlin_transcripts::Transcript;
///
/// let transcript = Transcript::new(b"example protocol");
/// let mut nonce = [0u8; 32];
/// transcript.build_rng().read(&mut nonce);
/// ```
///
/// and witnesses cannot be bound after finalization:
///
/// ```compile_fail
/// use merlin_transcripts::{DefaultRng, Transcript};
///
/// let transcript = Transcript::new(b"example protocol");
/// let rng = transcript.build_rng().finalize(&mut DefaultRng::default()).unwrap();
/// rng.rekey_with_witness_bytes(b"witness", b"too late");
/// ```
pub struct TranscriptRngBuilder<H = DefaultHash, S = Forked>
where
    H: DuplexInterface,
    S: BuilderState,
{
    ds: H,
    _state: PhantomData<S>,
}

impl<H: DuplexInterface> TranscriptRngBuilder<H, Forked> {
    pub(crate) fn new(ds: H) -> Self {
        Self {
            ds,
            _state: PhantomData,
        }
    }
}

impl<H: DuplexInterface, S: BuilderState> TranscriptRngBuilder<H, S> {
    /// Rekey the rng with a secret `witness`.
    ///
    /// Can be called repeatedly, once per secret. The `label` distinguishes
    /// the role of each witness in the protocol.
    ///
    /// # Panics
    ///
    /// If `witness` is longer than `u32::MAX` bytes.
    pub fn rekey_with_witness_bytes(
        mut self,
        label: &'static [u8],
        witness: &[u8],
    ) -> TranscriptRngBuilder<H, Rekeyed> {
        trace!(
            "rng meta-AD : b\"{}\" || LE32({})",
            label.escape_ascii(),
            witness.len()
        );
        self.ds
            .absorb_metadata_unchecked(&frame(label, witness.len()))
            .rekey_unchecked(witness);

        TranscriptRngBuilder {
            ds: self.ds,
            _state: PhantomData,
        }
    }

    /// Finalize the builder with 32 bytes drawn from the cryptographically-secure `rng`.
    ///
    /// Fails when the source cannot deliver; the builder is consumed either way.
    pub fn finalize<R>(self, rng: &mut R) -> TranscriptResult<TranscriptRng<H>>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut entropy = Zeroizing::new([0u8; ENTROPY_LEN]);
        rng.try_fill_bytes(&mut entropy[..]).map_err(|e| {
            warn!("entropy source failed while finalizing transcript rng: {e}");
            EntropySourceError::from(e)
        })?;
        Ok(self.finalize_with_entropy(&entropy))
    }

    /// Finalize the builder with 32 bytes read from `reader`.
    ///
    /// A reader that ends before delivering 32 bytes is an error.
    pub fn finalize_from_reader<R: std::io::Read>(
        self,
        mut reader: R,
    ) -> TranscriptResult<TranscriptRng<H>> {
        let mut entropy = Zeroizing::new([0u8; ENTROPY_LEN]);
        reader.read_exact(&mut entropy[..]).map_err(|e| {
            warn!("entropy source failed while finalizing transcript rng: {e}");
            EntropySourceError::from(e)
        })?;
        Ok(self.finalize_with_entropy(&entropy))
    }

    fn finalize_with_entropy(mut self, entropy: &[u8; ENTROPY_LEN]) -> TranscriptRng<H> {
        trace!("rng meta-AD : b\"{}\"", RNG_LABEL.escape_ascii());
        self.ds
            .absorb_metadata_unchecked(RNG_LABEL)
            .rekey_unchecked(entropy);
        TranscriptRng { ds: self.ds }
    }
}

impl<H: DuplexInterface, S: BuilderState> core::fmt::Debug for TranscriptRngBuilder<H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TranscriptRngBuilder")
            .field("state", &core::any::type_name::<S>())
            .finish_non_exhaustive()
    }
}

/// A cryptographically-secure random number generator bound to a transcript and to the prover's witnesses.
///
/// Every read frames its length as metadata, then squeezes. The state advances at each call,
/// so that outputs never repeat.
pub struct TranscriptRng<H = DefaultHash>
where
    H: DuplexInterface,
{
    ds: H,
}

impl<H: DuplexInterface> TranscriptRng<H> {
    /// Fill `dest` with random bytes, returning the number of bytes written (always `dest.len()`).
    ///
    /// # Panics
    ///
    /// If `dest` is longer than `u32::MAX` bytes.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        self.squeeze_framed(dest)
    }

    // Length only, no label.
    fn squeeze_framed(&mut self, dest: &mut [u8]) -> usize {
        self.ds
            .absorb_metadata_unchecked(&encode_usize_as_u32(dest.len()))
            .squeeze_unchecked(dest);
        dest.len()
    }
}

impl<H: DuplexInterface> RngCore for TranscriptRng<H> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.squeeze_framed(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<H: DuplexInterface> CryptoRng for TranscriptRng<H> {}

impl<H: DuplexInterface> std::io::Read for TranscriptRng<H> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.squeeze_framed(buf))
    }
}

impl<H: DuplexInterface> core::fmt::Debug for TranscriptRng<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TranscriptRng").finish_non_exhaustive()
    }
}
