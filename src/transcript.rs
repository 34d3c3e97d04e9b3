use log::trace;

use crate::duplex::DuplexInterface;
use crate::rng::{Forked, TranscriptRngBuilder};
use crate::traits::ByteTranscript;
use crate::DefaultHash;

/// Protocol identifier every Merlin transcript is keyed to.
pub(crate) const MERLIN_PROTOCOL_LABEL: &[u8] = b"Merlin v1.0";
/// Label of the mandatory first message, carrying the application label.
pub(crate) const DOMAIN_SEPARATOR_LABEL: &[u8] = b"dom-sep";

/// Encode a length as the 4-byte little-endian integer used in framing.
///
/// # Panics
///
/// Lengths that do not fit in 32 bits are a contract violation.
pub(crate) fn encode_usize_as_u32(x: usize) -> [u8; 4] {
    assert!(
        x <= (u32::MAX as usize),
        "length {x} does not fit in 32 bits"
    );
    (x as u32).to_le_bytes()
}

/// `label || le32(len)`, the metadata framing of every labeled operation.
///
/// It must be absorbed in a single metadata operation.
pub(crate) fn frame(label: &[u8], len: usize) -> Vec<u8> {
    let mut framed = Vec::with_capacity(label.len() + 4);
    framed.extend_from_slice(label);
    framed.extend_from_slice(&encode_usize_as_u32(len));
    framed
}

/// A transcript of a public-coin argument.
///
/// The prover's messages are added to the transcript using [`Transcript::append_message`],
/// and the verifier's challenges are computed using [`Transcript::challenge_bytes`].
///
/// Every operation is bound to the entire history of the transcript:
/// two transcripts produce the same challenges only if they were created with the same
/// application label and received the same labeled messages, in the same order.
///
/// Secret randomness for the prover is obtained by forking the transcript with
/// [`Transcript::build_rng`].
///
/// ```
/// use merlin_transcripts::Transcript;
///
/// let mut transcript = Transcript::new(b"test protocol");
/// transcript.append_message(b"some label", b"some data");
///
/// let mut challenge = [0u8; 32];
/// transcript.challenge_bytes(b"challenge", &mut challenge);
/// assert_eq!(
///     challenge[..4],
///     [0xd5, 0xa2, 0x19, 0x72],
/// );
/// ```
#[derive(Clone)]
pub struct Transcript<H = DefaultHash>
where
    H: DuplexInterface,
{
    ds: H,
}

impl Transcript {
    /// Initialize a new transcript with the supplied application label,
    /// used for domain separation.
    ///
    /// The application label is absorbed as the first message, under the label `dom-sep`.
    pub fn new(app_label: &[u8]) -> Self {
        Self::init(app_label)
    }
}

impl<H: DuplexInterface> Transcript<H> {
    /// Initialize a new transcript over the duplex `H`.
    ///
    /// See [`Transcript::new`].
    pub fn init(app_label: &[u8]) -> Self {
        trace!(
            "Initialize STROBE-{}(b\"{}\")",
            H::SECURITY_BITS,
            MERLIN_PROTOCOL_LABEL.escape_ascii()
        );
        let mut transcript = Self {
            ds: H::new(MERLIN_PROTOCOL_LABEL),
        };
        transcript.append_message(DOMAIN_SEPARATOR_LABEL, app_label);
        transcript
    }

    /// Append a prover's `message` to the transcript.
    ///
    /// The `label` parameter is metadata about the message,
    /// and is also appended to the transcript.
    ///
    /// # Panics
    ///
    /// If `message` is longer than `u32::MAX` bytes.
    pub fn append_message(&mut self, label: &'static [u8], message: &[u8]) {
        trace!(
            "meta-AD : b\"{}\" || LE32({})",
            label.escape_ascii(),
            message.len()
        );
        self.ds
            .absorb_metadata_unchecked(&frame(label, message.len()))
            .absorb_unchecked(message);
        trace!("AD : {} bytes", message.len());
    }

    /// Append `x` as an 8-byte little-endian message.
    ///
    /// This is a convenience for small integers: it is equivalent to
    /// `append_message(label, &x.to_le_bytes())`.
    pub fn append_u64(&mut self, label: &'static [u8], x: u64) {
        self.append_message(label, &x.to_le_bytes());
    }

    /// Fill `dest` with the verifier's challenge bytes.
    ///
    /// The `label` parameter is metadata about the challenge,
    /// and is also appended to the transcript.
    /// Extraction advances the transcript: asking twice for the same label
    /// yields different bytes.
    ///
    /// # Panics
    ///
    /// If `dest` is longer than `u32::MAX` bytes.
    pub fn challenge_bytes(&mut self, label: &'static [u8], dest: &mut [u8]) {
        trace!(
            "meta-AD : b\"{}\" || LE32({})",
            label.escape_ascii(),
            dest.len()
        );
        self.ds
            .absorb_metadata_unchecked(&frame(label, dest.len()))
            .squeeze_unchecked(dest);
        trace!("PRF : {} bytes", dest.len());
    }

    /// Extract `len` challenge bytes into a fresh vector.
    ///
    /// See [`Transcript::challenge_bytes`].
    pub fn extract_bytes(&mut self, label: &'static [u8], len: usize) -> Vec<u8> {
        let mut output = vec![0u8; len];
        self.challenge_bytes(label, &mut output);
        output
    }

    /// Fork the transcript into a [`TranscriptRngBuilder`], to derive the prover's secret randomness.
    ///
    /// The transcript itself is left untouched.
    pub fn build_rng(&self) -> TranscriptRngBuilder<H, Forked> {
        TranscriptRngBuilder::new(self.ds.clone())
    }
}

impl<H: DuplexInterface> ByteTranscript for Transcript<H> {
    #[inline]
    fn public_bytes(&mut self, label: &'static [u8], input: &[u8]) {
        self.append_message(label, input)
    }

    #[inline]
    fn fill_challenge_bytes(&mut self, label: &'static [u8], output: &mut [u8]) {
        self.challenge_bytes(label, output)
    }
}

impl<H: DuplexInterface> core::fmt::Debug for Transcript<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transcript").finish_non_exhaustive()
    }
}
