/// Byte-oriented transcript operations.
///
/// Protocol code written against this trait works with any [`crate::Transcript`],
/// regardless of the duplex underneath.
///
/// ```
/// use merlin_transcripts::{ByteTranscript, Transcript};
///
/// fn commit_and_challenge<T: ByteTranscript>(transcript: &mut T, commitment: &[u8]) -> [u8; 16] {
///     transcript.public_bytes(b"commitment", commitment);
///     transcript.challenge_array(b"c")
/// }
///
/// let mut transcript = Transcript::new(b"example protocol");
/// let c = commit_and_challenge(&mut transcript, b"R");
/// assert_ne!(c, [0u8; 16]);
/// ```
pub trait ByteTranscript {
    /// Absorb a labeled public message.
    fn public_bytes(&mut self, label: &'static [u8], input: &[u8]);

    /// Fill `output` with labeled challenge bytes.
    fn fill_challenge_bytes(&mut self, label: &'static [u8], output: &mut [u8]);

    #[inline(always)]
    fn challenge_array<const N: usize>(&mut self, label: &'static [u8]) -> [u8; N] {
        let mut output = [0u8; N];
        self.fill_challenge_bytes(label, &mut output);
        output
    }
}
