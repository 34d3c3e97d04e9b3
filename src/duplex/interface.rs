/// A [`DuplexInterface`] is an abstract interface for the keyed duplex driving a transcript.
///
/// Every method consumes or produces one *complete* operation: a transcript that wants
/// to authenticate `label || le32(len)` as metadata passes the concatenation in a single
/// call. Splitting it into two calls is a different byte stream.
///
/// [`Clone`] forks the state: the copy evolves independently of the original.
/// We require [`zeroize::Zeroize`] so that secret-dependent states can be securely erased.
///
/// **HAZARD**: Don't implement this trait unless you know what you are doing.
/// Consider using [`crate::duplex::Strobe128`], which is what every other Merlin implementation uses.
pub trait DuplexInterface: Clone + zeroize::Zeroize {
    /// Security level of the construction, in bits.
    const SECURITY_BITS: usize;

    /// Initializes a new duplex keyed to a protocol identifier.
    fn new(protocol_label: &[u8]) -> Self;

    /// Absorbs framing information, authenticated separately from the payload.
    fn absorb_metadata_unchecked(&mut self, input: &[u8]) -> &mut Self;

    /// Absorbs payload data.
    fn absorb_unchecked(&mut self, input: &[u8]) -> &mut Self;

    /// Irreversibly mixes `key` into the state.
    ///
    /// Future outputs depend on `key`, and the state no longer holds enough
    /// information to recover what was absorbed before.
    fn rekey_unchecked(&mut self, key: &[u8]) -> &mut Self;

    /// Squeezes pseudorandom bytes out, advancing the state.
    fn squeeze_unchecked(&mut self, output: &mut [u8]) -> &mut Self;
}
