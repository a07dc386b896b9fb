// Required Ports - interfaces the host application may implement
use crate::codec::Envelope;
use crate::ports::provided::BitfieldError;

/// Blob codec
/// Turns an `Envelope` into text and back. The bitfield never picks a format itself.
pub trait Codec {
    /// Encode the envelope into a blob
    fn encode(&self, envelope: &Envelope) -> Result<String, BitfieldError>;

    /// Decode a blob. Missing `options` or `value` must be an error.
    fn decode(&self, blob: &str) -> Result<Envelope, BitfieldError>;
}

