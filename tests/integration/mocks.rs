// Mock codecs for testing
use option_bitfield::{BitfieldError, Codec, Envelope};
use std::cell::RefCell;

/// Keeps envelopes in memory and hands out their slot number as the blob.
#[derive(Debug, Default)]
pub struct MockCodec {
    slots: RefCell<Vec<Envelope>>,
}

#[allow(dead_code)]
impl MockCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<Envelope> {
        self.slots.borrow().clone()
    }
}

impl Codec for MockCodec {
    fn encode(&self, envelope: &Envelope) -> Result<String, BitfieldError> {
        let mut slots = self.slots.borrow_mut();
        slots.push(envelope.clone());
        Ok((slots.len() - 1).to_string())
    }

    fn decode(&self, blob: &str) -> Result<Envelope, BitfieldError> {
        let slot: usize = blob
            .parse()
            .map_err(|_| BitfieldError::DeserializeError(format!("not a slot: '{}'", blob)))?;
        self.slots
            .borrow()
            .get(slot)
            .cloned()
            .ok_or_else(|| BitfieldError::DeserializeError(format!("empty slot {}", slot)))
    }
}

/// Fails every call.
#[derive(Debug, Default)]
pub struct BrokenCodec;

impl Codec for BrokenCodec {
    fn encode(&self, _envelope: &Envelope) -> Result<String, BitfieldError> {
        Err(BitfieldError::SerializeError("broken".to_string()))
    }

    fn decode(&self, _blob: &str) -> Result<Envelope, BitfieldError> {
        Err(BitfieldError::DeserializeError("broken".to_string()))
    }
}
