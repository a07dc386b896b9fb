use crate::common::OptionMap;
use crate::ports::provided::BitfieldError;
use crate::ports::required::Codec;
use serde::{Deserialize, Serialize};

pub const ENVELOPE_VERSION: u32 = 1;

fn default_version() -> u32 {
    ENVELOPE_VERSION
}

/// Data model of a bitfield blob: the option mapping travels with the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Absent in blobs written before the field existed.
    #[serde(default = "default_version")]
    pub version: u32,
    pub options: OptionMap,
    pub value: u64,
}

impl Envelope {
    pub fn new(options: OptionMap, value: u64) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            options,
            value,
        }
    }

    /// Checks version and mapping before the envelope may replace a bitfield's state.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::codec::Envelope;
    /// use option_bitfield::common::OptionMap;
    ///
    /// let envelope = Envelope::new(OptionMap::from_names(["a"]).unwrap(), 1);
    /// assert!(envelope.validate().is_ok());
    ///
    /// let future = Envelope { version: 99, ..envelope };
    /// assert!(future.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BitfieldError> {
        if self.version > ENVELOPE_VERSION {
            return Err(BitfieldError::DeserializeError(format!(
                "unsupported envelope version {}",
                self.version
            )));
        }
        self.options
            .validate()
            .map_err(BitfieldError::DeserializeError)
    }
}

/// JSON blobs: `{"version":1,"options":{"a":0},"value":1}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, envelope: &Envelope) -> Result<String, BitfieldError> {
        serde_json::to_string(envelope)
            .map_err(|e| BitfieldError::SerializeError(format!("JSON serialize error: {}", e)))
    }

    fn decode(&self, blob: &str) -> Result<Envelope, BitfieldError> {
        serde_json::from_str(blob)
            .map_err(|e| BitfieldError::DeserializeError(format!("JSON parse error: {}", e)))
    }
}

/// YAML blobs, same fields as [`JsonCodec`].
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

#[cfg(feature = "yaml")]
impl Codec for YamlCodec {
    fn encode(&self, envelope: &Envelope) -> Result<String, BitfieldError> {
        serde_yaml_ng::to_string(envelope)
            .map_err(|e| BitfieldError::SerializeError(format!("YAML serialize error: {}", e)))
    }

    fn decode(&self, blob: &str) -> Result<Envelope, BitfieldError> {
        serde_yaml_ng::from_str(blob)
            .map_err(|e| BitfieldError::DeserializeError(format!("YAML parse error: {}", e)))
    }
}
