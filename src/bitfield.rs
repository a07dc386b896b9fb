use crate::codec::Envelope;
use crate::common::{bit, OptionMap};
use crate::ports::provided::{BitfieldError, Flags, Restore};
use crate::ports::required::Codec;
use crate::{err_log, fn_log};
use std::fmt;

/// A register value, given either as an integer or as a base-2 literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Register {
    Int(u64),
    Binary(String),
}

impl Register {
    fn resolve(self) -> Result<u64, BitfieldError> {
        match self {
            Register::Int(value) => Ok(value),
            Register::Binary(s) => bit::parse_binary(&s).map_err(BitfieldError::ParseError),
        }
    }
}

impl From<u64> for Register {
    fn from(value: u64) -> Self {
        Register::Int(value)
    }
}

impl From<&str> for Register {
    fn from(s: &str) -> Self {
        Register::Binary(s.to_string())
    }
}

impl From<String> for Register {
    fn from(s: String) -> Self {
        Register::Binary(s)
    }
}

/// Named options packed into one `u64` register.
///
/// Each declared name owns the bit at its position in the declaration list.
/// At most [`bit::REGISTER_BITS`] options can be declared.
///
/// # Examples
///
/// ```
/// use option_bitfield::{Bitfield, Flags};
///
/// let mut bf = Bitfield::with_options(["a", "b", "c", "d", "e", "f", "g", "h"]).unwrap();
/// bf.on("h");
/// bf.on("e");
///
/// assert_eq!(bf.value(), 144);
/// assert_eq!(bf.options_on(), vec!["e", "h"]);
/// assert_eq!(bf.to_text(), "10010000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitfield {
    options: OptionMap,
    value: u64,
}

impl Bitfield {
    /// Declares the options and sets the initial register.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::{Bitfield, BitfieldError, Flags};
    ///
    /// let bf = Bitfield::new(["read", "write", "exec"], "101").unwrap();
    /// assert!(bf.is_on("read"));
    /// assert!(bf.is_off("write"));
    /// assert!(bf.is_on("exec"));
    ///
    /// let bf = Bitfield::new(["read", "write", "exec"], 2u64).unwrap();
    /// assert_eq!(bf.options_on(), vec!["write"]);
    ///
    /// assert!(matches!(
    ///     Bitfield::new(["read"], "12"),
    ///     Err(BitfieldError::ParseError(_))
    /// ));
    /// ```
    pub fn new<I, S>(options: I, initial: impl Into<Register>) -> Result<Self, BitfieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = OptionMap::from_names(options)?;
        let value = initial.into().resolve()?;
        fn_log!("Bitfield", "new", &format!("{} options", options.len()), &crate::common::LogFormat::format_register(value));
        Ok(Self { options, value })
    }

    pub fn with_options<I, S>(options: I) -> Result<Self, BitfieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(options, 0u64)
    }

    /// Replaces the register. A malformed binary literal leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::{Bitfield, Flags};
    ///
    /// let mut bf = Bitfield::with_options(["a", "b"]).unwrap();
    /// bf.set_value("10").unwrap();
    /// assert_eq!(bf.value(), 2);
    ///
    /// assert!(bf.set_value("2").is_err());
    /// assert_eq!(bf.value(), 2);
    /// ```
    pub fn set_value(&mut self, value: impl Into<Register>) -> Result<(), BitfieldError> {
        let value = value.into().resolve()?;
        fn_log!("Bitfield", "set_value", &crate::common::LogFormat::format_register(value));
        self.value = value;
        Ok(())
    }

    pub fn index_of(&self, option: &str) -> Option<u32> {
        self.options.index_of(option)
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Base-2 rendering of the register, `"0"` when nothing is set.
    pub fn to_text(&self) -> String {
        bit::to_binary(self.value)
    }

    /// Encodes the option mapping and the register into one blob.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::{Bitfield, JsonCodec};
    ///
    /// let bf = Bitfield::new(["a", "b"], 2u64).unwrap();
    /// let blob = bf.serialize(&JsonCodec).unwrap();
    /// assert_eq!(blob, r#"{"version":1,"options":{"a":0,"b":1},"value":2}"#);
    /// ```
    pub fn serialize<C: Codec + ?Sized>(&self, codec: &C) -> Result<String, BitfieldError> {
        fn_log!("Bitfield", "serialize");
        codec.encode(&Envelope::new(self.options.clone(), self.value))
    }

    /// Restores options and register from a blob.
    ///
    /// An unusable blob is ignored: nothing changes and `Restore::Ignored` is
    /// returned. Use [`Bitfield::try_deserialize`] to see the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::{Bitfield, Flags, JsonCodec, Restore};
    ///
    /// let mut bf = Bitfield::default();
    /// assert_eq!(bf.deserialize(&JsonCodec, r#"{"value":1}"#), Restore::Ignored);
    ///
    /// let blob = r#"{"options":{"a":0,"b":1},"value":2}"#;
    /// assert_eq!(bf.deserialize(&JsonCodec, blob), Restore::Applied);
    /// assert!(bf.is_on("b"));
    /// ```
    pub fn deserialize<C: Codec + ?Sized>(&mut self, codec: &C, blob: &str) -> Restore {
        fn_log!("Bitfield", "deserialize", blob);
        match Self::decode(codec, blob) {
            Ok(envelope) => {
                self.options = envelope.options;
                self.value = envelope.value;
                Restore::Applied
            }
            Err(_e) => {
                err_log!("Bitfield", "deserialize", &_e.to_string());
                Restore::Ignored
            }
        }
    }

    /// Builds a bitfield from a blob, reporting an unusable blob as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::{Bitfield, BitfieldError, JsonCodec};
    ///
    /// let err = Bitfield::try_deserialize(&JsonCodec, r#"{"options":{}}"#).unwrap_err();
    /// assert!(matches!(err, BitfieldError::DeserializeError(_)));
    /// ```
    pub fn try_deserialize<C: Codec + ?Sized>(codec: &C, blob: &str) -> Result<Self, BitfieldError> {
        let envelope = Self::decode(codec, blob)?;
        Ok(Self {
            options: envelope.options,
            value: envelope.value,
        })
    }

    fn decode<C: Codec + ?Sized>(codec: &C, blob: &str) -> Result<Envelope, BitfieldError> {
        let envelope = codec.decode(blob)?;
        envelope.validate()?;
        Ok(envelope)
    }
}

impl Flags for Bitfield {
    fn value(&self) -> u64 {
        self.value
    }

    fn is_on(&self, option: &str) -> bool {
        match self.index_of(option) {
            Some(index) => bit::get(self.value, index),
            None => false,
        }
    }

    fn is_off(&self, option: &str) -> bool {
        match self.index_of(option) {
            Some(index) => !bit::get(self.value, index),
            None => false,
        }
    }

    fn on(&mut self, option: &str) {
        fn_log!("Bitfield", "on", option);
        if let Some(index) = self.index_of(option) {
            self.value = bit::set(self.value, index);
        }
    }

    fn off(&mut self, option: &str) {
        fn_log!("Bitfield", "off", option);
        if let Some(index) = self.index_of(option) {
            self.value = bit::clear(self.value, index);
        }
    }

    fn options_on(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|(_, index)| bit::get(self.value, *index))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl fmt::Display for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.value)
    }
}
