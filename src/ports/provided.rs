#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitfieldError {
    TooManyOptions(usize),
    ParseError(String),
    SerializeError(String),
    DeserializeError(String),
}

impl std::fmt::Display for BitfieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitfieldError::TooManyOptions(count) => write!(
                f,
                "TooManyOptions: {} options declared, register holds {}",
                count,
                crate::common::bit::REGISTER_BITS
            ),
            BitfieldError::ParseError(msg)       => write!(f, "ParseError: {}", msg),
            BitfieldError::SerializeError(msg)   => write!(f, "SerializeError: {}", msg),
            BitfieldError::DeserializeError(msg) => write!(f, "DeserializeError: {}", msg),
        }
    }
}

impl std::error::Error for BitfieldError {}

/// Outcome of a lenient restore from a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restore {
    /// Options and value were replaced from the blob.
    Applied,
    /// The blob was unusable; the receiver kept its prior state.
    Ignored,
}

impl Restore {
    pub fn is_applied(self) -> bool {
        self == Restore::Applied
    }
}

/// Query and toggle named options. Unknown names are never an error.
pub trait Flags {
    /// Raw register.
    fn value(&self) -> u64;

    /// `false` for unknown options.
    fn is_on(&self, option: &str) -> bool;

    /// `false` for unknown options, so an unknown option is neither on nor off.
    fn is_off(&self, option: &str) -> bool;

    /// No-op for unknown options.
    fn on(&mut self, option: &str);

    /// No-op for unknown options.
    fn off(&mut self, option: &str);

    /// Names of all set options, in declaration order.
    fn options_on(&self) -> Vec<String>;
}
