pub mod common;
pub mod ports;
pub mod codec;
pub mod bitfield;

pub use common::{LogFormat, OptionMap};
pub use bitfield::{Bitfield, Register};
pub use codec::{Envelope, JsonCodec};
#[cfg(feature = "yaml")]
pub use codec::YamlCodec;

pub use ports::provided::{BitfieldError, Flags, Restore};
pub use ports::required::Codec;
