// Ports - boundary between the bitfield and its host application

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;
