//! Wire format of the registration server and request sequencing.

pub mod sequence;
pub mod wire;

pub use sequence::RequestSequence;
pub use wire::{decode_registration_response, WireError};
