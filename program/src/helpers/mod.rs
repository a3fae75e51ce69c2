pub mod base58;
pub mod constant;

pub use base58::*;
pub use constant::*;
