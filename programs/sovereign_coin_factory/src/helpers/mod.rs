use super::*;

pub mod fixed_bytes;
pub mod reserve;

pub use fixed_bytes::*;
pub use reserve::*;
