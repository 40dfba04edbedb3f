use super::*;

pub mod factory;
pub mod stablecoin;

pub use factory::*;
pub use stablecoin::*;
