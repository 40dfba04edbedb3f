use super::*;

pub mod initialize_factory;
pub mod register_bond;

pub use initialize_factory::*;
pub use register_bond::*;
