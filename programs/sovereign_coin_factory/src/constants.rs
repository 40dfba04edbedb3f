use super::*;

pub const FACTORY_SEED: &[u8] = b"factory";
pub const SOVEREIGN_COIN_SEED: &[u8] = b"sovereign_coin";

pub const MAX_BOND_MAPPINGS: usize = 32;

pub const MAX_FIAT_CURRENCY_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 64;

pub const MIN_BOND_RATING: u8 = 1;  // AAA
pub const MAX_BOND_RATING: u8 = 10;
pub const BOND_RATING_ORDINALS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

pub const MAX_PERCENTAGE: u8 = 100;
// Number of rating steps between the best and worst ordinal
pub const RESERVE_RATING_STEPS: u16 = (MAX_BOND_RATING - MIN_BOND_RATING) as u16;

const_assert!(MAX_BOND_MAPPINGS <= u8::MAX as usize);
const_assert!(MAX_SYMBOL_LEN <= 32); // PDA seed limit
const_assert!(BOND_RATING_ORDINALS.len() == MAX_BOND_RATING as usize);
