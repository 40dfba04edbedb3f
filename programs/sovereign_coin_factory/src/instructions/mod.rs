use super::*;

pub mod admin;
pub mod finalize_setup;
pub mod initialize_stablecoin;
pub mod setup_mint;
pub mod setup_token_accounts;

pub use admin::*;
pub use finalize_setup::*;
pub use initialize_stablecoin::*;
pub use setup_mint::*;
pub use setup_token_accounts::*;
