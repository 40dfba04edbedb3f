use super::*;

#[error_code]
pub enum SovereignFactoryError {
    #[msg("Invalid yield distribution. Must sum to 100%")]
    InvalidYieldDistribution,
    #[msg("Invalid reserve percentage. Must be greater than 0 and at most 100%")]
    InvalidReservePercentage,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Name is too long")]
    NameTooLong,
    #[msg("Symbol is too long")]
    SymbolTooLong,
    #[msg("URI is too long")]
    UriTooLong,
    #[msg("There has been an arithmetic overflow error")]
    ArithmeticOverflow,
    #[msg("Bond Rating is Invalid")]
    InvalidBondRating,
    #[msg("Fiat currency code is longer than 8 bytes")]
    FiatCurrencyTooLong,
    #[msg("The maximum bond mapping limit has been reached")]
    MaxBondMappingsReached,
    #[msg("An active bond mapping already exists for this fiat currency")]
    BondMappingAlreadyExists,
    #[msg("Name, symbol and URI must not contain zero bytes")]
    InvalidTextField,
    #[msg("No bond mapping found for the specified fiat currency")]
    NoBondMappingForCurrency,
    #[msg("Invalid fiat currency")]
    InvalidFiatCurrency,
    #[msg("The provided bond mint does not match the expected one for this currency")]
    InvalidBondMint,
    #[msg("The sovereign coin mint has already been set up")]
    MintAlreadySet,
    #[msg("The sovereign coin mint has not been set up yet")]
    MintNotSet,
    #[msg("Invalid sovereign coin mint")]
    InvalidSovereignCoinMint,
    #[msg("The reserve token accounts have already been set up")]
    TokenAccountsAlreadySet,
}
