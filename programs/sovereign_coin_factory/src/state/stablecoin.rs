use super::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct SovereignCoin {
    pub bump: u8,
    pub authority: Pubkey, // The issuer of this sovereign coin
    pub factory: Pubkey,   // Reference to the factory that created this coin

    pub name: [u8; MAX_NAME_LEN],
    pub symbol: [u8; MAX_SYMBOL_LEN], // e.g. "USDS", "MXNS"
    pub decimals: u8,                 // Mirrors the fiat mint
    pub uri: [u8; MAX_URI_LEN],       // Off-chain metadata JSON
    pub target_fiat_currency: [u8; MAX_FIAT_CURRENCY_LEN],

    // Snapshot of the bond mapping at creation
    pub bond_mint: Pubkey,
    pub bond_account: Pubkey, // The Stablebond account PDA
    pub bond_rating: u8,
    pub required_reserve_percentage: u8,

    pub mint: Pubkey,
    pub fiat_reserve: Pubkey,
    pub bond_holding: Pubkey,

    pub total_supply: u64,
    pub fiat_amount: u64,
    pub bond_amount: u64,
}

impl SovereignCoin {
    /// Builds a fresh coin record from the factory's registry.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn new(
        authority: Pubkey,
        bump: u8,
        factory_key: Pubkey,
        factory: &Factory,
        args: &SovereignCoinArgs,
        bond_token_mint: &Pubkey,
        decimals: u8,
    ) -> Result<Self> {
        args.validate()?;

        let name = pad_bytes(&args.name).ok_or(SovereignFactoryError::NameTooLong)?;
        let symbol = pad_bytes(&args.symbol).ok_or(SovereignFactoryError::SymbolTooLong)?;
        let uri = pad_bytes(&args.uri).ok_or(SovereignFactoryError::UriTooLong)?;

        let mapping = factory.resolve_bond_mapping(&args.fiat_currency, bond_token_mint)?;

        let required_reserve_percentage = calculate_required_reserve(
            factory.min_fiat_reserve_percentage,
            mapping.bond_rating,
            factory.bond_reserve_multiplier,
        )?;

        let (bond_account, _) = find_bond_pda(mapping.bond_mint);

        Ok(Self {
            bump,
            authority,
            factory: factory_key,
            name,
            symbol,
            decimals,
            uri,
            target_fiat_currency: mapping.fiat_currency,
            bond_mint: mapping.bond_mint,
            bond_account,
            bond_rating: mapping.bond_rating,
            required_reserve_percentage,
            mint: Pubkey::default(),
            fiat_reserve: Pubkey::default(),
            bond_holding: Pubkey::default(),
            total_supply: 0,
            fiat_amount: 0,
            bond_amount: 0,
        })
    }

    pub fn name(&self) -> String {
        bytes_to_string(&self.name)
    }

    pub fn symbol(&self) -> String {
        bytes_to_string(&self.symbol)
    }

    pub fn uri(&self) -> String {
        bytes_to_string(&self.uri)
    }

    pub fn fiat_currency(&self) -> String {
        bytes_to_string(&self.target_fiat_currency)
    }

    /// Symbol bytes as used in the PDA seeds.
    pub fn symbol_seed(&self) -> &[u8] {
        trim_bytes(&self.symbol)
    }

    pub fn has_mint(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn has_token_accounts(&self) -> bool {
        self.fiat_reserve != Pubkey::default() || self.bond_holding != Pubkey::default()
    }
}
