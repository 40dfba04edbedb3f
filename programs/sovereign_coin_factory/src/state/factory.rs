use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, InitSpace)]
pub struct BondCurrencyMapping {
    pub active: bool,
    pub fiat_currency: [u8; MAX_FIAT_CURRENCY_LEN], // Currency code (e.g., "USD", "MXN")
    pub bond_mint: Pubkey,                          // The Stablebond token mint
    pub bond_rating: u8,                            // Bond rating (1-10)
}

impl BondCurrencyMapping {
    pub fn fiat_currency(&self) -> String {
        bytes_to_string(&self.fiat_currency)
    }

    pub fn matches(&self, fiat_currency: &str) -> bool {
        self.active && fixed_bytes_eq(&self.fiat_currency, fiat_currency)
    }
}

/// Global parameters supplied once at factory creation.
#[derive(Clone, Copy, Debug)]
pub struct FactoryParams {
    pub min_fiat_reserve: u8,
    pub bond_reserve_multiplier: u8,
    pub yield_share_protocol: u8,
    pub yield_share_issuer: u8,
    pub yield_share_holders: u8,
}

impl FactoryParams {
    pub fn validate(&self) -> Result<()> {
        let shares = [
            self.yield_share_protocol,
            self.yield_share_issuer,
            self.yield_share_holders,
        ];

        let total: u16 = shares.iter().map(|&share| share as u16).sum();
        require!(
            total == MAX_PERCENTAGE as u16,
            SovereignFactoryError::InvalidYieldDistribution
        );
        require!(
            shares.iter().all(|&share| share <= MAX_PERCENTAGE),
            SovereignFactoryError::InvalidYieldDistribution
        );

        require!(
            self.min_fiat_reserve > 0 && self.min_fiat_reserve <= MAX_PERCENTAGE,
            SovereignFactoryError::InvalidReservePercentage
        );

        Ok(())
    }
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Factory {
    pub bump: u8,
    pub authority: Pubkey, // Admin who can update certain parameters
    pub treasury: Pubkey,  // Treasury account to collect fees if any

    pub total_sovereign_coins: u64,   // Count of all sovereign coins created
    pub total_supply_all_coins: u128, // Combined supply of all coins

    pub bond_rating_ordinals: [u8; 10], // AAA=1, AA=2, etc.

    pub min_fiat_reserve_percentage: u8, // Base 20% in the reserve formula
    pub bond_reserve_multiplier: u8,     // 30 in 30/9

    pub yield_share_protocol: u8,
    pub yield_share_issuer: u8,
    pub yield_share_holders: u8,

    pub mint_fee_bps: u16,
    pub burn_fee_bps: u16,

    pub bond_mappings_count: u8,
    pub bond_mappings: [BondCurrencyMapping; MAX_BOND_MAPPINGS],
}

impl Factory {
    pub fn new(authority: Pubkey, bump: u8, params: FactoryParams) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            bump,
            authority,
            treasury: authority,
            total_sovereign_coins: 0,
            total_supply_all_coins: 0,
            bond_rating_ordinals: BOND_RATING_ORDINALS,
            min_fiat_reserve_percentage: params.min_fiat_reserve,
            bond_reserve_multiplier: params.bond_reserve_multiplier,
            yield_share_protocol: params.yield_share_protocol,
            yield_share_issuer: params.yield_share_issuer,
            yield_share_holders: params.yield_share_holders,
            mint_fee_bps: 0,
            burn_fee_bps: 0,
            bond_mappings_count: 0,
            bond_mappings: [BondCurrencyMapping::default(); MAX_BOND_MAPPINGS],
        })
    }

    /// Populated registry slots in insertion order.
    pub fn bond_mappings(&self) -> &[BondCurrencyMapping] {
        let count = (self.bond_mappings_count as usize).min(MAX_BOND_MAPPINGS);
        &self.bond_mappings[..count]
    }

    /// First active mapping for the currency, in insertion order.
    pub fn find_bond_mapping(&self, fiat_currency: &str) -> Option<&BondCurrencyMapping> {
        self.bond_mappings()
            .iter()
            .find(|mapping| mapping.matches(fiat_currency))
    }

    /// Resolves the mapping for `fiat_currency` and checks it is backed by `bond_mint`.
    pub fn resolve_bond_mapping(
        &self,
        fiat_currency: &str,
        bond_mint: &Pubkey,
    ) -> Result<BondCurrencyMapping> {
        let mapping = *self
            .find_bond_mapping(fiat_currency)
            .ok_or(SovereignFactoryError::NoBondMappingForCurrency)?;

        require_keys_eq!(
            mapping.bond_mint,
            *bond_mint,
            SovereignFactoryError::InvalidBondMint
        );

        Ok(mapping)
    }

    /// Appends a mapping to the next free slot and returns its index.
    ///
    /// Nothing is written unless every check passes.
    pub fn register_bond_mapping(
        &mut self,
        fiat_currency: &str,
        bond_mint: Pubkey,
        bond_rating: u8,
    ) -> Result<u8> {
        let padded: [u8; MAX_FIAT_CURRENCY_LEN] =
            pad_bytes(fiat_currency).ok_or(SovereignFactoryError::FiatCurrencyTooLong)?;

        require!(
            is_valid_bond_rating(bond_rating),
            SovereignFactoryError::InvalidBondRating
        );

        require!(
            (self.bond_mappings_count as usize) < MAX_BOND_MAPPINGS,
            SovereignFactoryError::MaxBondMappingsReached
        );

        // Compare the code as it will read back from storage
        let code = fiat_currency.trim_end_matches('\0');
        require!(
            self.find_bond_mapping(code).is_none(),
            SovereignFactoryError::BondMappingAlreadyExists
        );

        require!(
            !code.is_empty() && !contains_nul(fiat_currency),
            SovereignFactoryError::InvalidFiatCurrency
        );

        let index = self.bond_mappings_count;
        self.bond_mappings[index as usize] = BondCurrencyMapping {
            active: true,
            fiat_currency: padded,
            bond_mint,
            bond_rating,
        };
        self.bond_mappings_count = index
            .checked_add(1)
            .ok_or(SovereignFactoryError::ArithmeticOverflow)?;

        Ok(index)
    }

    pub fn next_sovereign_coin_count(&self) -> Result<u64> {
        self.total_sovereign_coins
            .checked_add(1)
            .ok_or_else(|| SovereignFactoryError::ArithmeticOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_params() -> FactoryParams {
        FactoryParams {
            min_fiat_reserve: 20,
            bond_reserve_multiplier: 30,
            yield_share_protocol: 5,
            yield_share_issuer: 15,
            yield_share_holders: 80,
        }
    }

    fn factory() -> Factory {
        Factory::new(Pubkey::new_unique(), 255, default_params()).unwrap()
    }

    #[test]
    fn test_new_factory_defaults() {
        let authority = Pubkey::new_unique();
        let factory = Factory::new(authority, 254, default_params()).unwrap();

        assert_eq!(factory.bump, 254);
        assert_eq!(factory.authority, authority);
        assert_eq!(factory.treasury, authority);
        assert_eq!(factory.total_sovereign_coins, 0);
        assert_eq!(factory.total_supply_all_coins, 0);
        assert_eq!(factory.bond_rating_ordinals, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(factory.min_fiat_reserve_percentage, 20);
        assert_eq!(factory.bond_reserve_multiplier, 30);
        assert_eq!(factory.mint_fee_bps, 0);
        assert_eq!(factory.burn_fee_bps, 0);
        assert_eq!(factory.bond_mappings_count, 0);
        assert!(factory.bond_mappings.iter().all(|m| !m.active));
        assert!(factory.bond_mappings().is_empty());
    }

    #[test]
    fn test_yield_shares_must_sum_to_100() {
        let permutations = [(5, 15, 79), (5, 15, 81), (0, 0, 99), (34, 34, 33), (100, 1, 0)];

        for (protocol, issuer, holders) in permutations {
            let params = FactoryParams {
                yield_share_protocol: protocol,
                yield_share_issuer: issuer,
                yield_share_holders: holders,
                ..default_params()
            };
            assert_eq!(
                params.validate().unwrap_err(),
                SovereignFactoryError::InvalidYieldDistribution.into()
            );
        }

        let params = FactoryParams {
            yield_share_protocol: 0,
            yield_share_issuer: 0,
            yield_share_holders: 100,
            ..default_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_yield_shares_do_not_wrap() {
        // 200 + 100 + 56 wraps to 100 in u8 arithmetic
        let params = FactoryParams {
            yield_share_protocol: 200,
            yield_share_issuer: 100,
            yield_share_holders: 56,
            ..default_params()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            SovereignFactoryError::InvalidYieldDistribution.into()
        );
    }

    #[test]
    fn test_min_fiat_reserve_bounds() {
        for min_fiat_reserve in [0, 101, 255] {
            let params = FactoryParams {
                min_fiat_reserve,
                ..default_params()
            };
            assert_eq!(
                Factory::new(Pubkey::new_unique(), 255, params).unwrap_err(),
                SovereignFactoryError::InvalidReservePercentage.into()
            );
        }

        for min_fiat_reserve in [1, 100] {
            let params = FactoryParams {
                min_fiat_reserve,
                ..default_params()
            };
            assert!(Factory::new(Pubkey::new_unique(), 255, params).is_ok());
        }
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut factory = factory();
        let usd_bond = Pubkey::new_unique();
        let eur_bond = Pubkey::new_unique();

        assert_eq!(factory.register_bond_mapping("USD", usd_bond, 1).unwrap(), 0);
        assert_eq!(factory.register_bond_mapping("EUR", eur_bond, 3).unwrap(), 1);

        assert_eq!(factory.bond_mappings_count, 2);
        let mappings = factory.bond_mappings();
        assert_eq!(mappings[0].fiat_currency(), "USD");
        assert_eq!(mappings[0].fiat_currency, *b"USD\0\0\0\0\0");
        assert_eq!(mappings[0].bond_mint, usd_bond);
        assert_eq!(mappings[1].fiat_currency(), "EUR");
        assert_eq!(mappings[1].bond_rating, 3);
        assert!(mappings.iter().all(|m| m.active));
    }

    #[test]
    fn test_register_currency_length() {
        let mut factory = factory();

        assert!(factory
            .register_bond_mapping("ABCDEFGH", Pubkey::new_unique(), 5)
            .is_ok());
        assert_eq!(
            factory
                .register_bond_mapping("ABCDEFGHI", Pubkey::new_unique(), 5)
                .unwrap_err(),
            SovereignFactoryError::FiatCurrencyTooLong.into()
        );
        assert_eq!(factory.bond_mappings_count, 1);
    }

    #[test]
    fn test_register_rating_bounds() {
        let mut factory = factory();

        for rating in [0, 11] {
            assert_eq!(
                factory
                    .register_bond_mapping("USD", Pubkey::new_unique(), rating)
                    .unwrap_err(),
                SovereignFactoryError::InvalidBondRating.into()
            );
        }
        assert_eq!(factory.bond_mappings_count, 0);

        assert!(factory.register_bond_mapping("USD", Pubkey::new_unique(), 1).is_ok());
        assert!(factory.register_bond_mapping("EUR", Pubkey::new_unique(), 10).is_ok());
    }

    #[test]
    fn test_register_check_order() {
        let mut factory = factory();

        // Too long and bad rating: length is checked first
        assert_eq!(
            factory
                .register_bond_mapping("TOOLONGCODE", Pubkey::new_unique(), 0)
                .unwrap_err(),
            SovereignFactoryError::FiatCurrencyTooLong.into()
        );

        // Full registry and bad rating: rating is checked before capacity
        for i in 0..MAX_BOND_MAPPINGS {
            factory
                .register_bond_mapping(&format!("K{:02}", i), Pubkey::new_unique(), 1)
                .unwrap();
        }
        assert_eq!(
            factory
                .register_bond_mapping("USD", Pubkey::new_unique(), 0)
                .unwrap_err(),
            SovereignFactoryError::InvalidBondRating.into()
        );
        assert_eq!(
            factory
                .register_bond_mapping("USD", Pubkey::new_unique(), 11)
                .unwrap_err(),
            SovereignFactoryError::InvalidBondRating.into()
        );
    }

    #[test]
    fn test_register_rejects_nul_padded_codes() {
        let mut factory = factory();
        factory.register_bond_mapping("USD", Pubkey::new_unique(), 1).unwrap();

        // reads back as "USD" once stored
        assert_eq!(
            factory
                .register_bond_mapping("USD\0", Pubkey::new_unique(), 9)
                .unwrap_err(),
            SovereignFactoryError::BondMappingAlreadyExists.into()
        );

        for code in ["\0", "\0\0\0", "EUR\0", "E\0UR"] {
            assert_eq!(
                factory
                    .register_bond_mapping(code, Pubkey::new_unique(), 1)
                    .unwrap_err(),
                SovereignFactoryError::InvalidFiatCurrency.into(),
                "code {:?}",
                code
            );
        }

        assert_eq!(factory.bond_mappings_count, 1);
        assert!(factory.bond_mappings().iter().all(|m| m.fiat_currency() == "USD"));
    }

    #[test]
    fn test_register_capacity() {
        let mut factory = factory();

        for i in 0..MAX_BOND_MAPPINGS {
            let code = format!("C{:02}", i);
            factory
                .register_bond_mapping(&code, Pubkey::new_unique(), 1)
                .unwrap();
        }
        assert_eq!(factory.bond_mappings_count as usize, MAX_BOND_MAPPINGS);

        assert_eq!(
            factory
                .register_bond_mapping("NEW", Pubkey::new_unique(), 1)
                .unwrap_err(),
            SovereignFactoryError::MaxBondMappingsReached.into()
        );
        // capacity wins over the duplicate check
        assert_eq!(
            factory
                .register_bond_mapping("C00", Pubkey::new_unique(), 1)
                .unwrap_err(),
            SovereignFactoryError::MaxBondMappingsReached.into()
        );
        assert_eq!(factory.bond_mappings_count as usize, MAX_BOND_MAPPINGS);
    }

    #[test]
    fn test_register_rejects_active_duplicate() {
        let mut factory = factory();
        let original = Pubkey::new_unique();

        factory.register_bond_mapping("USD", original, 1).unwrap();
        assert_eq!(
            factory
                .register_bond_mapping("USD", Pubkey::new_unique(), 4)
                .unwrap_err(),
            SovereignFactoryError::BondMappingAlreadyExists.into()
        );

        assert_eq!(factory.bond_mappings_count, 1);
        assert_eq!(factory.find_bond_mapping("USD").unwrap().bond_mint, original);
    }

    #[test]
    fn test_register_allows_replacing_inactive() {
        let mut factory = factory();
        factory.register_bond_mapping("MXN", Pubkey::new_unique(), 6).unwrap();
        factory.bond_mappings[0].active = false;

        let replacement = Pubkey::new_unique();
        assert_eq!(factory.register_bond_mapping("MXN", replacement, 2).unwrap(), 1);

        let mapping = factory.find_bond_mapping("MXN").unwrap();
        assert_eq!(mapping.bond_mint, replacement);
        assert_eq!(mapping.bond_rating, 2);
    }

    #[test]
    fn test_register_rejects_empty_currency() {
        let mut factory = factory();
        assert_eq!(
            factory
                .register_bond_mapping("", Pubkey::new_unique(), 1)
                .unwrap_err(),
            SovereignFactoryError::InvalidFiatCurrency.into()
        );
        assert_eq!(factory.bond_mappings_count, 0);
    }

    #[test]
    fn test_find_skips_inactive_and_prefixes() {
        let mut factory = factory();
        factory.register_bond_mapping("USDX", Pubkey::new_unique(), 2).unwrap();
        factory.register_bond_mapping("US", Pubkey::new_unique(), 2).unwrap();

        assert!(factory.find_bond_mapping("USD").is_none());
        assert_eq!(factory.find_bond_mapping("US").unwrap().fiat_currency(), "US");

        factory.bond_mappings[1].active = false;
        assert!(factory.find_bond_mapping("US").is_none());
    }

    #[test]
    fn test_resolve_checks_bond_mint() {
        let mut factory = factory();
        let bond_mint = Pubkey::new_unique();
        factory.register_bond_mapping("USD", bond_mint, 1).unwrap();

        assert_eq!(
            factory.resolve_bond_mapping("USD", &bond_mint).unwrap().bond_mint,
            bond_mint
        );
        assert_eq!(
            factory
                .resolve_bond_mapping("USD", &Pubkey::new_unique())
                .unwrap_err(),
            SovereignFactoryError::InvalidBondMint.into()
        );
        assert_eq!(
            factory.resolve_bond_mapping("JPY", &bond_mint).unwrap_err(),
            SovereignFactoryError::NoBondMappingForCurrency.into()
        );
    }

    #[test]
    fn test_sovereign_coin_counter_overflow() {
        let mut factory = factory();
        assert_eq!(factory.next_sovereign_coin_count().unwrap(), 1);

        factory.total_sovereign_coins = u64::MAX;
        assert_eq!(
            factory.next_sovereign_coin_count().unwrap_err(),
            SovereignFactoryError::ArithmeticOverflow.into()
        );
    }
}
