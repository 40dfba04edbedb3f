use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SovereignCoinArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub fiat_currency: String,
}

impl SovereignCoinArgs {
    pub fn validate(&self) -> Result<()> {
        require!(self.name.len() <= MAX_NAME_LEN, SovereignFactoryError::NameTooLong);
        require!(self.symbol.len() <= MAX_SYMBOL_LEN, SovereignFactoryError::SymbolTooLong);
        require!(self.uri.len() <= MAX_URI_LEN, SovereignFactoryError::UriTooLong);
        // Stored zero-padded, so a zero byte would change the value read back
        // and the symbol seed the setup instructions re-derive
        require!(
            ![&self.name, &self.symbol, &self.uri]
                .iter()
                .any(|field| contains_nul(field)),
            SovereignFactoryError::InvalidTextField
        );
        Ok(())
    }
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(args: SovereignCoinArgs)]
pub struct InitSovereignCoin<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
    )]
    pub factory: Box<Account<'info, Factory>>,

    #[account(
        init,
        payer = payer,
        space = 8 + SovereignCoin::INIT_SPACE,
        seeds = [SOVEREIGN_COIN_SEED, authority.key().as_ref(), args.symbol.as_bytes()],
        bump
    )]
    pub sovereign_coin: Box<Account<'info, SovereignCoin>>,

    pub fiat_token_mint: Box<InterfaceAccount<'info, Mint>>,
    pub bond_token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub system_program: Program<'info, System>,
}

impl InitSovereignCoin<'_> {
    pub fn validate(&self, args: &SovereignCoinArgs) -> Result<()> {
        args.validate()?;
        self.factory
            .resolve_bond_mapping(&args.fiat_currency, &self.bond_token_mint.key())?;
        Ok(())
    }

    pub fn handler(ctx: Context<Self>, args: SovereignCoinArgs) -> Result<()> {
        let coin = SovereignCoin::new(
            ctx.accounts.authority.key(),
            ctx.bumps.sovereign_coin,
            ctx.accounts.factory.key(),
            &ctx.accounts.factory,
            &args,
            &ctx.accounts.bond_token_mint.key(),
            ctx.accounts.fiat_token_mint.decimals,
        )?;
        let total_sovereign_coins = ctx.accounts.factory.next_sovereign_coin_count()?;

        ctx.accounts.factory.total_sovereign_coins = total_sovereign_coins;
        ctx.accounts.sovereign_coin.set_inner(coin);

        let sovereign_coin = &ctx.accounts.sovereign_coin;
        msg!(
            "Sovereign coin {} initialized for {} with {}% required reserve",
            args.symbol,
            args.fiat_currency,
            sovereign_coin.required_reserve_percentage
        );

        let clock = Clock::get()?;
        emit_cpi!(SovereignCoinInitializedEvent {
            authority: sovereign_coin.authority,
            sovereign_coin: sovereign_coin.key(),
            name: args.name,
            symbol: args.symbol,
            fiat_currency: args.fiat_currency,
            bond_mint: sovereign_coin.bond_mint,
            bond_account: sovereign_coin.bond_account,
            bond_rating: sovereign_coin.bond_rating,
            decimals: sovereign_coin.decimals,
            total_supply: sovereign_coin.total_supply,
            required_reserve_percentage: sovereign_coin.required_reserve_percentage,
            fiat_amount: sovereign_coin.fiat_amount,
            bond_amount: sovereign_coin.bond_amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
