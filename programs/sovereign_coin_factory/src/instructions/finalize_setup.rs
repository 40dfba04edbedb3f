use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct FinalizeSetup<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    #[account(
        seeds = [SOVEREIGN_COIN_SEED, authority.key().as_ref(), sovereign_coin.symbol_seed()],
        bump = sovereign_coin.bump,
        has_one = authority @ SovereignFactoryError::Unauthorized,
        constraint = sovereign_coin.has_mint() @ SovereignFactoryError::MintNotSet,
    )]
    pub sovereign_coin: Box<Account<'info, SovereignCoin>>,

    #[account(
        address = sovereign_coin.mint @ SovereignFactoryError::InvalidSovereignCoinMint,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Created via CPI to the token metadata program, which validates the address
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl FinalizeSetup<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let sovereign_coin = &ctx.accounts.sovereign_coin;
        let name = sovereign_coin.name();
        let symbol = sovereign_coin.symbol();
        let uri = sovereign_coin.uri();

        let cpi_program = ctx.accounts.token_metadata_program.to_account_info();
        let cpi_accounts = CreateMetadataAccountsV3 {
            metadata: ctx.accounts.metadata.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            mint_authority: ctx.accounts.authority.to_account_info(),
            payer: ctx.accounts.payer.to_account_info(),
            update_authority: ctx.accounts.authority.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        };

        create_metadata_accounts_v3(
            CpiContext::new(cpi_program, cpi_accounts),
            DataV2 {
                name: name.clone(),
                symbol: symbol.clone(),
                uri,
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            false,
            true,
            None,
        )?;

        msg!("Sovereign coin {} finalized", symbol);

        let clock = Clock::get()?;
        emit_cpi!(SovereignCoinCreatedEvent {
            authority: ctx.accounts.authority.key(),
            sovereign_coin: sovereign_coin.key(),
            mint: ctx.accounts.mint.key(),
            name,
            symbol,
            fiat_currency: sovereign_coin.fiat_currency(),
            bond_mint: sovereign_coin.bond_mint,
            bond_account: sovereign_coin.bond_account,
            bond_rating: sovereign_coin.bond_rating,
            required_reserve_percentage: sovereign_coin.required_reserve_percentage,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
