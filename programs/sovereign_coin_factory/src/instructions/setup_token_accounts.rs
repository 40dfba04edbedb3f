use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SetupTokenAccounts<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SOVEREIGN_COIN_SEED, authority.key().as_ref(), sovereign_coin.symbol_seed()],
        bump = sovereign_coin.bump,
        has_one = authority @ SovereignFactoryError::Unauthorized,
        constraint = !sovereign_coin.has_token_accounts() @ SovereignFactoryError::TokenAccountsAlreadySet,
    )]
    pub sovereign_coin: Box<Account<'info, SovereignCoin>>,

    pub fiat_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = sovereign_coin.bond_mint @ SovereignFactoryError::InvalidBondMint,
    )]
    pub bond_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        token::mint = fiat_token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub fiat_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        token::mint = bond_token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub bond_holding: Box<InterfaceAccount<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl SetupTokenAccounts<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let fiat_reserve = ctx.accounts.fiat_reserve.key();
        let bond_holding = ctx.accounts.bond_holding.key();

        let sovereign_coin = &mut ctx.accounts.sovereign_coin;
        sovereign_coin.fiat_reserve = fiat_reserve;
        sovereign_coin.bond_holding = bond_holding;

        let clock = Clock::get()?;
        emit_cpi!(SovereignCoinTokenAccountsEvent {
            sovereign_coin: sovereign_coin.key(),
            fiat_reserve,
            bond_holding,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
