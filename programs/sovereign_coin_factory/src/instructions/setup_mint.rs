use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SetupMint<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SOVEREIGN_COIN_SEED, authority.key().as_ref(), sovereign_coin.symbol_seed()],
        bump = sovereign_coin.bump,
        has_one = authority @ SovereignFactoryError::Unauthorized,
        constraint = !sovereign_coin.has_mint() @ SovereignFactoryError::MintAlreadySet,
    )]
    pub sovereign_coin: Box<Account<'info, SovereignCoin>>,

    #[account(
        init,
        payer = payer,
        mint::decimals = sovereign_coin.decimals,
        mint::authority = authority,
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl SetupMint<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        let sovereign_coin = &mut ctx.accounts.sovereign_coin;
        sovereign_coin.mint = mint;

        msg!("Mint {} created for {}", mint, sovereign_coin.symbol());

        let clock = Clock::get()?;
        emit_cpi!(SovereignCoinSetupMintEvent {
            sovereign_coin: sovereign_coin.key(),
            mint,
            decimals: sovereign_coin.decimals,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
