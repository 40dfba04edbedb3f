use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Factory::INIT_SPACE,
        seeds = [FACTORY_SEED],
        bump
    )]
    pub factory: Box<Account<'info, Factory>>,

    pub system_program: Program<'info, System>,
}

impl InitializeFactory<'_> {
    pub fn handler(ctx: Context<InitializeFactory>, bump: u8, params: FactoryParams) -> Result<()> {
        let authority = ctx.accounts.authority.key();

        // Validation happens before the account is written
        let factory = Factory::new(authority, bump, params)?;
        ctx.accounts.factory.set_inner(factory);

        msg!(
            "Factory initialized: min reserve {}%, multiplier {}",
            params.min_fiat_reserve,
            params.bond_reserve_multiplier
        );

        let clock = Clock::get()?;
        emit_cpi!(FactoryInitializedEvent {
            authority,
            factory: ctx.accounts.factory.key(),
            min_fiat_reserve: params.min_fiat_reserve,
            bond_reserve_multiplier: params.bond_reserve_multiplier,
            yield_share_protocol: params.yield_share_protocol,
            yield_share_issuer: params.yield_share_issuer,
            yield_share_holders: params.yield_share_holders,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
