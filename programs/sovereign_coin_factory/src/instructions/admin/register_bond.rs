use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct RegisterBondMapping<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
        has_one = authority @ SovereignFactoryError::Unauthorized,
    )]
    pub factory: Box<Account<'info, Factory>>,
}

impl RegisterBondMapping<'_> {
    pub fn handler(
        ctx: Context<RegisterBondMapping>,
        fiat_currency: String,
        bond_mint: Pubkey,
        bond_rating: u8,
    ) -> Result<()> {
        let slot_index = ctx
            .accounts
            .factory
            .register_bond_mapping(&fiat_currency, bond_mint, bond_rating)?;

        msg!(
            "Registered bond mapping {} -> {} (rating {}) in slot {}",
            fiat_currency,
            bond_mint,
            bond_rating,
            slot_index
        );

        let clock = Clock::get()?;
        emit_cpi!(BondMappingRegisteredEvent {
            authority: ctx.accounts.authority.key(),
            factory: ctx.accounts.factory.key(),
            slot_index,
            fiat_currency,
            bond_mint,
            bond_rating,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
