use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::RegistryInitialized;
use crate::state::RegistryConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the registry admin; cannot be changed afterwards
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Registry configuration PDA
    #[account(
        init,
        payer = admin,
        space = RegistryConfig::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    let registry = &mut ctx.accounts.registry_config;
    registry.admin = admin;
    registry.total_generators = 0;
    registry.bump = ctx.bumps.registry_config;

    emit!(RegistryInitialized { admin });

    Ok(())
}
