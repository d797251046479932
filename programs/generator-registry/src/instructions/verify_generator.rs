use anchor_lang::prelude::*;

use crate::constants::{GENERATOR_SEED, REGISTRY_SEED};
use crate::errors::GeneratorRegistryError;
use crate::events::GeneratorVerified;
use crate::state::{Generator, RegistryConfig};

#[derive(Accounts)]
#[instruction(generator_id: u64)]
pub struct VerifyGenerator<'info> {
    pub admin: Signer<'info>,

    /// Checked before the generator so a non-admin always gets Unauthorized
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump,
        has_one = admin @ GeneratorRegistryError::Unauthorized
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// CHECK: Generator PDA for `generator_id`. May not exist; the handler
    /// reports NotFound in that case instead of failing deserialization.
    #[account(
        mut,
        seeds = [GENERATOR_SEED, &generator_id.to_le_bytes()],
        bump
    )]
    pub generator: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<VerifyGenerator>, generator_id: u64) -> Result<bool> {
    let generator_info = ctx.accounts.generator.to_account_info();
    let mut generator =
        Generator::load(&generator_info)?.ok_or(GeneratorRegistryError::NotFound)?;

    let slot = Clock::get()?.slot;

    if generator.is_verified() {
        msg!(
            "Generator {} already verified at slot {}, overwriting with {}",
            generator_id,
            generator.verification_date,
            slot
        );
    }

    generator.verify(slot);
    generator.store(&generator_info)?;

    emit!(GeneratorVerified {
        generator_id,
        admin: ctx.accounts.admin.key(),
        verification_date: slot,
    });

    Ok(true)
}
