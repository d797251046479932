use anchor_lang::prelude::*;

use crate::constants::GENERATOR_SEED;
use crate::errors::GeneratorRegistryError;
use crate::state::Generator;

/// Accounts for the read-only queries (get_generator, is_generator_verified)
#[derive(Accounts)]
#[instruction(generator_id: u64)]
pub struct ReadGenerator<'info> {
    /// CHECK: Generator PDA for `generator_id`; absent for unknown ids
    #[account(
        seeds = [GENERATOR_SEED, &generator_id.to_le_bytes()],
        bump
    )]
    pub generator: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ReadGenerator>, _generator_id: u64) -> Result<Option<Generator>> {
    let generator = Generator::load(&ctx.accounts.generator.to_account_info())?;

    if let Some(ref record) = generator {
        require!(
            record.fits_return_data(),
            GeneratorRegistryError::RecordTooLarge
        );
    }

    Ok(generator)
}
