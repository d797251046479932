use anchor_lang::prelude::*;

use crate::constants::{GENERATOR_SEED, REGISTRY_SEED};
use crate::events::GeneratorRegistered;
use crate::state::{Generator, RegistryConfig};

#[derive(Accounts)]
#[instruction(generator_type: u32, location: String)]
pub struct RegisterGenerator<'info> {
    /// Registrant; recorded as the generator owner and pays for the record
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Registry configuration (holds the id counter)
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Record for the next id. Sized from the location, which is not length-checked.
    #[account(
        init,
        payer = owner,
        space = Generator::space(location.len()),
        seeds = [GENERATOR_SEED, &registry_config.next_generator_id().to_le_bytes()],
        bump
    )]
    pub generator: Account<'info, Generator>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterGenerator>,
    generator_type: u32,
    location: String,
    capacity: u64,
) -> Result<u64> {
    let owner = ctx.accounts.owner.key();
    let generator_id = ctx.accounts.registry_config.record_registration()?;

    let generator = &mut ctx.accounts.generator;
    generator.set_inner(Generator::new(
        generator_id,
        owner,
        generator_type,
        location.clone(),
        capacity,
        ctx.bumps.generator,
    ));

    emit!(GeneratorRegistered {
        generator_id,
        owner,
        generator_type,
        location,
        capacity,
    });

    Ok(generator_id)
}
