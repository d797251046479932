use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::Generator;

declare_id!("4RZp1dTQX7b9de9TBTdu4RNyx58P4wCU1xwbmeMrQfFX");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Generator Registry",
    project_url: "https://example.com/generator-registry",
    contacts: "email:security@example.com",
    policy: "https://example.com/generator-registry/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://example.com/generator-registry/source"
}

#[program]
pub mod generator_registry {
    use super::*;

    /// One-time setup: creates the registry and fixes the admin
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Register a generator under the next sequential id.
    /// Intake is permissive; the new record starts out Pending.
    pub fn register_generator(
        ctx: Context<RegisterGenerator>,
        generator_type: u32,
        location: String,
        capacity: u64,
    ) -> Result<u64> {
        instructions::register_generator::handler(ctx, generator_type, location, capacity)
    }

    /// Mark a generator Verified at the current slot (admin only)
    pub fn verify_generator(ctx: Context<VerifyGenerator>, generator_id: u64) -> Result<bool> {
        instructions::verify_generator::handler(ctx, generator_id)
    }

    /// Read a generator record; None if the id was never registered
    pub fn get_generator(
        ctx: Context<ReadGenerator>,
        generator_id: u64,
    ) -> Result<Option<Generator>> {
        instructions::get_generator::handler(ctx, generator_id)
    }

    /// True only for an existing record in the Verified state
    pub fn is_generator_verified(ctx: Context<ReadGenerator>, generator_id: u64) -> Result<bool> {
        instructions::is_generator_verified::handler(ctx, generator_id)
    }
}
