use anchor_lang::prelude::*;

use crate::instructions::get_generator::ReadGenerator;
use crate::state::Generator;

/// Unknown ids and Pending records both read as false
pub fn handler(ctx: Context<ReadGenerator>, _generator_id: u64) -> Result<bool> {
    let generator = Generator::load(&ctx.accounts.generator.to_account_info())?;
    Ok(generator.is_some_and(|g| g.is_verified()))
}
