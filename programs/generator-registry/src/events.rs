use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
}

#[event]
pub struct GeneratorRegistered {
    pub generator_id: u64,
    pub owner: Pubkey,
    pub generator_type: u32,
    pub location: String,
    pub capacity: u64,
}

/// Emitted on every successful verify, including re-verification
#[event]
pub struct GeneratorVerified {
    pub generator_id: u64,
    pub admin: Pubkey,
    /// Slot at which verification happened
    pub verification_date: u64,
}
