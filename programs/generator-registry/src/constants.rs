/// Seed for the registry configuration PDA
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed prefix for generator PDAs: [GENERATOR_SEED, generator_id (u64 LE)]
pub const GENERATOR_SEED: &[u8] = b"generator";

/// Sentinel for `Generator::verification_date` before verification
pub const UNVERIFIED_DATE: u64 = 0;

/// Runtime cap on instruction return data (bytes)
pub const MAX_RETURN_DATA: usize = 1024;
