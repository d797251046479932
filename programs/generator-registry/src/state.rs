use anchor_lang::prelude::*;

use crate::constants::{MAX_RETURN_DATA, UNVERIFIED_DATE};
use crate::errors::GeneratorRegistryError;

/// Registry configuration account
/// PDA seeds: [b"registry"]
#[account]
pub struct RegistryConfig {
    /// The only key allowed to verify generators. Fixed at initialize.
    pub admin: Pubkey,

    /// Total generators registered; also the last id handed out
    pub total_generators: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    /// Account discriminator (8) + admin (32) + total_generators (8) + bump (1)
    pub const SIZE: usize = 8 + 32 + 8 + 1; // 49 bytes

    /// Id the next registration will receive.
    ///
    /// Saturates so it can be used in seed derivation; `record_registration`
    /// is what rejects the overflow.
    pub fn next_generator_id(&self) -> u64 {
        self.total_generators.saturating_add(1)
    }

    /// Advance the counter and return the newly assigned id
    pub fn record_registration(&mut self) -> Result<u64> {
        self.total_generators = self
            .total_generators
            .checked_add(1)
            .ok_or(GeneratorRegistryError::Overflow)?;
        Ok(self.total_generators)
    }
}

/// Lifecycle of a generator record. Pending -> Verified is the only transition.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GeneratorStatus {
    #[default]
    Pending,
    Verified,
}

/// Generator record
/// PDA seeds: [b"generator", generator_id (u64 LE)]
///
/// `location` is kept last so every fixed-size field sits at a fixed offset
/// (status at byte 60) for memcmp filtering.
#[account]
#[derive(Debug, PartialEq)]
pub struct Generator {
    pub generator_id: u64,

    /// Signer of the registration; never changes
    pub owner: Pubkey,

    /// Classification tag, caller-defined
    pub generator_type: u32,

    pub capacity: u64,

    pub status: GeneratorStatus,

    /// Slot of the latest verification, 0 while Pending
    pub verification_date: u64,

    pub bump: u8,

    /// Free-text location, not length-checked at registration
    pub location: String,
}

impl Generator {
    /// Discriminator (8) + generator_id (8) + owner (32) + generator_type (4) + capacity (8)
    /// + status (1) + verification_date (8) + bump (1) + location length prefix (4)
    pub const BASE_SIZE: usize = 8 + 8 + 32 + 4 + 8 + 1 + 8 + 1 + 4; // 74 bytes

    /// Longest location whose record still fits in `get_generator` return data
    pub const MAX_RETURNABLE_LOCATION_LEN: usize = MAX_RETURN_DATA - Self::return_data_len(0); // 957 bytes

    /// Account space for a record with a location of `location_len` bytes
    pub const fn space(location_len: usize) -> usize {
        Self::BASE_SIZE + location_len
    }

    /// Size of `Some(record)` as return data: Option tag (1), no discriminator
    pub const fn return_data_len(location_len: usize) -> usize {
        1 + Self::space(location_len) - 8
    }

    /// Registration does not bound the location, so a long one can outgrow return data
    pub fn fits_return_data(&self) -> bool {
        self.location.len() <= Self::MAX_RETURNABLE_LOCATION_LEN
    }

    /// Fresh Pending record
    pub fn new(
        generator_id: u64,
        owner: Pubkey,
        generator_type: u32,
        location: String,
        capacity: u64,
        bump: u8,
    ) -> Self {
        Self {
            generator_id,
            owner,
            generator_type,
            capacity,
            status: GeneratorStatus::Pending,
            verification_date: UNVERIFIED_DATE,
            bump,
            location,
        }
    }

    /// Mark Verified at `slot`.
    ///
    /// An already verified record is overwritten with the new slot.
    pub fn verify(&mut self, slot: u64) {
        self.status = GeneratorStatus::Verified;
        self.verification_date = slot;
    }

    pub fn is_verified(&self) -> bool {
        self.status == GeneratorStatus::Verified
    }

    /// Read a record from a generator PDA.
    ///
    /// Returns `None` when the account was never created by this program
    /// (not program-owned or empty).
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let generator = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(generator))
    }

    /// Write the record back into its PDA. The serialized length must not change.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.try_serialize(&mut writer)
    }
}
