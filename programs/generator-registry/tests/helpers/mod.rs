//! Test helpers for Generator Registry Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.x.
//! The program binary must be built first (`anchor build`).

#![allow(dead_code)]

pub mod accounts;

pub use errors::*;

use mollusk_svm::Mollusk;
use solana_sdk::{pubkey::Pubkey, rent::Rent};
use std::path::PathBuf;

/// Setup Mollusk with the generator registry program loaded
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// Tests are in programs/generator-registry/tests, the binary is at
/// workspace_root/target/deploy/
pub fn setup_mollusk() -> Mollusk {
    // From programs/generator-registry/, go up 2 levels to workspace root
    let deploy_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    Mollusk::new(&instructions::PROGRAM_ID, "generator_registry")
}

/// Store an initialized RegistryConfig in `ledger` and return its address
pub fn seed_registry(ledger: &mut ledger::Ledger, admin: Pubkey, total_generators: u64) -> Pubkey {
    let (registry_config, bump) = instructions::derive_registry_config();
    let data = serialization::serialize_registry_config(admin, total_generators, bump);
    let lamports = Rent::default().minimum_balance(data.len());
    ledger.set(
        registry_config,
        accounts::program_account(lamports, data, instructions::PROGRAM_ID),
    );
    registry_config
}

/// Store a Generator record in `ledger` and return its address
pub fn seed_generator(ledger: &mut ledger::Ledger, record: &serialization::GeneratorRecord) -> Pubkey {
    let (generator, _) = instructions::derive_generator(record.generator_id);
    let data = serialization::serialize_generator(record);
    let lamports = Rent::default().minimum_balance(data.len());
    ledger.set(
        generator,
        accounts::program_account(lamports, data, instructions::PROGRAM_ID),
    );
    generator
}

/// Pending record as the program would have written it
pub fn pending_record(generator_id: u64, owner: Pubkey, location: &str) -> serialization::GeneratorRecord {
    let (_, bump) = instructions::derive_generator(generator_id);
    serialization::GeneratorRecord {
        generator_id,
        owner,
        generator_type: 1,
        capacity: 1000,
        status: serialization::STATUS_PENDING,
        verification_date: 0,
        bump,
        location: location.to_string(),
    }
}
