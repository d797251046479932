use anchor_lang::prelude::*;

#[error_code]
pub enum GeneratorRegistryError {
    #[msg("Signer is not the registry admin")]
    Unauthorized,

    #[msg("Generator not found")]
    NotFound,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Generator record exceeds the return data limit - read the account directly")]
    RecordTooLarge,
}
