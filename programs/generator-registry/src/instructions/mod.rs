#![allow(ambiguous_glob_reexports)]

pub mod get_generator;
pub mod initialize;
pub mod is_generator_verified;
pub mod register_generator;
pub mod verify_generator;

pub use get_generator::*;
pub use initialize::*;
pub use register_generator::*;
pub use verify_generator::*;
