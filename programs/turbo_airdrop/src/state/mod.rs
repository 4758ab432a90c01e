//! State structures for the Turbo Airdrop program.

pub mod airdrop_account;
pub mod airdrop_config;

pub use airdrop_account::*;
pub use airdrop_config::*;
