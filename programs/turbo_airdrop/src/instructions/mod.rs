//! Instruction handlers for the Turbo Airdrop program.

pub mod admin;
pub mod claim;
pub mod claim_all;
pub mod claim_vesting;
pub mod initialize;

pub use admin::*;
pub use claim::*;
pub use claim_all::*;
pub use claim_vesting::*;
pub use initialize::*;
