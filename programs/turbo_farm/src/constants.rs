//! Program constants for the Turbo Farm program.
//!
//! Defines PDA seeds, time constants, fixed-point precision and the
//! pool-kind / payout-policy discriminants.

use anchor_lang::prelude::*;

/// Seed for deriving the farm PDA
pub const FARM_SEED: &[u8] = b"farm";

/// Seed for deriving pool PDAs
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the reward vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Seed for deriving pool stake-vault PDAs
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving NFT deposit record PDAs
pub const NFT_DEPOSIT_SEED: &[u8] = b"nft_deposit";

/// Seed for deriving NFT escrow token account PDAs
pub const NFT_ESCROW_SEED: &[u8] = b"nft_escrow";

/// Seed for deriving NFT staking-point PDAs (the point-oracle mapping)
pub const NFT_POINT_SEED: &[u8] = b"nft_point";

/// Seed for deriving box-reward credit account PDAs
pub const BOX_REWARD_SEED: &[u8] = b"box_reward";

/// Sentinel value of `Farm::nft_pool_id` while no NFT pool exists
pub const NO_NFT_POOL: u64 = u64::MAX;

/// Fixed-point scale of the reward-per-share accumulator.
///
/// Pending rewards are `amount * acc_reward_per_share / PRECISION`; the scale
/// keeps per-share deltas from truncating to zero for small stakes.
pub const PRECISION: u128 = 1_000_000_000_000; // 10^12

/// Pool kind discriminants
pub mod pool_kind {
    /// Fungible-token pool - stake amounts are token amounts
    pub const FUNGIBLE: u8 = 0;
    /// The NFT pool - stake amounts are oracle-assigned points
    pub const NFT: u8 = 1;
}

/// Reward payout policy discriminants
pub mod payout {
    /// Transfer rewards directly from the reward vault
    pub const DIRECT: u8 = 0;
    /// Credit rewards to the recipient's box-reward balance
    pub const BOX_CREDIT: u8 = 1;
}
