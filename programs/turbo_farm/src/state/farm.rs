use anchor_lang::prelude::*;

use crate::constants::NO_NFT_POOL;

/// Global farm configuration and reward parameters.
///
/// One farm exists per reward mint. Pools hang off the farm by id; the farm
/// owns the reward vault every pool pays from.
#[account]
pub struct Farm {
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    /// Identity allowed to publish NFT staking points.
    pub point_oracle: Pubkey,

    /// Global reward emission rate, tokens per second across all pools.
    pub reward_per_second: u64,
    /// Sum of `alloc_point` over all pools.
    pub total_alloc_point: u64,
    /// Number of pools ever added; doubles as the next pool id.
    pub pool_count: u64,
    /// Pool id of the NFT pool, or `NO_NFT_POOL` while none exists.
    pub nft_pool_id: u64,
    /// Minimum time an NFT must stay deposited before rewards unlock.
    pub min_nft_hold_duration: i64,

    pub paused: bool,

    pub created_at: i64,
    pub last_updated: i64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl Farm {
    pub const LEN: usize = 8 + (32 * 4) + (8 * 5) + 1 + (8 * 2) + 2;

    pub fn has_nft_pool(&self) -> bool {
        self.nft_pool_id != NO_NFT_POOL
    }
}
