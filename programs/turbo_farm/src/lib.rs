//! # Turbo Farm Program
//!
//! Multi-pool staking and reward accrual for the TURBO token. Fungible pools
//! pay rewards directly from a shared reward vault; the NFT pool stakes
//! oracle-weighted game NFTs under a minimum holding duration and pays into
//! an external box-reward credit balance instead.
//!
//! ## Features
//! - Pull-based reward accounting: one fixed-point reward-per-share
//!   accumulator per pool, no per-user iteration
//! - Pool weights share a single global emission rate; rate and weight
//!   changes force-settle every pool first
//! - NFT staking with point weights snapshotted at deposit, a withdrawal
//!   time-lock and a separate, also time-gated, claim path
//! - Admin controls for pausing, rates, weights and hold duration
//! - Safe math with overflow protection throughout

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod turbo_farm {
    use super::*;

    /// Initializes the farm and its reward vault.
    ///
    /// # Arguments
    /// * `reward_per_second` - Global reward emission rate
    /// * `min_nft_hold_duration` - Seconds an NFT must stay deposited before
    ///   rewards unlock or custody can be returned
    /// * `point_oracle` - Identity allowed to publish NFT staking points
    pub fn initialize(
        ctx: Context<Initialize>,
        reward_per_second: u64,
        min_nft_hold_duration: i64,
        point_oracle: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, reward_per_second, min_nft_hold_duration, point_oracle)
    }

    /// Adds a fungible-token pool with the given allocation weight.
    ///
    /// `box_payout` picks the reward destination policy (direct transfer or
    /// box-reward credit). Every existing pool must be passed in
    /// `remaining_accounts`, ordered by pool id; all are settled before the
    /// total weight changes.
    pub fn add_pool<'info>(
        ctx: Context<'_, '_, '_, 'info, AddPool<'info>>,
        alloc_point: u64,
        box_payout: bool,
    ) -> Result<()> {
        instructions::add_pool::handler(ctx, alloc_point, box_payout)
    }

    /// Adds the NFT pool. At most one exists per farm.
    pub fn add_nft_pool<'info>(
        ctx: Context<'_, '_, '_, 'info, AddNftPool<'info>>,
        alloc_point: u64,
    ) -> Result<()> {
        instructions::add_pool::add_nft_pool_handler(ctx, alloc_point)
    }

    /// Changes the global reward rate, settling all pools at the old rate
    /// first (pass every pool in `remaining_accounts`).
    pub fn set_reward_rate<'info>(
        ctx: Context<'_, '_, '_, 'info, FarmAdmin<'info>>,
        reward_per_second: u64,
    ) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, reward_per_second)
    }

    /// Changes one pool's allocation weight, settling all pools under the
    /// old weights first (pass every pool in `remaining_accounts`).
    pub fn set_pool_alloc<'info>(
        ctx: Context<'_, '_, '_, 'info, FarmAdmin<'info>>,
        pool_id: u64,
        alloc_point: u64,
    ) -> Result<()> {
        instructions::admin::set_pool_alloc_handler(ctx, pool_id, alloc_point)
    }

    /// Changes the minimum NFT holding duration.
    pub fn set_min_nft_hold_duration(ctx: Context<FarmAdmin>, seconds: i64) -> Result<()> {
        instructions::admin::set_min_nft_hold_duration_handler(ctx, seconds)
    }

    /// Pauses or resumes deposits. Withdrawals and claims stay available.
    pub fn set_paused(ctx: Context<FarmAdmin>, paused: bool) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, paused)
    }

    /// Transfers the farm authority to a new address.
    pub fn transfer_authority(ctx: Context<FarmAdmin>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Funds the reward vault. Permissionless.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Publishes the staking weight for one NFT mint.
    ///
    /// # Errors
    /// Returns an error if the caller is not the configured point oracle.
    pub fn set_nft_point(ctx: Context<SetNftPoint>, point: u64) -> Result<()> {
        instructions::set_nft_point::handler(ctx, point)
    }

    /// Deposits tokens into a fungible pool, paying pending rewards first.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The farm is paused
    /// - The amount is zero
    /// - The pool is the NFT pool
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraws tokens from a fungible pool, paying pending rewards first.
    ///
    /// # Errors
    /// Returns an error if the amount exceeds the caller's staked balance.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claims pending rewards from a fungible pool without unstaking.
    ///
    /// # Errors
    /// Returns `NftPoolClaimPath` on the NFT pool - its rewards go through
    /// `claim_nft_rewards`.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Deposits one NFT into the NFT pool at its oracle weight (weight 0 is
    /// accepted, never a revert).
    pub fn deposit_nft(ctx: Context<DepositNft>) -> Result<()> {
        instructions::deposit_nft::handler(ctx)
    }

    /// Claims NFT-pool rewards into the box-reward credit balance.
    ///
    /// # Errors
    /// Returns `HoldDurationNotElapsed` before the minimum holding duration
    /// has passed since the earliest active deposit.
    pub fn claim_nft_rewards(ctx: Context<ClaimNftRewards>) -> Result<()> {
        instructions::claim_nft::handler(ctx)
    }

    /// Withdraws one matured NFT, crediting remaining pending reward.
    ///
    /// # Errors
    /// Returns `NftStillLocked` before the minimum holding duration elapses;
    /// nothing is paid or forfeited on the failed attempt.
    pub fn withdraw_nft(ctx: Context<WithdrawNft>) -> Result<()> {
        instructions::withdraw_nft::handler(ctx)
    }

    /// Withdraws every NFT passed in `remaining_accounts` (three accounts
    /// per NFT: deposit record, escrow, destination).
    pub fn withdraw_all_nfts<'info>(
        ctx: Context<'_, '_, '_, 'info, WithdrawAllNfts<'info>>,
    ) -> Result<()> {
        instructions::withdraw_all_nfts::handler(ctx)
    }
}
