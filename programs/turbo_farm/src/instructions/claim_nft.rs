//! NFT-pool reward claim handler.
//!
//! Settles the NFT pool and credits the caller's pending reward to their
//! box-reward balance. Gated on the minimum holding duration measured from
//! the earliest deposit of the current holding streak; custody is untouched.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FarmError;
use crate::utils::credit_box_reward;
use crate::state::{BoxReward, Farm, Pool, UserStake};

/// Accounts required for claiming NFT-pool rewards.
#[derive(Accounts)]
pub struct ClaimNftRewards<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The farm.
    #[account(
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The NFT pool.
    #[account(
        mut,
        seeds = [POOL_SEED, farm.key().as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.farm == farm.key() @ FarmError::InvalidPoolAccount,
        constraint = pool.is_nft() @ FarmError::NoNftPool
    )]
    pub pool: Account<'info, Pool>,

    /// User's stake account on the NFT pool.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ FarmError::NotStakeOwner
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's box-reward balance.
    #[account(
        init_if_needed,
        payer = user,
        space = BoxReward::LEN,
        seeds = [BOX_REWARD_SEED, farm.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub box_reward: Account<'info, BoxReward>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Claim NFT-pool rewards into the box-reward balance.
pub fn handler(ctx: Context<ClaimNftRewards>) -> Result<()> {
    let farm = &ctx.accounts.farm;
    let user_stake = &ctx.accounts.user_stake;

    require!(user_stake.nft_count > 0, FarmError::NoActiveDeposits);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        user_stake.hold_duration_elapsed(now, farm.min_nft_hold_duration),
        FarmError::HoldDurationNotElapsed
    );

    let pool = &mut ctx.accounts.pool;
    pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;
    let acc = pool.acc_reward_per_share;

    let user_stake = &mut ctx.accounts.user_stake;
    let pending = user_stake.pending_reward(acc)?;
    require!(pending > 0, FarmError::NoRewardsAvailable);

    user_stake.reset_debt(acc)?;
    user_stake.total_claimed = user_stake
        .total_claimed
        .checked_add(pending)
        .ok_or(FarmError::MathOverflow)?;

    credit_box_reward(
        &mut ctx.accounts.box_reward,
        &ctx.accounts.farm,
        &ctx.accounts.user.key(),
        ctx.bumps.box_reward,
        pending,
        now,
    )?;

    msg!("Claimed {} NFT-pool rewards as box credit", pending);

    Ok(())
}
