//! Admin instruction handlers.
//!
//! Reward-rate and pool-weight changes are retroactive-unsafe by nature, so
//! both force-settle every pool (passed in `remaining_accounts`, ordered by
//! id) before the new parameters take effect.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FarmError;
use crate::events::RewardRateChangedEvent;
use crate::state::Farm;
use crate::utils::sync_all_pools;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct FarmAdmin<'info> {
    /// The farm admin.
    #[account(
        mut,
        constraint = authority.key() == farm.authority @ FarmError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The farm to modify.
    #[account(
        mut,
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub farm: Account<'info, Farm>,
}

/// Change the global reward rate.
///
/// Settles every pool at the old rate first so accrued history is untouched.
pub fn set_reward_rate_handler(ctx: Context<FarmAdmin>, reward_per_second: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    sync_all_pools(
        &ctx.accounts.farm,
        &ctx.accounts.farm.key(),
        ctx.program_id,
        ctx.remaining_accounts,
        now,
        None,
    )?;

    let farm = &mut ctx.accounts.farm;
    let old_rate = farm.reward_per_second;
    farm.reward_per_second = reward_per_second;
    farm.last_updated = now;

    emit!(RewardRateChangedEvent {
        old_rate,
        new_rate: reward_per_second,
        timestamp: now,
    });
    msg!("Reward rate changed: {} -> {}", old_rate, reward_per_second);

    Ok(())
}

/// Change one pool's allocation weight.
///
/// Settles every pool under the old weights, then rewrites the target pool's
/// weight inside the sweep and adjusts `total_alloc_point`.
pub fn set_pool_alloc_handler(ctx: Context<FarmAdmin>, pool_id: u64, alloc_point: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let previous = sync_all_pools(
        &ctx.accounts.farm,
        &ctx.accounts.farm.key(),
        ctx.program_id,
        ctx.remaining_accounts,
        now,
        Some((pool_id, alloc_point)),
    )?
    .ok_or(FarmError::InvalidPoolAccount)?;

    let farm = &mut ctx.accounts.farm;
    farm.total_alloc_point = farm
        .total_alloc_point
        .checked_sub(previous)
        .ok_or(FarmError::MathUnderflow)?
        .checked_add(alloc_point)
        .ok_or(FarmError::MathOverflow)?;
    farm.last_updated = now;

    msg!(
        "Pool {} weight changed: {} -> {} (total {})",
        pool_id,
        previous,
        alloc_point,
        farm.total_alloc_point
    );

    Ok(())
}

/// Change the minimum NFT holding duration.
pub fn set_min_nft_hold_duration_handler(ctx: Context<FarmAdmin>, seconds: i64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let clock = Clock::get()?;

    let previous = farm.min_nft_hold_duration;
    farm.min_nft_hold_duration = seconds.max(0);
    farm.last_updated = clock.unix_timestamp;

    msg!("Minimum NFT hold duration: {}s -> {}s", previous, seconds);

    Ok(())
}

/// Pause or unpause deposits.
///
/// Withdrawals and claims stay available so user funds are never locked in.
pub fn set_paused_handler(ctx: Context<FarmAdmin>, paused: bool) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let clock = Clock::get()?;

    let previous = farm.paused;
    farm.paused = paused;
    farm.last_updated = clock.unix_timestamp;

    msg!(
        "Farm {} (was {})",
        if paused { "PAUSED" } else { "RESUMED" },
        if previous { "paused" } else { "active" }
    );

    Ok(())
}

/// Transfer the farm authority to a new address.
pub fn transfer_authority_handler(ctx: Context<FarmAdmin>, new_authority: Pubkey) -> Result<()> {
    require!(new_authority != Pubkey::default(), FarmError::Unauthorized);

    let farm = &mut ctx.accounts.farm;
    let clock = Clock::get()?;

    let old_authority = farm.authority;
    farm.authority = new_authority;
    farm.last_updated = clock.unix_timestamp;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
