//! Claim instruction handler.
//!
//! Settles a fungible pool and pays the caller's pending reward without
//! touching the stake. The NFT pool is rejected here; its rewards go through
//! `claim_nft_rewards` and land in the box-reward balance instead.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::events::ClaimEvent;
use crate::state::{BoxReward, Farm, Pool, UserStake};
use crate::utils::credit_box_reward;

/// Accounts required for claiming fungible-pool rewards.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The farm.
    #[account(
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The pool being claimed from.
    #[account(
        mut,
        seeds = [POOL_SEED, farm.key().as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.farm == farm.key() @ FarmError::InvalidPoolAccount
    )]
    pub pool: Account<'info, Pool>,

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ FarmError::NotStakeOwner
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_reward_account.mint == farm.reward_mint @ FarmError::InvalidTokenAccount,
        constraint = user_reward_account.owner == user.key() @ FarmError::InvalidTokenAccount
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// The farm's reward vault.
    #[account(
        mut,
        constraint = reward_vault.key() == farm.reward_vault @ FarmError::InvalidTokenAccount
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// User's box-reward balance, the payout destination for box-credit
    /// pools (created on first use).
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

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim pending rewards from a fungible pool.
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    require!(!ctx.accounts.pool.is_nft(), FarmError::NftPoolClaimPath);

    let farm = &ctx.accounts.farm;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;
    let acc = pool.acc_reward_per_share;
    let pool_id = pool.pool_id;
    let pool_payout = pool.payout;

    let user_stake = &mut ctx.accounts.user_stake;
    let pending = user_stake.pending_reward(acc)?;
    require!(pending > 0, FarmError::NoRewardsAvailable);

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.reset_debt(acc)?;
    user_stake.total_claimed = user_stake
        .total_claimed
        .checked_add(pending)
        .ok_or(FarmError::MathOverflow)?;

    if pool_payout == payout::BOX_CREDIT {
        credit_box_reward(
            &mut ctx.accounts.box_reward,
            &ctx.accounts.farm,
            &ctx.accounts.user.key(),
            ctx.bumps.box_reward,
            pending,
            now,
        )?;
    } else {
        require!(
            ctx.accounts.reward_vault.amount >= pending,
            FarmError::InsufficientRewardFunds
        );

        let reward_mint_key = ctx.accounts.farm.reward_mint;
        let seeds = &[
            FARM_SEED,
            reward_mint_key.as_ref(),
            &[ctx.accounts.farm.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.reward_vault.to_account_info(),
            to: ctx.accounts.user_reward_account.to_account_info(),
            authority: ctx.accounts.farm.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::transfer(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
            pending,
        )?;
    }

    emit!(ClaimEvent {
        user: ctx.accounts.user.key(),
        pool_id,
        reward: pending,
        timestamp: now,
    });
    msg!("Claimed {} from pool {}", pending, pool_id);

    Ok(())
}
