//! Single-NFT withdrawal handler.
//!
//! Returns custody of one matured NFT. Before maturity the call reverts with
//! `NftStillLocked` and changes nothing - no payment, no forfeiture. On
//! success the pool is settled, remaining pending reward is credited to the
//! box-reward balance and the deposit record is deactivated.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::events::NftWithdrawEvent;
use crate::utils::credit_box_reward;
use crate::state::{BoxReward, Farm, NftDeposit, Pool, UserStake};

/// Accounts required for withdrawing one NFT.
#[derive(Accounts)]
pub struct WithdrawNft<'info> {
    /// The user withdrawing their NFT.
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

    /// Custody record of the NFT being withdrawn.
    #[account(
        mut,
        seeds = [NFT_DEPOSIT_SEED, farm.key().as_ref(), nft_mint.key().as_ref()],
        bump = nft_deposit.bump,
        constraint = nft_deposit.depositor == user.key() @ FarmError::NotStakeOwner,
        constraint = nft_deposit.is_active @ FarmError::DepositNotActive
    )]
    pub nft_deposit: Account<'info, NftDeposit>,

    /// The NFT mint.
    #[account(
        constraint = nft_mint.key() == nft_deposit.nft_mint @ FarmError::InvalidTokenAccount
    )]
    pub nft_mint: Account<'info, Mint>,

    /// Escrow token account holding the NFT.
    #[account(
        mut,
        seeds = [NFT_ESCROW_SEED, farm.key().as_ref(), nft_mint.key().as_ref()],
        bump
    )]
    pub nft_escrow: Account<'info, TokenAccount>,

    /// User's token account receiving the NFT back.
    #[account(
        mut,
        constraint = user_nft_account.mint == nft_mint.key() @ FarmError::InvalidTokenAccount,
        constraint = user_nft_account.owner == user.key() @ FarmError::InvalidTokenAccount
    )]
    pub user_nft_account: Account<'info, TokenAccount>,

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

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw one matured NFT.
pub fn handler(ctx: Context<WithdrawNft>) -> Result<()> {
    let farm = &ctx.accounts.farm;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        ctx.accounts
            .nft_deposit
            .is_mature(now, farm.min_nft_hold_duration),
        FarmError::NftStillLocked
    );

    let pool = &mut ctx.accounts.pool;
    pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;
    let acc = pool.acc_reward_per_share;

    let user_stake = &mut ctx.accounts.user_stake;
    let pending = user_stake.pending_reward(acc)?;

    if pending > 0 {
        credit_box_reward(
            &mut ctx.accounts.box_reward,
            &ctx.accounts.farm,
            &ctx.accounts.user.key(),
            ctx.bumps.box_reward,
            pending,
            now,
        )?;
        ctx.accounts.user_stake.total_claimed = ctx
            .accounts
            .user_stake
            .total_claimed
            .checked_add(pending)
            .ok_or(FarmError::MathOverflow)?;
    }

    // Unstake the weight and deactivate the record.
    let point = ctx.accounts.nft_deposit.point;
    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.amount = user_stake
        .amount
        .checked_sub(point)
        .ok_or(FarmError::MathUnderflow)?;
    user_stake.nft_count = user_stake
        .nft_count
        .checked_sub(1)
        .ok_or(FarmError::MathUnderflow)?;
    if user_stake.nft_count == 0 {
        user_stake.first_deposit_at = 0;
    }
    user_stake.reset_debt(acc)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_sub(point)
        .ok_or(FarmError::MathUnderflow)?;

    ctx.accounts.nft_deposit.is_active = false;

    // Return custody.
    let reward_mint_key = ctx.accounts.farm.reward_mint;
    let seeds = &[
        FARM_SEED,
        reward_mint_key.as_ref(),
        &[ctx.accounts.farm.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.nft_escrow.to_account_info(),
        to: ctx.accounts.user_nft_account.to_account_info(),
        authority: ctx.accounts.farm.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        1,
    )?;

    emit!(NftWithdrawEvent {
        user: ctx.accounts.user.key(),
        nft_mint: ctx.accounts.nft_mint.key(),
        point,
        timestamp: now,
    });
    msg!("NFT {} withdrawn", ctx.accounts.nft_mint.key());

    Ok(())
}
