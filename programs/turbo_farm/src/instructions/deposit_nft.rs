//! NFT deposit instruction handler.
//!
//! Takes custody of one NFT into a farm-authority escrow and stakes its
//! oracle weight into the NFT pool. A token the oracle never weighted is
//! accepted at weight zero - the deposit must not fail for it.
//!
//! The original batch entry point maps onto one instruction per NFT; a
//! transaction carrying several of these is the batch.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::events::NftDepositEvent;
use crate::state::{BoxReward, Farm, NftDeposit, Pool, UserStake};
use crate::utils::{credit_box_reward, resolve_nft_point};

/// Accounts required for depositing an NFT.
#[derive(Accounts)]
pub struct DepositNft<'info> {
    /// The user depositing the NFT.
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

    /// User's stake account on the NFT pool (created on first deposit).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Custody record for this NFT (revived on re-deposit).
    #[account(
        init_if_needed,
        payer = user,
        space = NftDeposit::LEN,
        seeds = [NFT_DEPOSIT_SEED, farm.key().as_ref(), nft_mint.key().as_ref()],
        bump
    )]
    pub nft_deposit: Account<'info, NftDeposit>,

    /// The NFT mint.
    pub nft_mint: Account<'info, Mint>,

    /// User's token account holding the NFT.
    #[account(
        mut,
        constraint = user_nft_account.mint == nft_mint.key() @ FarmError::InvalidTokenAccount,
        constraint = user_nft_account.owner == user.key() @ FarmError::InvalidTokenAccount,
        constraint = user_nft_account.amount >= 1 @ FarmError::InvalidTokenAccount
    )]
    pub user_nft_account: Account<'info, TokenAccount>,

    /// Escrow token account holding the NFT while staked.
    #[account(
        init_if_needed,
        payer = user,
        seeds = [NFT_ESCROW_SEED, farm.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        token::mint = nft_mint,
        token::authority = farm
    )]
    pub nft_escrow: Account<'info, TokenAccount>,

    /// The point-oracle mapping for this NFT mint.
    /// CHECK: Read leniently; anything but the expected, initialized PDA
    /// resolves to weight 0.
    pub nft_point: UncheckedAccount<'info>,

    /// User's box-reward balance (created on first NFT interaction).
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

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Deposit one NFT into the NFT pool.
pub fn handler(ctx: Context<DepositNft>) -> Result<()> {
    require!(!ctx.accounts.farm.paused, FarmError::StakingPaused);
    require!(
        !ctx.accounts.nft_deposit.is_active,
        FarmError::NftAlreadyStaked
    );

    let farm = &ctx.accounts.farm;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let point = resolve_nft_point(
        &farm.key(),
        &ctx.accounts.nft_mint.key(),
        &ctx.accounts.nft_point,
        ctx.program_id,
    );

    let pool = &mut ctx.accounts.pool;
    pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;
    let acc = pool.acc_reward_per_share;

    let user_stake = &mut ctx.accounts.user_stake;
    if user_stake.owner == Pubkey::default() {
        user_stake.owner = ctx.accounts.user.key();
        user_stake.pool = pool.key();
        user_stake.bump = ctx.bumps.user_stake;
    }
    let pending = user_stake.pending_reward(acc)?;

    // NFT-pool rewards are box credits, not token transfers.
    if pending > 0 {
        credit_box_reward(
            &mut ctx.accounts.box_reward,
            &ctx.accounts.farm,
            &ctx.accounts.user.key(),
            ctx.bumps.box_reward,
            pending,
            now,
        )?;
        user_stake.total_claimed = user_stake
            .total_claimed
            .checked_add(pending)
            .ok_or(FarmError::MathOverflow)?;
    }

    // Stake the weight and start (or extend) the holding streak.
    if user_stake.nft_count == 0 {
        user_stake.first_deposit_at = now;
    }
    user_stake.nft_count = user_stake
        .nft_count
        .checked_add(1)
        .ok_or(FarmError::MathOverflow)?;
    user_stake.amount = user_stake
        .amount
        .checked_add(point)
        .ok_or(FarmError::MathOverflow)?;
    user_stake.reset_debt(acc)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_add(point)
        .ok_or(FarmError::MathOverflow)?;

    let nft_deposit = &mut ctx.accounts.nft_deposit;
    nft_deposit.farm = ctx.accounts.farm.key();
    nft_deposit.depositor = ctx.accounts.user.key();
    nft_deposit.nft_mint = ctx.accounts.nft_mint.key();
    nft_deposit.point = point;
    nft_deposit.deposited_at = now;
    nft_deposit.is_active = true;
    nft_deposit.bump = ctx.bumps.nft_deposit;

    // Take custody.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_nft_account.to_account_info(),
        to: ctx.accounts.nft_escrow.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), 1)?;

    emit!(NftDepositEvent {
        user: ctx.accounts.user.key(),
        nft_mint: ctx.accounts.nft_mint.key(),
        point,
        timestamp: now,
    });
    msg!(
        "NFT {} deposited at weight {}",
        ctx.accounts.nft_mint.key(),
        point
    );

    Ok(())
}
