//! Pool creation handlers.
//!
//! Adding a pool changes `total_alloc_point`, which rescales every other
//! pool's share of the reward rate. All existing pools are therefore passed
//! in `remaining_accounts` (ordered by id) and force-settled before the new
//! weight takes effect.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::FarmError;
use crate::state::{Farm, Pool};
use crate::utils::sync_all_pools;

/// Accounts required for adding a fungible-token pool.
#[derive(Accounts)]
pub struct AddPool<'info> {
    /// The farm admin.
    #[account(
        mut,
        constraint = authority.key() == farm.authority @ FarmError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The farm.
    #[account(
        mut,
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The pool account to be created at the next pool id.
    #[account(
        init,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL_SEED, farm.key().as_ref(), &farm.pool_count.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// The mint staked into this pool.
    pub stake_mint: Account<'info, Mint>,

    /// The vault holding this pool's staked tokens.
    #[account(
        init,
        payer = authority,
        seeds = [STAKE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = farm
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Accounts required for adding the NFT pool.
///
/// The NFT pool has no stake mint or vault; custody lives in per-NFT escrow
/// accounts and stake amounts are oracle points.
#[derive(Accounts)]
pub struct AddNftPool<'info> {
    /// The farm admin.
    #[account(
        mut,
        constraint = authority.key() == farm.authority @ FarmError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The farm.
    #[account(
        mut,
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The pool account to be created at the next pool id.
    #[account(
        init,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL_SEED, farm.key().as_ref(), &farm.pool_count.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Add a fungible-token pool with the given allocation weight.
///
/// `box_payout` selects the reward destination policy: direct transfers from
/// the reward vault, or box-reward credits for game-integration pools.
pub fn handler(ctx: Context<AddPool>, alloc_point: u64, box_payout: bool) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    // Settle every existing pool under the old total weight first.
    sync_all_pools(
        &ctx.accounts.farm,
        &ctx.accounts.farm.key(),
        ctx.program_id,
        ctx.remaining_accounts,
        now,
        None,
    )?;

    let farm = &mut ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;

    pool.farm = farm.key();
    pool.pool_id = farm.pool_count;
    pool.kind = pool_kind::FUNGIBLE;
    pool.payout = if box_payout {
        payout::BOX_CREDIT
    } else {
        payout::DIRECT
    };
    pool.stake_mint = ctx.accounts.stake_mint.key();
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.alloc_point = alloc_point;
    pool.last_reward_time = now;
    pool.acc_reward_per_share = 0;
    pool.total_staked = 0;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.stake_vault;

    farm.pool_count = farm
        .pool_count
        .checked_add(1)
        .ok_or(FarmError::MathOverflow)?;
    farm.total_alloc_point = farm
        .total_alloc_point
        .checked_add(alloc_point)
        .ok_or(FarmError::MathOverflow)?;
    farm.last_updated = now;

    msg!(
        "Pool {} added: mint {}, weight {}",
        pool.pool_id,
        pool.stake_mint,
        alloc_point
    );

    Ok(())
}

/// Add the NFT pool. At most one may exist per farm.
pub fn add_nft_pool_handler(ctx: Context<AddNftPool>, alloc_point: u64) -> Result<()> {
    require!(
        !ctx.accounts.farm.has_nft_pool(),
        FarmError::NftPoolAlreadyExists
    );

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
    let pool = &mut ctx.accounts.pool;

    pool.farm = farm.key();
    pool.pool_id = farm.pool_count;
    pool.kind = pool_kind::NFT;
    pool.payout = payout::BOX_CREDIT;
    pool.stake_mint = Pubkey::default();
    pool.stake_vault = Pubkey::default();
    pool.alloc_point = alloc_point;
    pool.last_reward_time = now;
    pool.acc_reward_per_share = 0;
    pool.total_staked = 0;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = 0;

    farm.nft_pool_id = pool.pool_id;
    farm.pool_count = farm
        .pool_count
        .checked_add(1)
        .ok_or(FarmError::MathOverflow)?;
    farm.total_alloc_point = farm
        .total_alloc_point
        .checked_add(alloc_point)
        .ok_or(FarmError::MathOverflow)?;
    farm.last_updated = now;

    msg!("NFT pool added at id {}, weight {}", pool.pool_id, alloc_point);

    Ok(())
}
