//! Initialize instruction handler.
//!
//! Creates the farm and its reward vault. Pools are added separately.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::Farm;

/// Accounts required for farm initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin authority that will control the farm.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The farm account to be created, one per reward mint.
    #[account(
        init,
        payer = authority,
        space = Farm::LEN,
        seeds = [FARM_SEED, reward_mint.key().as_ref()],
        bump
    )]
    pub farm: Account<'info, Farm>,

    /// The mint rewards are paid in.
    pub reward_mint: Account<'info, Mint>,

    /// The vault every pool pays rewards from.
    /// Authority is the farm PDA and cannot be changed afterwards.
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, farm.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = farm
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize the farm.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reward_per_second` - Global reward emission rate
/// * `min_nft_hold_duration` - Seconds an NFT must stay deposited
/// * `point_oracle` - Identity allowed to publish NFT staking points
pub fn handler(
    ctx: Context<Initialize>,
    reward_per_second: u64,
    min_nft_hold_duration: i64,
    point_oracle: Pubkey,
) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let clock = Clock::get()?;

    farm.authority = ctx.accounts.authority.key();
    farm.reward_mint = ctx.accounts.reward_mint.key();
    farm.reward_vault = ctx.accounts.reward_vault.key();
    farm.point_oracle = point_oracle;
    farm.reward_per_second = reward_per_second;
    farm.total_alloc_point = 0;
    farm.pool_count = 0;
    farm.nft_pool_id = NO_NFT_POOL;
    farm.min_nft_hold_duration = min_nft_hold_duration.max(0);
    farm.paused = false;
    farm.created_at = clock.unix_timestamp;
    farm.last_updated = clock.unix_timestamp;
    farm.bump = ctx.bumps.farm;
    farm.vault_bump = ctx.bumps.reward_vault;

    msg!("Turbo farm initialized");
    msg!("Admin: {}", farm.authority);
    msg!("Reward mint: {}", farm.reward_mint);
    msg!("Reward rate: {} tokens/second", reward_per_second);

    Ok(())
}
