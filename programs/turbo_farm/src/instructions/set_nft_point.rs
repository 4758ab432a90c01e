//! Point-oracle publication handler.
//!
//! Upserts the staking weight for one NFT mint. Only the farm's configured
//! point oracle may write mappings; deposits read them leniently (a missing
//! mapping is weight 0).

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::error::FarmError;
use crate::state::{Farm, NftPoint};

/// Accounts required for publishing an NFT staking weight.
#[derive(Accounts)]
pub struct SetNftPoint<'info> {
    /// The point oracle.
    #[account(
        mut,
        constraint = oracle.key() == farm.point_oracle @ FarmError::NotPointOracle
    )]
    pub oracle: Signer<'info>,

    /// The farm.
    #[account(
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The NFT mint being weighted.
    pub nft_mint: Account<'info, Mint>,

    /// The point mapping (created on first publication).
    #[account(
        init_if_needed,
        payer = oracle,
        space = NftPoint::LEN,
        seeds = [NFT_POINT_SEED, farm.key().as_ref(), nft_mint.key().as_ref()],
        bump
    )]
    pub nft_point: Account<'info, NftPoint>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Publish the staking weight for an NFT mint.
pub fn handler(ctx: Context<SetNftPoint>, point: u64) -> Result<()> {
    let nft_point = &mut ctx.accounts.nft_point;

    nft_point.farm = ctx.accounts.farm.key();
    nft_point.nft_mint = ctx.accounts.nft_mint.key();
    nft_point.point = point;
    nft_point.bump = ctx.bumps.nft_point;

    msg!("Point for {} set to {}", nft_point.nft_mint, point);

    Ok(())
}
