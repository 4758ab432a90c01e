//! Fund rewards instruction handler.
//!
//! Deposits reward tokens into the farm's reward vault. Permissionless.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::state::Farm;

/// Accounts required for funding the reward vault.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The farm.
    #[account(
        mut,
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = reward_vault @ FarmError::InvalidTokenAccount,
        has_one = reward_mint @ FarmError::InvalidTokenAccount
    )]
    pub farm: Account<'info, Farm>,

    /// The reward mint.
    pub reward_mint: Account<'info, Mint>,

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == reward_mint.key() @ FarmError::InvalidTokenAccount,
        constraint = funder_token_account.owner == funder.key() @ FarmError::InvalidTokenAccount
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// The farm's reward vault.
    #[account(
        mut,
        constraint = reward_vault.key() == farm.reward_vault @ FarmError::InvalidTokenAccount
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, FarmError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?;

    let farm = &mut ctx.accounts.farm;
    let clock = Clock::get()?;
    farm.last_updated = clock.unix_timestamp;

    ctx.accounts.reward_vault.reload()?;
    msg!("Reward vault funded with {} tokens", amount);
    msg!("New vault balance: {}", ctx.accounts.reward_vault.amount);

    Ok(())
}
