//! Initialize instruction handler.
//!
//! Creates the vesting config and its token vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::VestingConfig;

/// Accounts required for initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The authority that will manage the locker allow-list.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The vesting config, one per token mint.
    #[account(
        init,
        payer = authority,
        space = VestingConfig::LEN,
        seeds = [VESTING_CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    /// The mint locked amounts are denominated in.
    pub token_mint: Account<'info, Mint>,

    /// The vault holding locked tokens until unlock.
    #[account(
        init,
        payer = authority,
        seeds = [VESTING_VAULT_SEED, config.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = config
    )]
    pub vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize the vesting ledger.
///
/// # Arguments
/// * `lock_period` - Fixed delay between locking and unlockability; zero
///   makes tranches immediately payable
pub fn handler(ctx: Context<Initialize>, lock_period: i64) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.authority = ctx.accounts.authority.key();
    config.token_mint = ctx.accounts.token_mint.key();
    config.vault = ctx.accounts.vault.key();
    config.lock_period = lock_period.max(0);
    config.lockers = Vec::new();
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    msg!("Vesting ledger initialized, lock period {}s", config.lock_period);

    Ok(())
}
