//! Initialize instruction handler.
//!
//! Creates the airdrop config and its token vault with the default release
//! schedule. Claiming stays closed until the authority sets the activation
//! timestamp.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::AirdropConfig;

/// Accounts required for initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The authority that will activate claiming.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The airdrop config, one per token mint.
    #[account(
        init,
        payer = authority,
        space = AirdropConfig::LEN,
        seeds = [AIRDROP_CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub config: Account<'info, AirdropConfig>,

    /// The mint being distributed.
    pub token_mint: Account<'info, Mint>,

    /// The vault funding every payout.
    #[account(
        init,
        payer = authority,
        seeds = [AIRDROP_VAULT_SEED, config.key().as_ref()],
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

/// Initialize the airdrop distributor.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.authority = ctx.accounts.authority.key();
    config.token_mint = ctx.accounts.token_mint.key();
    config.vault = ctx.accounts.vault.key();
    config.start_claim_ts = 0;
    config.grace_period = DEFAULT_GRACE_PERIOD;
    config.immediate_release_bps = DEFAULT_IMMEDIATE_RELEASE_BPS;
    config.cliff_seconds = DEFAULT_CLIFF_SECONDS;
    config.release_period_seconds = DEFAULT_RELEASE_PERIOD;
    config.release_count = DEFAULT_RELEASE_COUNT;
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    msg!("Airdrop distributor initialized");
    msg!(
        "Schedule: {}bp immediate, {}d cliff, {} x {}d releases",
        config.immediate_release_bps,
        config.cliff_seconds / SECONDS_PER_DAY,
        config.release_count,
        config.release_period_seconds / SECONDS_PER_DAY
    );

    Ok(())
}
