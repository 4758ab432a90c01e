//! Admin instruction handlers.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::AirdropError;
use crate::state::AirdropConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AirdropAdmin<'info> {
    /// The config authority.
    #[account(
        constraint = authority.key() == config.authority @ AirdropError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The airdrop config.
    #[account(
        mut,
        seeds = [AIRDROP_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump,
        has_one = authority @ AirdropError::Unauthorized
    )]
    pub config: Account<'info, AirdropConfig>,
}

/// Open the activation window at `timestamp`.
pub fn set_start_claim_timestamp_handler(
    ctx: Context<AirdropAdmin>,
    timestamp: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.start_claim_ts = timestamp;

    msg!(
        "Claiming opens at {} (grace {}s)",
        timestamp,
        config.grace_period
    );

    Ok(())
}
