//! # Turbo Airdrop Program
//!
//! Linear-release airdrop distributor for the TURBO token. Each accepted
//! claim pays a quarter immediately and locks the remainder behind a 30-day
//! cliff, releasing in three monthly steps. A recipient whose first claim
//! misses the two-day activation window forfeits their allotment for good.
//!
//! Schedule values are configuration, set at initialization - see
//! `constants`.

use anchor_lang::prelude::*;

declare_id!("FbaMJWS14yAPH68LwFAHxaBSukgBHnAY9VaEfhFxWerb");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::UserStatus;

#[program]
pub mod turbo_airdrop {
    use super::*;

    /// Initializes the airdrop distributor with the default schedule.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Opens the activation window at `timestamp`.
    ///
    /// # Errors
    /// Returns an error if the caller is not the config authority.
    pub fn set_start_claim_timestamp(ctx: Context<AirdropAdmin>, timestamp: i64) -> Result<()> {
        instructions::admin::set_start_claim_timestamp_handler(ctx, timestamp)
    }

    /// Claims `amount`: the immediate share transfers at once, the rest
    /// becomes a linear-release entry.
    ///
    /// # Errors
    /// Returns `ClaimNotStarted` before activation and `AirdropBurnt` once
    /// the recipient's allotment has been forfeited. A first claim arriving
    /// after the grace window records the forfeiture; later claims by an
    /// activated recipient outside the window are no-ops.
    pub fn claim(ctx: Context<ClaimAirdrop>, amount: u64) -> Result<()> {
        instructions::claim::handler(ctx, amount)
    }

    /// Releases the matured portion of entry `index`. Nothing newly matured
    /// (or an out-of-range index) is a safe no-op.
    pub fn claim_vesting(ctx: Context<ClaimVesting>, index: u64) -> Result<()> {
        instructions::claim_vesting::handler(ctx, index)
    }

    /// Releases every maturable portion across the recipient's entries.
    /// Repeatable without double-paying.
    pub fn claim_all_claimable(ctx: Context<ClaimAllClaimable>) -> Result<()> {
        instructions::claim_all::handler(ctx)
    }

    /// Returns the recipient's `{claimable, lock}` split. At every point
    /// `claimable + lock == total allotted - total paid`.
    pub fn get_user_status(ctx: Context<GetUserStatus>) -> Result<UserStatus> {
        let config = &ctx.accounts.config;
        let clock = Clock::get()?;

        let status = ctx.accounts.airdrop_account.status(
            clock.unix_timestamp,
            config.cliff_seconds,
            config.release_period_seconds,
            config.release_count,
        )?;
        msg!("claimable {}, lock {}", status.claimable, status.lock);
        Ok(status)
    }
}

/// Accounts required for the status view.
#[derive(Accounts)]
pub struct GetUserStatus<'info> {
    /// The airdrop config.
    #[account(
        seeds = [constants::AIRDROP_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, state::AirdropConfig>,

    /// The recipient's airdrop ledger.
    pub airdrop_account: Account<'info, state::AirdropAccount>,
}
