//! # Turbo Vesting Program
//!
//! Tranche-based vesting ledger for the TURBO token. Authorized lockers (the
//! game reward distributor, sale contracts) lock amounts against recipients;
//! each lock becomes one tranche unlocking a fixed period later. Recipients
//! pull matured tranches by index, in batches, idempotently.

use anchor_lang::prelude::*;

declare_id!("8g8nx4Eb384RwHeYaiCwM1P63nB3noGrXptTimsxrpcC");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod turbo_vesting {
    use super::*;

    /// Initializes the vesting ledger for one token mint.
    ///
    /// # Arguments
    /// * `lock_period` - Fixed delay between locking and unlockability
    ///   (seconds, may be zero)
    pub fn initialize(ctx: Context<Initialize>, lock_period: i64) -> Result<()> {
        instructions::initialize::handler(ctx, lock_period)
    }

    /// Adds or removes addresses on the locker allow-list.
    ///
    /// # Errors
    /// Returns an error if the caller is not the config authority.
    pub fn set_lockers(
        ctx: Context<VestingAdmin>,
        lockers: Vec<Pubkey>,
        enabled: bool,
    ) -> Result<()> {
        instructions::admin::set_lockers_handler(ctx, lockers, enabled)
    }

    /// Locks `amount` for the recipient as a new tranche.
    ///
    /// # Errors
    /// Returns `NotAuthorizedLocker` unless the caller is allow-listed.
    pub fn lock(ctx: Context<Lock>, amount: u64) -> Result<()> {
        instructions::lock::handler(ctx, amount)
    }

    /// Pays out every matured, unclaimed tranche among `indices`.
    ///
    /// Never fails on immature, claimed or missing indices - they are
    /// skipped so batch callers stay safe.
    pub fn unlock(ctx: Context<Unlock>, indices: Vec<u64>) -> Result<()> {
        instructions::unlock::handler(ctx, indices)
    }

    /// Returns the number of tranches ever created for the recipient.
    pub fn get_user_vesting_length(ctx: Context<GetUserVestingLength>) -> Result<u64> {
        let length = ctx.accounts.vesting_account.tranches.len() as u64;
        msg!("Vesting length: {}", length);
        Ok(length)
    }
}

/// Accounts required for the vesting-length view.
#[derive(Accounts)]
pub struct GetUserVestingLength<'info> {
    /// The recipient's vesting ledger.
    pub vesting_account: Account<'info, state::VestingAccount>,
}
