//! Admin instruction handlers.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::VestingError;
use crate::events::LockersChangedEvent;
use crate::state::VestingConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct VestingAdmin<'info> {
    /// The config authority.
    #[account(
        constraint = authority.key() == config.authority @ VestingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The vesting config.
    #[account(
        mut,
        seeds = [VESTING_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump,
        has_one = authority @ VestingError::Unauthorized
    )]
    pub config: Account<'info, VestingConfig>,
}

/// Add or remove addresses on the locker allow-list.
pub fn set_lockers_handler(
    ctx: Context<VestingAdmin>,
    lockers: Vec<Pubkey>,
    enabled: bool,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if enabled {
        for locker in &lockers {
            if config.is_locker(locker) {
                continue;
            }
            require!(
                config.lockers.len() < MAX_LOCKERS,
                VestingError::LockerListFull
            );
            config.lockers.push(*locker);
        }
    } else {
        config.lockers.retain(|existing| !lockers.contains(existing));
    }

    let clock = Clock::get()?;
    emit!(LockersChangedEvent {
        enabled,
        count: config.lockers.len() as u64,
        timestamp: clock.unix_timestamp,
    });
    msg!(
        "{} {} lockers, allow-list now holds {}",
        if enabled { "Enabled" } else { "Disabled" },
        lockers.len(),
        config.lockers.len()
    );

    Ok(())
}
