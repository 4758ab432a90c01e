//! Lock instruction handler.
//!
//! Pulls tokens from an authorized locker and appends a tranche to the
//! recipient's ledger, unlocking at `now + lock_period`.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::VestingError;
use crate::events::LockEvent;
use crate::state::{VestingAccount, VestingConfig};

/// Accounts required for locking.
#[derive(Accounts)]
pub struct Lock<'info> {
    /// The locker paying the tokens in. Must be on the allow-list.
    #[account(mut)]
    pub locker: Signer<'info>,

    /// The vesting config.
    #[account(
        seeds = [VESTING_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, VestingConfig>,

    /// The recipient the tranche belongs to.
    /// CHECK: Only used as the vesting account's PDA seed and stored key.
    pub recipient: UncheckedAccount<'info>,

    /// The recipient's vesting ledger (created on first lock).
    #[account(
        init_if_needed,
        payer = locker,
        space = VestingAccount::LEN,
        seeds = [VESTING_ACCOUNT_SEED, config.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    /// Locker's token account funding the tranche.
    #[account(
        mut,
        constraint = locker_token_account.mint == config.token_mint @ VestingError::InvalidTokenAccount,
        constraint = locker_token_account.owner == locker.key() @ VestingError::InvalidTokenAccount
    )]
    pub locker_token_account: Account<'info, TokenAccount>,

    /// The vesting vault.
    #[account(
        mut,
        constraint = vault.key() == config.vault @ VestingError::InvalidTokenAccount
    )]
    pub vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Lock `amount` for the recipient.
///
/// # Errors
/// Returns `NotAuthorizedLocker` unless the caller is on the allow-list.
pub fn handler(ctx: Context<Lock>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.config.is_locker(&ctx.accounts.locker.key()),
        VestingError::NotAuthorizedLocker
    );
    require!(amount > 0, VestingError::ZeroAmount);

    let clock = Clock::get()?;
    let unlock_time = clock
        .unix_timestamp
        .checked_add(ctx.accounts.config.lock_period)
        .ok_or(VestingError::MathOverflow)?;

    let vesting_account = &mut ctx.accounts.vesting_account;
    if vesting_account.recipient == Pubkey::default() {
        vesting_account.recipient = ctx.accounts.recipient.key();
        vesting_account.bump = ctx.bumps.vesting_account;
    }
    let index = vesting_account.push_tranche(amount, unlock_time)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.locker_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.locker.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?;

    emit!(LockEvent {
        locker: ctx.accounts.locker.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
        unlock_time,
        tranche_index: index,
    });
    msg!(
        "Locked {} for {} until {}, tranche {}",
        amount,
        ctx.accounts.recipient.key(),
        unlock_time,
        index
    );

    Ok(())
}
