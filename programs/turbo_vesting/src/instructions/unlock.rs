//! Unlock instruction handler.
//!
//! Pays every matured, unclaimed tranche among the given indices to the
//! recipient. Missing, immature and already-claimed indices are skipped
//! silently so batch and retry callers never fail halfway. Callable by
//! anyone; tokens only ever reach the recipient.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::VestingError;
use crate::events::UnlockEvent;
use crate::state::{VestingAccount, VestingConfig};

/// Accounts required for unlocking.
#[derive(Accounts)]
pub struct Unlock<'info> {
    /// The caller triggering the payout.
    pub caller: Signer<'info>,

    /// The vesting config.
    #[account(
        seeds = [VESTING_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, VestingConfig>,

    /// The recipient's vesting ledger.
    #[account(
        mut,
        seeds = [VESTING_ACCOUNT_SEED, config.key().as_ref(), vesting_account.recipient.as_ref()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    /// Recipient's token account receiving the payout.
    #[account(
        mut,
        constraint = recipient_token_account.mint == config.token_mint @ VestingError::InvalidTokenAccount,
        constraint = recipient_token_account.owner == vesting_account.recipient @ VestingError::InvalidTokenAccount
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// The vesting vault.
    #[account(
        mut,
        constraint = vault.key() == config.vault @ VestingError::InvalidTokenAccount
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Unlock the payable tranches among `indices`.
pub fn handler(ctx: Context<Unlock>, indices: Vec<u64>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let vesting_account = &mut ctx.accounts.vesting_account;
    let (total, paid_count) = vesting_account.take_payable(&indices, now)?;

    if total == 0 {
        msg!("No payable tranches among {} indices", indices.len());
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= total,
        VestingError::InsufficientVaultFunds
    );

    let token_mint_key = ctx.accounts.config.token_mint;
    let seeds = &[
        VESTING_CONFIG_SEED,
        token_mint_key.as_ref(),
        &[ctx.accounts.config.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.recipient_token_account.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        total,
    )?;

    emit!(UnlockEvent {
        recipient: ctx.accounts.vesting_account.recipient,
        amount: total,
        tranches_paid: paid_count,
        timestamp: now,
    });
    msg!(
        "Unlocked {} across {} tranches for {}",
        total,
        paid_count,
        ctx.accounts.vesting_account.recipient
    );

    Ok(())
}
