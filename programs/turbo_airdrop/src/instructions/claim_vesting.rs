//! Per-entry release handler.
//!
//! Releases whatever portion of one entry has matured since its last
//! release. Calling with nothing newly matured, or with an out-of-range
//! index, is a safe no-op.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::AirdropError;
use crate::events::VestingReleasedEvent;
use crate::state::{AirdropAccount, AirdropConfig};

/// Accounts required for releasing from one entry.
#[derive(Accounts)]
pub struct ClaimVesting<'info> {
    /// The recipient releasing their vested tokens.
    pub recipient: Signer<'info>,

    /// The airdrop config.
    #[account(
        seeds = [AIRDROP_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, AirdropConfig>,

    /// The recipient's airdrop ledger.
    #[account(
        mut,
        seeds = [AIRDROP_ACCOUNT_SEED, config.key().as_ref(), recipient.key().as_ref()],
        bump = airdrop_account.bump,
        constraint = airdrop_account.recipient == recipient.key() @ AirdropError::Unauthorized
    )]
    pub airdrop_account: Account<'info, AirdropAccount>,

    /// Recipient's token account for the payout.
    #[account(
        mut,
        constraint = recipient_token_account.mint == config.token_mint @ AirdropError::InvalidTokenAccount,
        constraint = recipient_token_account.owner == recipient.key() @ AirdropError::InvalidTokenAccount
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// The airdrop vault.
    #[account(
        mut,
        constraint = vault.key() == config.vault @ AirdropError::InvalidTokenAccount
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Release the matured portion of entry `index`.
pub fn handler(ctx: Context<ClaimVesting>, index: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let airdrop_account = &mut ctx.accounts.airdrop_account;
    require!(!airdrop_account.burnt, AirdropError::AirdropBurnt);

    let released = airdrop_account.release_entry(
        index,
        now,
        config.cliff_seconds,
        config.release_period_seconds,
        config.release_count,
    )?;

    if released == 0 {
        msg!("Nothing matured on entry {}", index);
        return Ok(());
    }

    pay_release(&ctx, released)?;

    emit!(VestingReleasedEvent {
        recipient: ctx.accounts.recipient.key(),
        amount: released,
        timestamp: now,
    });
    msg!("Released {} from entry {}", released, index);

    Ok(())
}

/// Transfer a release payout from the vault to the recipient.
pub fn pay_release(ctx: &Context<ClaimVesting>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.vault.amount >= amount,
        AirdropError::InsufficientVaultFunds
    );

    let token_mint_key = ctx.accounts.config.token_mint;
    let seeds = &[
        AIRDROP_CONFIG_SEED,
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
        amount,
    )
}
