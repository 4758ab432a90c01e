//! Claim-all handler.
//!
//! Releases every maturable portion across the recipient's entries in one
//! call. Repeatable without double-paying; with nothing due it succeeds and
//! changes nothing.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::AirdropError;
use crate::events::VestingReleasedEvent;
use crate::state::{AirdropAccount, AirdropConfig};

/// Accounts required for claiming all maturable amounts.
#[derive(Accounts)]
pub struct ClaimAllClaimable<'info> {
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

/// Release everything maturable across the recipient's entries.
pub fn handler(ctx: Context<ClaimAllClaimable>) -> Result<()> {
    let config = &ctx.accounts.config;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let airdrop_account = &mut ctx.accounts.airdrop_account;
    require!(!airdrop_account.burnt, AirdropError::AirdropBurnt);

    let released = airdrop_account.release_all(
        now,
        config.cliff_seconds,
        config.release_period_seconds,
        config.release_count,
    )?;

    if released == 0 {
        msg!("Nothing maturable");
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= released,
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
        released,
    )?;

    emit!(VestingReleasedEvent {
        recipient: ctx.accounts.recipient.key(),
        amount: released,
        timestamp: now,
    });
    msg!("Released {} across all entries", released);

    Ok(())
}
