//! Claim instruction handler.
//!
//! Registers an allotment for the caller: the immediate share transfers at
//! once, the remainder becomes one linear-release entry.
//!
//! Window semantics:
//! - before activation: hard `ClaimNotStarted` error
//! - within the grace window: the claim is accepted (and activates the
//!   recipient on first call)
//! - after the window, never activated: this call records the permanent
//!   forfeiture and succeeds - a revert would roll the record back - and
//!   every later call fails with `AirdropBurnt`
//! - after the window, already activated: safe no-op

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::AirdropError;
use crate::events::{AirdropBurntEvent, ClaimRegisteredEvent};
use crate::state::{AirdropAccount, AirdropConfig};

/// Accounts required for claiming.
#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    /// The recipient claiming their allotment.
    #[account(mut)]
    pub recipient: Signer<'info>,

    /// The airdrop config.
    #[account(
        seeds = [AIRDROP_CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, AirdropConfig>,

    /// The recipient's airdrop ledger (created on first claim).
    #[account(
        init_if_needed,
        payer = recipient,
        space = AirdropAccount::LEN,
        seeds = [AIRDROP_ACCOUNT_SEED, config.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub airdrop_account: Account<'info, AirdropAccount>,

    /// Recipient's token account for the immediate payout.
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

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim `amount` from the airdrop.
pub fn handler(ctx: Context<ClaimAirdrop>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::ZeroAmount);

    let config = &ctx.accounts.config;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(config.claim_started(now), AirdropError::ClaimNotStarted);

    let airdrop_account = &mut ctx.accounts.airdrop_account;
    require!(!airdrop_account.burnt, AirdropError::AirdropBurnt);

    if airdrop_account.recipient == Pubkey::default() {
        airdrop_account.recipient = ctx.accounts.recipient.key();
        airdrop_account.bump = ctx.bumps.airdrop_account;
    }

    if !config.window_open(now) {
        if airdrop_account.activated_at == 0 {
            // Too late to start vesting; record the forfeiture permanently.
            airdrop_account.burnt = true;
            emit!(AirdropBurntEvent {
                recipient: ctx.accounts.recipient.key(),
                timestamp: now,
            });
            msg!(
                "Airdrop burnt for {}: first claim after the activation window",
                ctx.accounts.recipient.key()
            );
            return Ok(());
        }
        msg!("Activation window closed, claim ignored");
        return Ok(());
    }

    let immediate = airdrop_account.register_claim(amount, config.immediate_release_bps, now)?;
    let locked = amount
        .checked_sub(immediate)
        .ok_or(AirdropError::MathUnderflow)?;

    if immediate > 0 {
        require!(
            ctx.accounts.vault.amount >= immediate,
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
            immediate,
        )?;
    }

    emit!(ClaimRegisteredEvent {
        recipient: ctx.accounts.recipient.key(),
        amount,
        immediate,
        locked,
        timestamp: now,
    });
    msg!(
        "Claim registered: {} immediate, {} locked for linear release",
        immediate,
        locked
    );

    Ok(())
}
