//! Error types for the Turbo Airdrop program.

use anchor_lang::prelude::*;

/// Custom error codes for the Turbo Airdrop program.
#[error_code]
pub enum AirdropError {
    /// Caller is not the config authority.
    #[msg("Unauthorized: caller is not the airdrop authority")]
    Unauthorized,

    /// Claiming has not been activated yet.
    #[msg("Claiming has not started")]
    ClaimNotStarted,

    /// The recipient's allotment was forfeited for missing the activation
    /// window.
    #[msg("Your airdrop was burnt due to not initializing vesting on time")]
    AirdropBurnt,

    /// Cannot claim a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// The recipient's entry list is full.
    #[msg("Release entry limit reached for this recipient")]
    EntryLimitReached,

    /// The vault does not hold enough tokens for the payout.
    #[msg("Insufficient vault funds for payout")]
    InsufficientVaultFunds,

    /// A token account failed mint or owner validation.
    #[msg("Token account mint or owner mismatch")]
    InvalidTokenAccount,

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow,
}
