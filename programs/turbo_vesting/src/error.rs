//! Error types for the Turbo Vesting program.

use anchor_lang::prelude::*;

/// Custom error codes for the Turbo Vesting program.
#[error_code]
pub enum VestingError {
    /// Caller is not the config authority.
    #[msg("Unauthorized: caller is not the vesting authority")]
    Unauthorized,

    /// Caller is not on the locker allow-list.
    #[msg("Only an authorized locker can lock")]
    NotAuthorizedLocker,

    /// Cannot lock a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// The locker allow-list is full.
    #[msg("Locker allow-list is full")]
    LockerListFull,

    /// The recipient's tranche list is full.
    #[msg("Tranche limit reached for this recipient")]
    TrancheLimitReached,

    /// The vault does not hold enough tokens for the payout.
    #[msg("Insufficient vault funds for payout")]
    InsufficientVaultFunds,

    /// A token account failed mint or owner validation.
    #[msg("Token account mint or owner mismatch")]
    InvalidTokenAccount,

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,
}
